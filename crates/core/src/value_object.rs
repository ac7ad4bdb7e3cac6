//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are **immutable**: to "modify" one,
/// build a new one. An employee's department is the canonical example here;
/// it is fixed when the record is constructed and only ever read afterwards.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Department(Box<str>);
///
/// impl ValueObject for Department {}
///
/// assert_eq!(Department("IT".into()), Department("IT".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
