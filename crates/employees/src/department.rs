//! Department value object.

use serde::Serialize;

use forgehr_core::ValueObject;

/// Department an employee belongs to.
///
/// Immutable: there is no way to change the text once built, and records only
/// hand out shared references to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Department(Box<str>);

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().into_boxed_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl ValueObject for Department {}

impl core::fmt::Display for Department {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Department {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Department {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_by_value() {
        assert_eq!(Department::from("IT"), Department::new(String::from("IT")));
        assert_ne!(Department::from("IT"), Department::from("QA"));
    }

    #[test]
    fn blank_detection() {
        assert!(Department::from("  ").is_blank());
        assert!(!Department::from("HR").is_blank());
    }
}
