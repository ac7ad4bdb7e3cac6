use forgehr_employees::{Company, demo};

fn run_demo(company_name: &str) -> (String, usize) {
    let company = Company::new(company_name);
    let mut out = Vec::new();
    demo::run(&company, &mut out).expect("demo writes to a Vec");
    let text = String::from_utf8(out).expect("transcript is utf-8");
    (text, company.live_count())
}

fn total_employee_lines(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|line| line.starts_with("Total Employees: "))
        .collect()
}

#[test]
fn company_counts_follow_the_walkthrough() {
    let (text, _) = run_demo("TechSolutions");

    // start, after adding the sixth employee, final statistics
    assert_eq!(
        total_employee_lines(&text),
        vec![
            "Total Employees: 0",
            "Total Employees: 7",
            "Total Employees: 7",
        ]
    );
}

#[test]
fn deep_copy_section_shows_independent_records() {
    let (text, _) = run_demo("TechSolutions");

    let modified = text
        .split("Original (Modified):")
        .nth(1)
        .expect("modified section present");
    let (original_part, copy_part) = modified
        .split_once("Deep Copy (Unchanged):")
        .expect("unchanged copy section present");

    assert!(original_part.contains("Name: Zain Malik (Senior)"));
    assert!(original_part.contains("Salary: $65000"));
    assert!(copy_part.contains("Name: Zain Malik\n"));
    assert!(copy_part.contains("Salary: $58000"));
    assert!(copy_part.contains("Department: IT"));
}

#[test]
fn passing_section_reports_both_styles() {
    let (text, _) = run_demo("TechSolutions");

    assert!(text.contains("[Passed by Value] Ahmed Khan"));
    assert!(text.contains("[Passed by Reference]\n--- Employee Details ---\nCompany: TechSolutions\nName: Sara Ali"));
}

#[test]
fn transcript_ends_with_completion_banner() {
    let (text, _) = run_demo("TechSolutions");
    assert!(text.trim_end().ends_with(
        "======================================\n   PROGRAM COMPLETED\n======================================"
    ));
}

#[test]
fn walkthrough_leaves_no_live_records() {
    let (_, live) = run_demo("Isolated");
    assert_eq!(live, 0);
}
