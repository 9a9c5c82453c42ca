use std::fmt;

use crate::course::Instructor;
use crate::department::Department;
use crate::lending::LibraryMember;

/// Failures while producing a report
#[derive(Debug)]
pub enum ReportError {
    /// The snapshot could not be serialized
    Serialize(String),
}

impl std::error::Error for ReportError {}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

/// Report builders for roster state
///
/// Everything here produces values; nothing touches the console.
#[derive(Debug)]
pub struct Summary;

impl Summary {
    /// Multi-line report of the books a member currently holds
    #[must_use]
    pub fn member_report(member: &LibraryMember) -> String {
        if member.loans().is_empty() {
            return format!("{} has no borrowed books\n", member.name());
        }

        let mut report = format!("{} has borrowed the following books:\n", member.name());
        for line in member.list_borrowed() {
            report.push_str(&format!("- {line}\n"));
        }

        report
    }

    /// Markdown table of every grade recorded in the course
    #[must_use]
    pub fn grade_table(instructor: &Instructor) -> String {
        let mut table = String::from("| Student | Assignment | Grade |\n");
        table.push_str("|---------|------------|-------|\n");

        for student in instructor.students() {
            for entry in student.assignments() {
                table.push_str(&format!(
                    "| {} | {} | {} |\n",
                    student.name(),
                    entry.name(),
                    entry.grade()
                ));
            }
        }

        table
    }

    /// Markdown payroll table with a closing total row
    #[must_use]
    pub fn payroll_table(department: &Department) -> String {
        let mut table = String::from("| ID | Name | Salary |\n");
        table.push_str("|----|------|--------|\n");

        for employee in department.employees() {
            table.push_str(&format!(
                "| {} | {} | {} |\n",
                employee.employee_id(),
                employee.name(),
                employee.salary()
            ));
        }

        table.push_str(&format!("| | total | {} |\n", department.total_salary_expenditure()));
        table
    }

    /// Pretty-JSON snapshot of a department roster
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Serialize` if the roster cannot be
    /// serialized to JSON
    pub fn department_json(department: &Department) -> Result<String, ReportError> {
        serde_json::to_string_pretty(department).map_err(|e| ReportError::Serialize(e.to_string()))
    }
}
