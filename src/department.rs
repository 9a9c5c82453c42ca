use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::registry::{Keyed, Registry};

/// Failures of department roster operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentError {
    /// No employee with the given id is on the roster
    EmployeeNotFound {
        /// The id that was looked up
        employee_id: String,
        /// Department the lookup ran against
        department: String,
    },
}

impl std::error::Error for DepartmentError {}

impl fmt::Display for DepartmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmployeeNotFound { employee_id, department } => {
                write!(f, "employee with id {employee_id} not found in department {department}")
            }
        }
    }
}

/// An employee with a recorded salary
///
/// The salary is unsigned, so the expected non-negative range holds by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Employee {
    /// Display name of the employee
    name: String,
    /// Employee id used for roster lookups
    employee_id: String,
    /// Current salary
    salary: u64,
}

impl Employee {
    /// Create an employee with a starting salary
    #[must_use]
    pub fn new(name: &str, employee_id: &str, salary: u64) -> Self {
        Self { name: name.to_string(), employee_id: employee_id.to_string(), salary }
    }

    /// Display name of the employee
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Employee id used for roster lookups
    #[must_use]
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// Current salary
    #[must_use]
    pub fn salary(&self) -> u64 {
        self.salary
    }

    /// Overwrite the salary in place
    pub fn update_salary(&mut self, new_salary: u64) {
        self.salary = new_salary;
        info!(employee = %self.name, salary = new_salary, "salary updated");
    }
}

impl Keyed for Employee {
    fn key(&self) -> &str {
        &self.employee_id
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "employee {}: {}, salary ${}", self.employee_id, self.name, self.salary)
    }
}

/// A department and the employees on its roster
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Department {
    /// Department name
    name: String,
    /// Employees on the roster
    employees: Registry<Employee>,
}

impl Department {
    /// Create a department with an empty roster
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), employees: Registry::new() }
    }

    /// Department name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Employees on the roster, in hire order
    #[must_use]
    pub fn employees(&self) -> &Registry<Employee> {
        &self.employees
    }

    /// Add an employee to the roster
    ///
    /// Hiring is an unconditional append; a duplicate id is accepted
    /// and shadowed by keyed lookups, which return the first match
    pub fn add_employee(&mut self, employee: Employee) {
        info!(
            department = %self.name,
            employee = %employee.name(),
            id = %employee.employee_id(),
            "employee added"
        );
        self.employees.add(employee);
    }

    /// Look up an employee by id
    #[must_use]
    pub fn employee(&self, employee_id: &str) -> Option<&Employee> {
        self.employees.find(employee_id)
    }

    /// Update the salary of the employee with the given id
    ///
    /// # Errors
    ///
    /// Returns `DepartmentError::EmployeeNotFound` when no employee has
    /// the id; nothing is mutated in that case
    pub fn update_salary(
        &mut self,
        employee_id: &str,
        new_salary: u64,
    ) -> Result<(), DepartmentError> {
        match self.employees.find_mut(employee_id) {
            Some(employee) => {
                employee.update_salary(new_salary);
                Ok(())
            }
            None => Err(DepartmentError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
                department: self.name.clone(),
            }),
        }
    }

    /// Total salary expenditure across the roster
    #[must_use]
    pub fn total_salary_expenditure(&self) -> u64 {
        self.employees.aggregate(Employee::salary)
    }

    /// One detail line per employee, in hire order
    ///
    /// The sequence is lazy and borrows the roster, so it can be
    /// restarted by calling this again.
    pub fn display_all(&self) -> impl Iterator<Item = String> + '_ {
        self.employees.display_all()
    }
}
