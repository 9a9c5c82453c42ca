//! Roster and lending state tracking for small libraries, courses, and
//! departments.
//!
//! This crate provides a keyed registry with linear lookup, an
//! exclusive borrow/return guard for library books, and graded course
//! and payroll rosters built on the same core.

pub mod book;
pub mod course;
pub mod department;
pub mod lending;
pub mod registry;
pub mod report;

pub use book::Book;
pub use course::{Assignment, CourseError, Instructor, Student};
pub use department::{Department, DepartmentError, Employee};
pub use lending::{LendingError, LibraryMember, Loan};
pub use registry::{Keyed, Registry};
pub use report::{ReportError, Summary};
