use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::registry::{Keyed, Registry};

/// Failures of course roster operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseError {
    /// No enrolled student has the given id
    StudentNotFound {
        /// The id that was looked up
        student_id: String,
        /// Course the lookup ran against
        course: String,
    },
}

impl std::error::Error for CourseError {}

impl fmt::Display for CourseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StudentNotFound { student_id, course } => {
                write!(f, "student with id {student_id} not found in course {course}")
            }
        }
    }
}

/// One graded assignment entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Assignment {
    /// Assignment name, unique per student
    name: String,
    /// Recorded grade
    grade: u32,
}

impl Assignment {
    /// Assignment name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recorded grade
    #[must_use]
    pub fn grade(&self) -> u32 {
        self.grade
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.grade)
    }
}

/// A student and the grades recorded for them
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Student {
    /// Display name of the student
    name: String,
    /// Student id used for roster lookups
    student_id: String,
    /// Graded assignments, in the order each name was first recorded
    assignments: Vec<Assignment>,
}

impl Student {
    /// Create a student with no grades yet
    #[must_use]
    pub fn new(name: &str, student_id: &str) -> Self {
        Self { name: name.to_string(), student_id: student_id.to_string(), assignments: Vec::new() }
    }

    /// Display name of the student
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Student id used for roster lookups
    #[must_use]
    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// Record a grade, overwriting any earlier grade for the same name
    ///
    /// Assignment names are unique per student; a repeated name keeps
    /// its original position and takes the new grade (last write wins)
    pub fn add_assignment(&mut self, assignment: &str, grade: u32) {
        if let Some(entry) = self.assignments.iter_mut().find(|entry| entry.name == assignment) {
            entry.grade = grade;
        } else {
            self.assignments.push(Assignment { name: assignment.to_string(), grade });
        }
        info!(student = %self.name, assignment, grade, "grade recorded");
    }

    /// Grade recorded for the given assignment, if any
    #[must_use]
    pub fn grade(&self, assignment: &str) -> Option<u32> {
        self.assignments.iter().find(|entry| entry.name == assignment).map(Assignment::grade)
    }

    /// Graded assignments in recording order
    #[must_use]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// One "name: grade" line per assignment, in recording order
    pub fn display_grades(&self) -> impl Iterator<Item = String> + '_ {
        self.assignments.iter().map(ToString::to_string)
    }
}

impl Keyed for Student {
    fn key(&self) -> &str {
        &self.student_id
    }
}

/// An instructor and the students enrolled in their course
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Instructor {
    /// Display name of the instructor
    name: String,
    /// Name of the course taught
    course_name: String,
    /// Enrolled students
    students: Registry<Student>,
}

impl Instructor {
    /// Create an instructor with an empty roster
    #[must_use]
    pub fn new(name: &str, course_name: &str) -> Self {
        Self {
            name: name.to_string(),
            course_name: course_name.to_string(),
            students: Registry::new(),
        }
    }

    /// Display name of the instructor
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the course taught
    #[must_use]
    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    /// Enrolled students, in enrollment order
    #[must_use]
    pub fn students(&self) -> &Registry<Student> {
        &self.students
    }

    /// Enroll a student
    ///
    /// Enrollment is an unconditional append; a duplicate id is
    /// accepted and shadowed by keyed lookups, which return the first
    /// match
    pub fn add_student(&mut self, student: Student) {
        info!(
            course = %self.course_name,
            student = %student.name(),
            id = %student.student_id(),
            "student enrolled"
        );
        self.students.add(student);
    }

    /// Look up an enrolled student by id
    #[must_use]
    pub fn student(&self, student_id: &str) -> Option<&Student> {
        self.students.find(student_id)
    }

    /// Record a grade for the student with the given id
    ///
    /// # Errors
    ///
    /// Returns `CourseError::StudentNotFound` when no enrolled student
    /// has the id; nothing is mutated in that case
    pub fn assign_grade(
        &mut self,
        student_id: &str,
        assignment: &str,
        grade: u32,
    ) -> Result<(), CourseError> {
        match self.students.find_mut(student_id) {
            Some(student) => {
                student.add_assignment(assignment, grade);
                Ok(())
            }
            None => Err(CourseError::StudentNotFound {
                student_id: student_id.to_string(),
                course: self.course_name.clone(),
            }),
        }
    }

    /// Per-student grade lines for the whole roster
    ///
    /// Each student contributes a header line followed by one line per
    /// recorded grade; the sequence is lazy and can be restarted
    pub fn display_all_grades(&self) -> impl Iterator<Item = String> + '_ {
        self.students.iter().flat_map(|student| {
            std::iter::once(format!("grades for {}:", student.name()))
                .chain(student.display_grades().map(|line| format!("- {line}")))
        })
    }
}

// Include tests module
#[cfg(test)]
mod tests;
