use crate::course::{CourseError, Instructor, Student};

/// Helper to set up a course with two enrolled students
fn setup_course() -> Instructor {
    let mut instructor = Instructor::new("Mr. Kiptoo", "Business Finance");
    instructor.add_student(Student::new("Brian", "S001"));
    instructor.add_student(Student::new("Kevin", "S002"));
    instructor
}

#[test]
fn test_assign_grade_to_enrolled_student() {
    let mut instructor = setup_course();

    let result = instructor.assign_grade("S001", "Assignment 1", 85);
    assert_eq!(result, Ok(()));

    let student = instructor.student("S001").map(|s| s.grade("Assignment 1"));
    assert_eq!(student, Some(Some(85)));
}

#[test]
fn test_grade_overwrite_keeps_one_entry() {
    let mut student = Student::new("Brian", "S001");

    student.add_assignment("A1", 85);
    student.add_assignment("A1", 90);

    // Last write wins, and the entry keeps its original position
    assert_eq!(student.assignments().len(), 1);
    assert_eq!(student.grade("A1"), Some(90));
}

#[test]
fn test_grade_overwrite_preserves_recording_order() {
    let mut student = Student::new("Brian", "S001");

    student.add_assignment("A1", 85);
    student.add_assignment("A2", 78);
    student.add_assignment("A1", 90);

    let lines: Vec<String> = student.display_grades().collect();
    assert_eq!(lines, vec!["A1: 90".to_string(), "A2: 78".to_string()]);
}

#[test]
fn test_assign_grade_to_unknown_student_mutates_nothing() {
    let mut instructor = setup_course();

    let result = instructor.assign_grade("S999", "Assignment 1", 85);
    assert_eq!(
        result,
        Err(CourseError::StudentNotFound {
            student_id: "S999".to_string(),
            course: "Business Finance".to_string(),
        })
    );

    // No student picked up the grade
    assert_eq!(instructor.students().len(), 2);
    for student in instructor.students() {
        assert!(student.assignments().is_empty());
    }
}

#[test]
fn test_duplicate_student_id_shadows_later_entry() {
    let mut instructor = setup_course();
    instructor.add_student(Student::new("Second Brian", "S001"));

    let result = instructor.assign_grade("S001", "Assignment 1", 70);
    assert_eq!(result, Ok(()));

    // The first match took the grade; the shadowed entry is untouched
    assert_eq!(instructor.student("S001").map(Student::name), Some("Brian"));
    assert!(
        instructor
            .students()
            .iter()
            .any(|student| student.name() == "Second Brian" && student.assignments().is_empty())
    );
}

#[test]
fn test_display_all_grades_lists_every_student() {
    let mut instructor = setup_course();
    assert_eq!(instructor.assign_grade("S001", "Assignment 1", 85), Ok(()));
    assert_eq!(instructor.assign_grade("S001", "Assignment 2", 90), Ok(()));
    assert_eq!(instructor.assign_grade("S002", "Assignment 1", 78), Ok(()));

    let lines: Vec<String> = instructor.display_all_grades().collect();
    assert_eq!(
        lines,
        vec![
            "grades for Brian:".to_string(),
            "- Assignment 1: 85".to_string(),
            "- Assignment 2: 90".to_string(),
            "grades for Kevin:".to_string(),
            "- Assignment 1: 78".to_string(),
        ]
    );

    // The report is restartable
    assert_eq!(instructor.display_all_grades().count(), 5);
}
