//! Demonstration driver replaying three small roster scenarios:
//! library lending, course grading, and department payroll.

use roster_system::{Book, Department, Employee, Instructor, LibraryMember, Student, Summary};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Walk a member through borrowing and returning books, including the
/// rejected double-borrow
fn run_lending_demo() {
    println!("---- library lending ----");

    let mut phoenix = Book::new("Harry Potter and the Order of the Phoenix", "J. K. Rowling");
    let mut hunger_games = Book::new("The Hunger Games", "Suzanne Collins");
    let mut letter = Book::new("The Letter for the King", "Tonke Dragt");

    let mut joe = LibraryMember::new("Joe", "LM001");
    let mut amina = LibraryMember::new("Amina", "LM002");

    match joe.borrow_book(&mut phoenix) {
        Ok(()) => println!("{phoenix}"),
        Err(e) => println!("error: {e}"),
    }
    match joe.borrow_book(&mut hunger_games) {
        Ok(()) => println!("{hunger_games}"),
        Err(e) => println!("error: {e}"),
    }
    print!("{}", Summary::member_report(&joe));

    // Amina tries to borrow a book Joe already holds
    match amina.borrow_book(&mut phoenix) {
        Ok(()) => println!("{phoenix}"),
        Err(e) => println!("error: {e}"),
    }

    match joe.return_book(&mut phoenix) {
        Ok(()) => println!("{phoenix}"),
        Err(e) => println!("error: {e}"),
    }

    // Returning it a second time is rejected
    match joe.return_book(&mut phoenix) {
        Ok(()) => println!("{phoenix}"),
        Err(e) => println!("error: {e}"),
    }

    match joe.borrow_book(&mut letter) {
        Ok(()) => println!("{letter}"),
        Err(e) => println!("error: {e}"),
    }
    print!("{}", Summary::member_report(&joe));
}

/// Enroll students, record grades, and print the course report
fn run_course_demo() {
    println!("---- course grading ----");

    let mut instructor = Instructor::new("Mr. Kiptoo", "Business Finance");
    instructor.add_student(Student::new("Brian", "S001"));
    instructor.add_student(Student::new("Kevin", "S002"));

    for (student_id, assignment, grade) in [
        ("S001", "Assignment 1", 85),
        ("S001", "Assignment 2", 90),
        ("S002", "Assignment 1", 78),
        ("S003", "Assignment 1", 66),
    ] {
        if let Err(e) = instructor.assign_grade(student_id, assignment, grade) {
            println!("error: {e}");
        }
    }

    for line in instructor.display_all_grades() {
        println!("{line}");
    }
    print!("{}", Summary::grade_table(&instructor));
}

/// Build a payroll roster, apply a raise, and print the totals
fn run_department_demo() {
    println!("---- department payroll ----");

    let mut department = Department::new("Research and Development");
    department.add_employee(Employee::new("Mark Maina", "E001", 50_000));
    department.add_employee(Employee::new("Victor Juma", "E002", 70_000));

    for line in department.display_all() {
        println!("{line}");
    }

    println!("total salary expenditure: ${}", department.total_salary_expenditure());

    match department.update_salary("E001", 65_000) {
        Ok(()) => {
            println!("total salary expenditure: ${}", department.total_salary_expenditure());
        }
        Err(e) => println!("error: {e}"),
    }

    print!("{}", Summary::payroll_table(&department));

    match Summary::department_json(&department) {
        Ok(snapshot) => println!("{snapshot}"),
        Err(e) => println!("error: {e}"),
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry().with(filter).with(fmt::layer()).init();

    run_lending_demo();
    run_course_demo();
    run_department_demo();
}
