use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::book::Book;

/// Failures of the borrow/return guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LendingError {
    /// The book is already held by some member
    AlreadyBorrowed {
        /// Title of the contested book
        title: String,
    },
    /// The book is not in this member's loan list
    NotBorrowed {
        /// Name of the member attempting the return
        member: String,
        /// Title of the book
        title: String,
    },
}

impl std::error::Error for LendingError {}

impl fmt::Display for LendingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyBorrowed { title } => {
                write!(f, "'{title}' is currently borrowed by someone else")
            }
            Self::NotBorrowed { member, title } => {
                write!(f, "{member} does not have '{title}' borrowed")
            }
        }
    }
}

/// Member-side record of one held book
///
/// The member never aliases the [`Book`] itself; the loan list owns
/// these records and releasing a book removes its record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Loan {
    /// Title of the held book
    title: String,
    /// Author of the held book
    author: String,
}

impl Loan {
    /// Title of the held book
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author of the held book
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Whether this record refers to the given book
    fn matches(&self, book: &Book) -> bool {
        self.title == book.title() && self.author == book.author()
    }
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

/// A library member holding zero or more borrowed books
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibraryMember {
    /// Display name of the member
    name: String,
    /// Membership id
    member_id: String,
    /// Currently held books, in borrow order
    loans: Vec<Loan>,
}

impl LibraryMember {
    /// Create a member with an empty loan list
    #[must_use]
    pub fn new(name: &str, member_id: &str) -> Self {
        Self { name: name.to_string(), member_id: member_id.to_string(), loans: Vec::new() }
    }

    /// Display name of the member
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Membership id
    #[must_use]
    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    /// Currently held books, in borrow order
    #[must_use]
    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    /// Borrow a book if no one holds it yet
    ///
    /// The guard is a plain test-and-set on the book's held flag; the
    /// flag and the loan record change together or not at all.
    ///
    /// # Errors
    ///
    /// Returns `LendingError::AlreadyBorrowed` when the book is held,
    /// leaving both the book and this member unchanged
    pub fn borrow_book(&mut self, book: &mut Book) -> Result<(), LendingError> {
        if book.is_borrowed() {
            return Err(LendingError::AlreadyBorrowed { title: book.title().to_string() });
        }

        book.mark_borrowed();
        self.loans
            .push(Loan { title: book.title().to_string(), author: book.author().to_string() });
        info!(member = %self.name, book = %book.title(), "book borrowed");
        Ok(())
    }

    /// Return a book previously borrowed by this member
    ///
    /// # Errors
    ///
    /// Returns `LendingError::NotBorrowed` when the book is not in this
    /// member's loan list, leaving both the book and this member
    /// unchanged
    pub fn return_book(&mut self, book: &mut Book) -> Result<(), LendingError> {
        match self.loans.iter().position(|loan| loan.matches(book)) {
            Some(pos) => {
                self.loans.remove(pos);
                book.mark_returned();
                info!(member = %self.name, book = %book.title(), "book returned");
                Ok(())
            }
            None => Err(LendingError::NotBorrowed {
                member: self.name.clone(),
                title: book.title().to_string(),
            }),
        }
    }

    /// One detail line per held book, in borrow order
    ///
    /// The sequence is lazy and borrows the member, so it can be
    /// restarted by calling this again.
    pub fn list_borrowed(&self) -> impl Iterator<Item = String> + '_ {
        self.loans.iter().map(ToString::to_string)
    }
}
