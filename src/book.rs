use std::fmt;

use serde::{Deserialize, Serialize};

/// A library book that can be held by at most one member at a time
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Book {
    /// Title of the book
    title: String,
    /// Author of the book
    author: String,
    /// Whether the book is currently held by a member
    borrowed: bool,
}

impl Book {
    /// Create a book that starts out available
    #[must_use]
    pub fn new(title: &str, author: &str) -> Self {
        Self { title: title.to_string(), author: author.to_string(), borrowed: false }
    }

    /// Title of the book
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author of the book
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Whether the book is currently held by a member
    #[must_use]
    pub fn is_borrowed(&self) -> bool {
        self.borrowed
    }

    /// Set the held flag; the borrowing member records the matching loan
    pub(crate) fn mark_borrowed(&mut self) {
        self.borrowed = true;
    }

    /// Clear the held flag once the loan record is removed
    pub(crate) fn mark_returned(&mut self) {
        self.borrowed = false;
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} (borrowed: {})", self.title, self.author, self.borrowed)
    }
}
