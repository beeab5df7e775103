use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::library::{BookId, OutcomeKind};

// Outcome is the result of a lending operation: the plain-text message plus the member and books it touched.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub message: String,
    pub member: Option<String>,
    pub book_ids: Vec<BookId>,
}

impl Outcome {
    pub fn completed(message: &str) -> Self {
        Self::build(OutcomeKind::Completed, message)
    }

    pub fn declined(message: &str) -> Self {
        Self::build(OutcomeKind::Declined, message)
    }

    pub fn with_member(mut self, name: &str) -> Self {
        self.member = Some(name.to_string());
        self
    }

    pub fn with_books(mut self, book_ids: Vec<BookId>) -> Self {
        self.book_ids = book_ids;
        self
    }

    pub fn is_completed(&self) -> bool {
        self.kind == OutcomeKind::Completed
    }

    fn build(kind: OutcomeKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
            member: None,
            book_ids: vec![],
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
