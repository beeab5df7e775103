use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

pub type BookId = u32;
pub type Day = u32;

// BookLocation names the collection a book id was looked up in.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BookLocation {
    Catalog,
    Loans,
}

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    AlreadyOpen {
        message: String,
    },
    NotOpen {
        message: String,
    },
    NoActiveMember {
        message: String,
    },
    BookNotFound {
        book_id: BookId,
        location: BookLocation,
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn already_open() -> LibraryError {
        LibraryError::AlreadyOpen { message: "The library is already open!".to_string() }
    }

    pub fn not_open() -> LibraryError {
        LibraryError::NotOpen { message: "The library is not open.".to_string() }
    }

    pub fn no_active_member() -> LibraryError {
        LibraryError::NoActiveMember { message: "No member is currently being served.".to_string() }
    }

    pub fn book_not_found(book_id: BookId, location: BookLocation) -> LibraryError {
        let message = match location {
            BookLocation::Catalog => format!("The library does not have book {}.", book_id),
            BookLocation::Loans => format!("The member does not have book {}.", book_id),
        };
        LibraryError::BookNotFound { book_id, location, message }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io error {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::AlreadyOpen { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotOpen { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NoActiveMember { message } => {
                write!(f, "{}", message)
            }
            LibraryError::BookNotFound { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// BookStatus is derived from where a book is: on a loan list it has a due date.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    CheckedOut,
}

// OutcomeKind separates a transaction that happened from a negative answer to a valid request.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum OutcomeKind {
    Completed,
    Declined,
}
