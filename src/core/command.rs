use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    State {
        message: String,
    },
    NotFound {
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

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::AlreadyOpen { message } => {
                CommandError::State { message }
            }
            LibraryError::NotOpen { message } => {
                CommandError::State { message }
            }
            LibraryError::NoActiveMember { message } => {
                CommandError::State { message }
            }
            LibraryError::BookNotFound { message, .. } => {
                CommandError::NotFound { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::{BookLocation, LibraryError};

    #[tokio::test]
    async fn test_should_build_command_error() {
        let _ = CommandError::State { message: "test".to_string() };
        let _ = CommandError::NotFound { message: "test".to_string() };
        let _ = CommandError::Validation { message: "test".to_string(), reason_code: None };
        let _ = CommandError::Serialization { message: "test".to_string() };
        let _ = CommandError::Runtime { message: "test".to_string(), reason_code: None };
    }

    #[tokio::test]
    async fn test_should_convert_library_error() {
        assert!(matches!(CommandError::from(LibraryError::not_open()), CommandError::State { .. }));
        assert!(matches!(CommandError::from(LibraryError::already_open()), CommandError::State { .. }));
        assert!(matches!(CommandError::from(LibraryError::no_active_member()), CommandError::State { .. }));
        let not_found = CommandError::from(LibraryError::book_not_found(4, BookLocation::Catalog));
        assert!(matches!(not_found, CommandError::NotFound { ref message } if message == "The library does not have book 4."));
    }
}
