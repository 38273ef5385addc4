use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

impl CommandError {
    // text a presentation layer can surface to the reader as-is
    pub fn user_message(&self) -> String {
        match self {
            CommandError::DuplicateKey { .. } => {
                "A book with this ISBN is already on the shelf.".to_string()
            }
            CommandError::NotFound { .. } => {
                "Book not found.".to_string()
            }
            CommandError::Validation { .. } => {
                "Please fill in title, author and ISBN.".to_string()
            }
            CommandError::Serialization { .. } | CommandError::Runtime { .. } => {
                "Something went wrong, please try again.".to_string()
            }
        }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        let retryable = other.retryable();
        match other {
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code, retryable }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_convert_library_error() {
        assert!(matches!(CommandError::from(LibraryError::duplicate_key("test")), CommandError::DuplicateKey { .. }));
        assert!(matches!(CommandError::from(LibraryError::not_found("test")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::validation("test", None)), CommandError::Validation { .. }));
        assert!(matches!(CommandError::from(LibraryError::serialization("test")), CommandError::Serialization { .. }));
        assert!(matches!(CommandError::from(LibraryError::runtime("test", None)), CommandError::Runtime { retryable: true, .. }));
    }

    #[tokio::test]
    async fn test_should_carry_retryable_from_library_error() {
        let err = LibraryError::runtime("test", None);
        let expected = err.retryable();
        match CommandError::from(err) {
            CommandError::Runtime { retryable, .. } => assert_eq!(expected, retryable),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_should_build_user_message() {
        let err = CommandError::DuplicateKey { message: "test".to_string() };
        assert_eq!("A book with this ISBN is already on the shelf.", err.user_message());
        let err = CommandError::NotFound { message: "test".to_string() };
        assert_eq!("Book not found.", err.user_message());
    }
}
