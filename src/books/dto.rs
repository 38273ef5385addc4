use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult, ReadStatus};

// BookDto is a data transfer object for the shelf service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(default)]
    pub read: bool,
}

impl BookDto {
    pub fn new(title: &str, author: &str, isbn: &str) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            read: false,
        }
    }

    // required fields must hold more than whitespace; values are stored untrimmed
    pub fn validate(&self) -> LibraryResult<()> {
        if self.title.trim().is_empty() {
            return Err(LibraryError::validation("book title must not be empty", Some("EMPTY_TITLE".to_string())));
        }
        if self.author.trim().is_empty() {
            return Err(LibraryError::validation("book author must not be empty", Some("EMPTY_AUTHOR".to_string())));
        }
        if self.isbn.trim().is_empty() {
            return Err(LibraryError::validation("book isbn must not be empty", Some("EMPTY_ISBN".to_string())));
        }
        Ok(())
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookDto {
    fn is_read(&self) -> bool {
        self.read
    }

    fn status(&self) -> ReadStatus {
        ReadStatus::from(self.read)
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            read: other.read,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            read: other.read,
        }
    }
}
