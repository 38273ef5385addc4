use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::ReadStatus;

// BookEntity is a single record on the shelf; isbn is its unique key and read only
// moves from false to true through the shelf operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntity {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub read: bool,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            read: false,
        }
    }

    pub fn mark_as_read(&mut self) {
        self.read = true;
    }

    // title and author match case-insensitively, isbn only as typed
    pub fn matches(&self, query: &str) -> bool {
        let lowered = query.to_lowercase();
        self.title.to_lowercase().contains(lowered.as_str()) ||
            self.author.to_lowercase().contains(lowered.as_str()) ||
            self.isbn.contains(query)
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookEntity {
    fn is_read(&self) -> bool {
        self.read
    }

    fn status(&self) -> ReadStatus {
        ReadStatus::from(self.read)
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Title: {} | Author: {} | ISBN: {} | Status: {}",
               self.title, self.author, self.isbn, self.status())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Identifiable;
    use crate::core::library::ReadStatus;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("1984", "George Orwell", "978-85-3591-482-9");
        assert_eq!("1984", book.title.as_str());
        assert_eq!("George Orwell", book.author.as_str());
        assert_eq!("978-85-3591-482-9", book.id().as_str());
        assert!(!book.is_read());
    }

    #[tokio::test]
    async fn test_should_mark_as_read() {
        let mut book = BookEntity::new("1984", "George Orwell", "isbn");
        book.mark_as_read();
        book.mark_as_read();
        assert!(book.is_read());
        assert_eq!(ReadStatus::Read, book.status());
    }

    #[tokio::test]
    async fn test_should_match_query() {
        let book = BookEntity::new("Dom Quixote", "Miguel de Cervantes", "978-8572322521X");
        assert!(book.matches("quixote"));
        assert!(book.matches("CERVANTES"));
        assert!(book.matches("8572322"));
        assert!(book.matches("2521X"));
        assert!(!book.matches("2521x"));
        assert!(!book.matches("orwell"));
    }

    #[tokio::test]
    async fn test_should_format_book() {
        let book = BookEntity::new("1984", "George Orwell", "isbn");
        assert_eq!("Title: 1984 | Author: George Orwell | ISBN: isbn | Status: Unread", book.to_string());
    }
}
