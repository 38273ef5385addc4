use std::sync::Arc;
use async_trait::async_trait;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::shelf::domain::ShelfService;

// ShelfServiceImpl turns the store's boolean outcomes into LibraryError values and
// validates new books before they reach the store.
pub struct ShelfServiceImpl {
    shelf_id: String,
    book_repository: Arc<dyn BookRepository>,
}

impl ShelfServiceImpl {
    pub fn new(config: &Configuration, book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            shelf_id: config.shelf_id.to_string(),
            book_repository,
        }
    }
}

#[async_trait]
impl ShelfService for ShelfServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.list().await;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        book.validate()?;
        if !self.book_repository.add(BookEntity::from(book)).await {
            return Err(LibraryError::duplicate_key(
                format!("book with isbn {} already exists", book.isbn).as_str()));
        }
        info!(shelf = self.shelf_id.as_str(), isbn = book.isbn.as_str(), "added book");
        Ok(book.clone())
    }

    async fn mark_book_as_read(&self, isbn: &str) -> LibraryResult<()> {
        if !self.book_repository.mark_as_read(isbn).await {
            return Err(LibraryError::not_found(format!("book not found for {}", isbn).as_str()));
        }
        info!(shelf = self.shelf_id.as_str(), isbn, "marked book as read");
        Ok(())
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<()> {
        if !self.book_repository.remove(isbn).await {
            return Err(LibraryError::not_found(format!("book not found for removal {}", isbn).as_str()));
        }
        info!(shelf = self.shelf_id.as_str(), isbn, "removed book");
        Ok(())
    }

    async fn search_books(&self, query: &str) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.search(query).await;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(isbn).await
            .map(|b| BookDto::from(&b))
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", isbn).as_str()))
    }
}
