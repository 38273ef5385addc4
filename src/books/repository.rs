pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;


#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    // sets read on the first book with the isbn, true when such a book exists
    async fn mark_as_read(&self, isbn: &str) -> bool;

    async fn search(&self, query: &str) -> Vec<BookEntity>;
}
