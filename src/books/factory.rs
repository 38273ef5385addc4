use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::books::seed::initial_books;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

pub fn create_book_repository(config: &Configuration) -> LibraryResult<Arc<dyn BookRepository>> {
    let books = initial_books(&config.seed)?;
    Ok(Arc::new(MemoryBookRepository::new(config.latency, books)))
}
