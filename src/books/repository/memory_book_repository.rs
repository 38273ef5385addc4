use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::repository::Repository;
use crate::utils::keyed_lock::KeyedLocks;
use crate::utils::latency::LatencyStrategy;

// MemoryBookRepository keeps the shelf in process memory. Every call waits out the
// configured latency first and then reads or mutates the collection in one step under
// the write lock, so a completed call never observes a half-applied mutation.
#[derive(Debug)]
pub struct MemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
    latency: LatencyStrategy,
    key_locks: KeyedLocks,
}

impl MemoryBookRepository {
    pub fn new(latency: LatencyStrategy, initial: Vec<BookEntity>) -> Self {
        let mut books: Vec<BookEntity> = Vec::with_capacity(initial.len());
        for book in initial {
            if books.iter().any(|existing| existing.id() == book.id()) {
                warn!(isbn = book.isbn.as_str(), "skipping seed book with duplicate isbn");
                continue;
            }
            books.push(book);
        }
        Self {
            books: RwLock::new(books),
            latency,
            key_locks: KeyedLocks::new(),
        }
    }

    pub fn empty(latency: LatencyStrategy) -> Self {
        Self::new(latency, vec![])
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn list(&self) -> Vec<BookEntity> {
        self.latency.simulate().await;
        let books = self.books.read().await;
        debug!(count = books.len(), "listing books");
        books.clone()
    }

    async fn add(&self, entity: BookEntity) -> bool {
        let key = entity.id();
        let _key = self.key_locks.lock(key.as_str()).await;
        self.latency.simulate().await;
        let mut books = self.books.write().await;
        if books.iter().any(|book| book.id() == key) {
            debug!(isbn = entity.isbn.as_str(), "rejecting book with duplicate isbn");
            return false;
        }
        debug!(isbn = entity.isbn.as_str(), "adding book");
        books.push(entity);
        true
    }

    async fn get(&self, id: &str) -> Option<BookEntity> {
        self.latency.simulate().await;
        let books = self.books.read().await;
        books.iter().find(|book| book.id() == id).cloned()
    }

    async fn remove(&self, id: &str) -> bool {
        let _key = self.key_locks.lock(id).await;
        self.latency.simulate().await;
        let mut books = self.books.write().await;
        let initial_len = books.len();
        books.retain(|book| book.id() != id);
        debug!(isbn = id, removed = initial_len - books.len(), "removing book");
        books.len() < initial_len
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn mark_as_read(&self, isbn: &str) -> bool {
        let _key = self.key_locks.lock(isbn).await;
        self.latency.simulate().await;
        let mut books = self.books.write().await;
        debug!(isbn, "marking book as read");
        match books.iter_mut().find(|book| book.id() == isbn) {
            Some(book) => {
                book.mark_as_read();
                true
            }
            None => false,
        }
    }

    async fn search(&self, query: &str) -> Vec<BookEntity> {
        self.latency.simulate().await;
        let books = self.books.read().await;
        debug!(query, "searching books");
        books.iter().filter(|book| book.matches(query)).cloned().collect()
    }
}
