use std::fs;
use std::path::Path;
use lazy_static::lazy_static;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::core::domain::SeedSource;
use crate::core::library::LibraryResult;

lazy_static! {
    static ref SAMPLE_BOOKS: Vec<BookEntity> = vec![
        BookEntity::new("A Revolução dos Bichos", "George Orwell", "978-85-3590-951-1"),
        BookEntity {
            read: true,
            ..BookEntity::new("1984", "George Orwell", "978-85-3591-482-9")
        },
        BookEntity::new("O Pequeno Príncipe", "Antoine de Saint-Exupéry", "978-85-7827-024-8"),
        BookEntity::new("Dom Quixote", "Miguel de Cervantes", "978-8572322521"),
    ];
}

// fresh copy of the sample shelf a new process starts with
pub fn sample_books() -> Vec<BookEntity> {
    SAMPLE_BOOKS.clone()
}

// reads a JSON array of books, e.g. [{"title": "...", "author": "...", "isbn": "...", "read": false}]
pub fn load_seed_file(path: &Path) -> LibraryResult<Vec<BookEntity>> {
    let json = fs::read_to_string(path)?;
    let books: Vec<BookDto> = serde_json::from_str(json.as_str())?;
    info!(path = ?path, count = books.len(), "loaded seed books");
    Ok(books.iter().map(BookEntity::from).collect())
}

pub fn initial_books(seed: &SeedSource) -> LibraryResult<Vec<BookEntity>> {
    match seed {
        SeedSource::Sample => Ok(sample_books()),
        SeedSource::Empty => Ok(vec![]),
        SeedSource::File(path) => load_seed_file(path),
    }
}
