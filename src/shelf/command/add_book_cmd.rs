use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::shelf::domain::ShelfService;

pub struct AddBookCommand {
    shelf_service: Box<dyn ShelfService>,
}

impl AddBookCommand {
    pub fn new(shelf_service: Box<dyn ShelfService>) -> Self {
        Self {
            shelf_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(default)]
    pub read: bool,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            read: false,
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto {
            read: self.read,
            ..BookDto::new(self.title.as_str(), self.author.as_str(), self.isbn.as_str())
        }
    }
}


#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
    pub message: String,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        let message = format!("\"{}\" added to the shelf.", book.title);
        Self {
            book,
            message,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.shelf_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
