use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::core::library::ReadStatus;
use crate::shelf::domain::ShelfService;

pub struct GetBookCommand {
    shelf_service: Box<dyn ShelfService>,
}

impl GetBookCommand {
    pub fn new(shelf_service: Box<dyn ShelfService>) -> Self {
        Self {
            shelf_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub isbn: String,
}

impl GetBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: BookDto,
    pub status: ReadStatus,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        let status = book.status();
        Self {
            book,
            status,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.shelf_service.find_book_by_isbn(req.isbn.as_str())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}
