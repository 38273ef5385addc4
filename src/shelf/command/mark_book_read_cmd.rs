use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::shelf::domain::ShelfService;

pub struct MarkBookReadCommand {
    shelf_service: Box<dyn ShelfService>,
}

impl MarkBookReadCommand {
    pub fn new(shelf_service: Box<dyn ShelfService>) -> Self {
        Self {
            shelf_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MarkBookReadCommandRequest {
    pub isbn: String,
}

impl MarkBookReadCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

// Marking a book that is already read succeeds as well and carries the same message.
#[derive(Debug, Serialize)]
pub struct MarkBookReadCommandResponse {
    pub isbn: String,
    pub read: bool,
    pub message: String,
}

impl MarkBookReadCommandResponse {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            read: true,
            message: format!("Book with ISBN {} marked as read.", isbn),
        }
    }
}

#[async_trait]
impl Command<MarkBookReadCommandRequest, MarkBookReadCommandResponse> for MarkBookReadCommand {
    async fn execute(&self, req: MarkBookReadCommandRequest) -> Result<MarkBookReadCommandResponse, CommandError> {
        self.shelf_service.mark_book_as_read(req.isbn.as_str()).await
            .map_err(CommandError::from).map(|_| MarkBookReadCommandResponse::new(req.isbn.as_str()))
    }
}
