use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::shelf::domain::ShelfService;

pub struct SearchBooksCommand {
    shelf_service: Box<dyn ShelfService>,
}

impl SearchBooksCommand {
    pub fn new(shelf_service: Box<dyn ShelfService>) -> Self {
        Self {
            shelf_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    pub query: String,
}

impl SearchBooksCommandRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        self.shelf_service.search_books(req.query.as_str())
            .await.map_err(CommandError::from).map(SearchBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::shelf::command::fixtures::shared_services;
    use crate::shelf::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};

    #[tokio::test]
    async fn test_should_run_search_books() {
        let (svc, _) = shared_services();
        let cmd = SearchBooksCommand::new(svc);

        let res = cmd.execute(SearchBooksCommandRequest::new("orwell")).await.expect("should search books");
        assert_eq!(2, res.books.len());
        let res = cmd.execute(SearchBooksCommandRequest::new("príncipe")).await.expect("should search books");
        assert_eq!(1, res.books.len());
        let res = cmd.execute(SearchBooksCommandRequest::new("NONEXISTENT")).await.expect("should search books");
        assert!(res.books.is_empty());
    }
}
