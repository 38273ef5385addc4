use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::shelf::domain::ShelfService;

pub struct RemoveBookCommand {
    shelf_service: Box<dyn ShelfService>,
}

impl RemoveBookCommand {
    pub fn new(shelf_service: Box<dyn ShelfService>) -> Self {
        Self {
            shelf_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub isbn: String,
}

impl RemoveBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub message: String,
}

impl RemoveBookCommandResponse {
    pub fn new(isbn: &str) -> Self {
        Self {
            message: format!("Book with ISBN {} removed.", isbn),
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.shelf_service.remove_book(req.isbn.as_str()).await
            .map_err(CommandError::from).map(|_| RemoveBookCommandResponse::new(req.isbn.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::shelf::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::shelf::command::fixtures::shared_services;
    use crate::shelf::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let (add_svc, remove_svc) = shared_services();
        let add_cmd = AddBookCommand::new(add_svc);
        let remove_cmd = RemoveBookCommand::new(remove_svc);

        let _ = add_cmd.execute(AddBookCommandRequest::new("Clean Code", "Robert C. Martin", "978-0132350884"))
            .await.expect("should add book");
        let res = remove_cmd.execute(RemoveBookCommandRequest::new("978-0132350884")).await.expect("should remove book");
        assert_eq!("Book with ISBN 978-0132350884 removed.", res.message.as_str());

        let res = remove_cmd.execute(RemoveBookCommandRequest::new("978-0132350884")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
