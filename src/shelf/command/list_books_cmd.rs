use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::shelf::domain::ShelfService;

pub struct ListBooksCommand {
    shelf_service: Box<dyn ShelfService>,
}

impl ListBooksCommand {
    pub fn new(shelf_service: Box<dyn ShelfService>) -> Self {
        Self {
            shelf_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListBooksCommandRequest {}

impl ListBooksCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.shelf_service.list_books()
            .await.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::shelf::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::shelf::command::fixtures::shared_services;
    use crate::shelf::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};

    #[tokio::test]
    async fn test_should_run_list_books() {
        let (add_svc, list_svc) = shared_services();
        let add_cmd = AddBookCommand::new(add_svc);
        let list_cmd = ListBooksCommand::new(list_svc);

        let res = list_cmd.execute(ListBooksCommandRequest::new()).await.expect("should list books");
        assert_eq!(4, res.books.len());

        let _ = add_cmd.execute(AddBookCommandRequest::new("Clean Code", "Robert C. Martin", "978-0132350884"))
            .await.expect("should add book");
        let res = list_cmd.execute(ListBooksCommandRequest::new()).await.expect("should list books");
        assert_eq!(5, res.books.len());
        assert_eq!("978-0132350884", res.books[4].isbn.as_str());
    }
}
