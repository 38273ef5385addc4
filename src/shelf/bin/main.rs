use serde::Serialize;
use tracing::{info, warn};
use bookshelf::books::factory::create_book_repository;
use bookshelf::core::command::{Command, CommandError};
use bookshelf::core::domain::Configuration;
use bookshelf::core::library::LibraryError;
use bookshelf::shelf::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use bookshelf::shelf::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use bookshelf::shelf::command::mark_book_read_cmd::{MarkBookReadCommand, MarkBookReadCommandRequest};
use bookshelf::shelf::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use bookshelf::shelf::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use bookshelf::shelf::factory::create_shelf_service;
use bookshelf::utils::logs::setup_tracing;

// Walks one reader session against the in-memory shelf. Latency, seed and log level come
// from BOOKSHELF_LATENCY_MS, BOOKSHELF_LATENCY_JITTER_MS, BOOKSHELF_SEED_FILE and BOOKSHELF_LOG_LEVEL.
#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    let config = Configuration::from_env("demo")?;
    setup_tracing(config.tracing_level());
    info!(latency = ?config.latency, seed = ?config.seed, "starting bookshelf");

    let repo = create_book_repository(&config)?;
    let list = ListBooksCommand::new(create_shelf_service(&config, repo.clone()));
    let add = AddBookCommand::new(create_shelf_service(&config, repo.clone()));
    let mark = MarkBookReadCommand::new(create_shelf_service(&config, repo.clone()));
    let remove = RemoveBookCommand::new(create_shelf_service(&config, repo.clone()));
    let search = SearchBooksCommand::new(create_shelf_service(&config, repo));

    report("list", list.execute(ListBooksCommandRequest::new()).await)?;
    report("add", add.execute(AddBookCommandRequest::new(
        "Admirável Mundo Novo", "Aldous Huxley", "978-8525056009")).await)?;
    report("add duplicate", add.execute(AddBookCommandRequest::new(
        "Brave New World", "Aldous Huxley", "978-8525056009")).await)?;
    report("mark as read", mark.execute(MarkBookReadCommandRequest::new("978-8525056009")).await)?;
    report("search", search.execute(SearchBooksCommandRequest::new("huxley")).await)?;
    report("remove", remove.execute(RemoveBookCommandRequest::new("978-8525056009")).await)?;
    report("remove again", remove.execute(RemoveBookCommandRequest::new("978-8525056009")).await)?;
    report("list", list.execute(ListBooksCommandRequest::new()).await)?;
    Ok(())
}

fn report<T: Serialize>(step: &str, res: Result<T, CommandError>) -> Result<(), LibraryError> {
    match res {
        Ok(body) => println!("{}: {}", step, serde_json::to_string_pretty(&body)?),
        Err(err) => {
            warn!(step, error = ?err, "command failed");
            println!("{}: {}", step, err.user_message());
        }
    }
    Ok(())
}
