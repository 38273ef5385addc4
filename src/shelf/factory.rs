use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::shelf::domain::ShelfService;
use crate::shelf::domain::service::ShelfServiceImpl;

pub fn create_shelf_service(config: &Configuration, book_repository: Arc<dyn BookRepository>) -> Box<dyn ShelfService> {
    Box::new(ShelfServiceImpl::new(config, book_repository))
}
