use crate::core::domain::Identifiable;
use crate::core::library::ReadStatus;

pub mod model;

pub trait Book: Identifiable {
    fn is_read(&self) -> bool;
    fn status(&self) -> ReadStatus;
}
