use async_trait::async_trait;
use crate::core::domain::Identifiable;

// Repository abstracts an ordered, in-process collection keyed by Identifiable::id.
// Outcomes the caller is expected to handle are reported as plain values, not errors.
#[async_trait]
pub trait Repository<Entity: Identifiable>: Sync + Send {
    // copy of every entity in insertion order
    async fn list(&self) -> Vec<Entity>;

    // appends the entity unless its id is already present
    async fn add(&self, entity: Entity) -> bool;

    // get an entity by id
    async fn get(&self, id: &str) -> Option<Entity>;

    // removes every entity with the id and reports whether the collection shrank
    async fn remove(&self, id: &str) -> bool;
}
