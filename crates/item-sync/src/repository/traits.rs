//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for a remote collection resource.
//! Implementations can use HTTP, in-memory fakes, etc.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// CRUD over a collection resource
///
/// Generic over any Entity type. Ids are chosen by the caller, never by the
/// resource, so writes do not hand an entity back.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// List the whole collection, in resource order
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Create an entity under its own id
    async fn create(&self, entity: &T) -> DomainResult<()>;

    /// Replace the entity stored under `entity.id()`
    async fn update(&self, entity: &T) -> DomainResult<()>;

    /// Delete entity by ID
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}
