//! Base repository trait for database operations.

use crate::db::errors::Result;

/// Base repository trait providing the operations every resource supports.
///
/// A repository is a data access layer for one table. Implementations wrap a borrowed
/// connection so the caller decides whether the work runs on a pooled connection or inside a
/// transaction. Each method issues exactly one SQL statement.
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities (no identifier)
    type CreateRequest;

    /// The request type for saving a full entity (identifier included)
    type SaveRequest;

    /// The response/DTO type returned by operations
    type Response;

    /// The identifier type for lookups
    type Id: Send + Sync;

    /// Create a new entity, letting the database assign its identifier
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// Get an entity by ID
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>>;

    /// List every entity, ordered by ID
    async fn list(&mut self) -> Result<Vec<Self::Response>>;

    /// Replace the entity with the request's ID, inserting it if it doesn't exist
    async fn save(&mut self, request: &Self::SaveRequest) -> Result<Self::Response>;

    /// Delete an entity by ID. Returns whether a row was removed.
    async fn delete(&mut self, id: Self::Id) -> Result<bool>;
}
