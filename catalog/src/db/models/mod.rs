//! Database record models matching table schemas.
//!
//! These structs are what repositories accept and return. They are kept apart from the API
//! models in [`crate::api::models`] so that the wire shape (field names, optional ids) can
//! evolve independently of the storage shape.
//!
//! Each resource has three models:
//!
//! - `*CreateDBRequest`: a record without an identifier, for inserts
//! - `*SaveDBRequest`: a full record including its identifier, for upserts
//! - `*DBResponse`: a stored row
//!
//! # Conversion to API Models
//!
//! ```ignore
//! use catalog::api::models::items::ItemResponse;
//!
//! let stored: ItemDBResponse = repo.create(&request).await?;
//! let response = ItemResponse::from(stored);
//! ```

pub mod categories;
pub mod items;
