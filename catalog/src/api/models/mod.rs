//! API request and response data models.
//!
//! These types define the JSON shapes exchanged with clients and carry the `utoipa` schema
//! annotations used for the OpenAPI document. Conversions to and from the database models in
//! [`crate::db::models`] live next to each type.

pub mod categories;
pub mod items;
