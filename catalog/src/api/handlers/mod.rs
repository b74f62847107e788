//! HTTP request handlers.
//!
//! One module per resource plus [`meta`] for the service-level routes. Every resource handler
//! follows the same shape: extractors validate the request, a repository from
//! [`crate::db::handlers`] performs exactly one statement, and the result is returned as JSON
//! or mapped to an [`crate::errors::Error`].

pub mod categories;
pub mod items;
pub mod meta;
