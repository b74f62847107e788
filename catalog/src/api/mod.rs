//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: Axum route handlers for all endpoints
//! - **[`models`]**: Request/response data structures for API communication
//! - **[`extractors`]**: Query-parameter and body extractors shared by the handlers
//!
//! # API Structure
//!
//! - **Items** (`/items/*`, also served under `/itens/*`): list, get by ID, get by code, create,
//!   update, delete
//! - **Categories** (`/categorias/*`): list, get by ID, create, update, delete
//! - **Meta**: `/api` banner, `/healthz`, `/docs` and `/swagger/doc.json`
//!
//! Each path accepts exactly one verb; anything else gets `405 Método não permitido`.

pub mod extractors;
pub mod handlers;
pub mod models;
