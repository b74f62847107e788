//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with SQLite.
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  (API request handlers)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - queries)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - database records)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   SQLite    │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`handlers`]: Repository implementations for CRUD operations
//! - [`models`]: Database record structures matching table schemas
//! - [`errors`]: Database-specific error types
//! - [`pool`]: Connection pool construction from configuration
//!
//! # Migrations
//!
//! Migrations live in the crate's `migrations/` directory and are embedded at compile time.
//! [`crate::migrator`] exposes them:
//!
//! ```ignore
//! catalog::migrator().run(&pool).await?;
//! ```

pub mod errors;
pub mod handlers;
pub mod models;
pub mod pool;
