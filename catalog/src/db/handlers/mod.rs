//! Repository implementations for database access.
//!
//! Each repository wraps a `&mut SqliteConnection` and implements the [`Repository`] trait.
//!
//! # Available Repositories
//!
//! - [`Items`]: catalog items, plus lookup by code
//! - [`Categories`]: item categories
//!
//! # Common Pattern
//!
//! ```ignore
//! use catalog::db::handlers::{Items, Repository};
//!
//! async fn example(pool: &sqlx::SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut conn = pool.acquire().await?;
//!     let mut repo = Items::new(&mut conn);
//!
//!     let items = repo.list().await?;
//!     let mouse = repo.get_by_code("MOU01").await?;
//!     Ok(())
//! }
//! ```

pub mod categories;
pub mod items;
pub mod repository;

pub use categories::Categories;
pub use items::Items;
pub use repository::Repository;
