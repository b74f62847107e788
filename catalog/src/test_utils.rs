//! Test utilities for integration testing (available with `test-utils` feature).

use crate::config::{Config, PoolSettings};
use crate::db::handlers::{Categories, Items, Repository};
use crate::db::models::categories::{CategoryCreateDBRequest, CategoryDBResponse};
use crate::db::models::items::{ItemCreateDBRequest, ItemDBResponse};
use axum_test::TestServer;
use sqlx::SqlitePool;

/// Full router over `pool`, which is expected to be migrated already (`#[sqlx::test]` does that).
pub async fn create_test_app(pool: SqlitePool) -> TestServer {
    crate::Application::new_with_pool(create_test_config(), pool).into_test_server()
}

pub fn create_test_config() -> Config {
    let mut config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        slow_statement_threshold_ms: 100,
        ..Default::default()
    };
    config.database.pool = PoolSettings {
        max_connections: 1,
        min_connections: 0,
        ..Default::default()
    };
    config
}

pub async fn create_test_item(pool: &SqlitePool, name: &str, code: &str) -> ItemDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Items::new(&mut conn)
        .create(&ItemCreateDBRequest {
            name: name.to_string(),
            code: code.to_string(),
            description: None,
            price: None,
            quantity: None,
        })
        .await
        .expect("Failed to create test item")
}

pub async fn create_test_category(pool: &SqlitePool, name: &str) -> CategoryDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Categories::new(&mut conn)
        .create(&CategoryCreateDBRequest {
            name: name.to_string(),
            description: None,
        })
        .await
        .expect("Failed to create test category")
}
