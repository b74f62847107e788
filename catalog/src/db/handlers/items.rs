//! Database repository for catalog items.

use crate::db::errors::Result;
use crate::db::handlers::repository::Repository;
use crate::db::models::items::{ItemCreateDBRequest, ItemDBResponse, ItemSaveDBRequest};
use crate::types::ItemId;
use sqlx::{FromRow, SqliteConnection};
use tracing::instrument;

// Database entity model
#[derive(Debug, Clone, FromRow)]
struct Item {
    pub id: ItemId,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl From<Item> for ItemDBResponse {
    fn from(src: Item) -> Self {
        Self {
            id: src.id,
            name: src.name,
            code: src.code,
            description: src.description,
            price: src.price,
            quantity: src.quantity,
        }
    }
}

pub struct Items<'c> {
    db: &'c mut SqliteConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Items<'c> {
    type CreateRequest = ItemCreateDBRequest;
    type SaveRequest = ItemSaveDBRequest;
    type Response = ItemDBResponse;
    type Id = ItemId;

    #[instrument(skip(self, request), fields(name = %request.name, code = %request.code), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, code, description, price, quantity)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, code, description, price, quantity
            "#,
        )
        .bind(request.name.as_str())
        .bind(request.code.as_str())
        .bind(request.description.as_deref())
        .bind(request.price)
        .bind(request.quantity)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(item.into())
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let item = sqlx::query_as::<_, Item>("SELECT id, name, code, description, price, quantity FROM items WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(item.map(Into::into))
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let items = sqlx::query_as::<_, Item>("SELECT id, name, code, description, price, quantity FROM items ORDER BY id")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(items.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, request), fields(item_id = request.id), err)]
    async fn save(&mut self, request: &Self::SaveRequest) -> Result<Self::Response> {
        // Full-record replace keyed by id; an unknown id becomes an insert carrying that id
        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (id, name, code, description, price, quantity)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                code = excluded.code,
                description = excluded.description,
                price = excluded.price,
                quantity = excluded.quantity
            RETURNING id, name, code, description, price, quantity
            "#,
        )
        .bind(request.id)
        .bind(request.name.as_str())
        .bind(request.code.as_str())
        .bind(request.description.as_deref())
        .bind(request.price)
        .bind(request.quantity)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(item.into())
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl<'c> Items<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// Find the item whose code is exactly `code` (case-sensitive).
    ///
    /// Codes aren't unique; when several items share one, the lowest id wins.
    #[instrument(skip(self), err)]
    pub async fn get_by_code(&mut self, code: &str) -> Result<Option<ItemDBResponse>> {
        let item = sqlx::query_as::<_, Item>(
            "SELECT id, name, code, description, price, quantity FROM items WHERE code = ? ORDER BY id LIMIT 1",
        )
        .bind(code)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(item.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    fn create_request(name: &str, code: &str) -> ItemCreateDBRequest {
        ItemCreateDBRequest {
            name: name.to_string(),
            code: code.to_string(),
            description: Some(format!("Test item: {name}")),
            price: Some(49.9),
            quantity: Some(3),
        }
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_assigns_identifier(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Items::new(&mut conn);

        let first = repo.create(&create_request("Mouse", "MOU01")).await.unwrap();
        let second = repo.create(&create_request("Teclado", "TEC001")).await.unwrap();

        assert!(first.id > 0);
        assert!(second.id > first.id);
        assert_eq!(first.name, "Mouse");
        assert_eq!(first.code, "MOU01");
        assert_eq!(first.description.as_deref(), Some("Test item: Mouse"));
        assert_eq!(first.price, Some(49.9));
        assert_eq!(first.quantity, Some(3));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_get_by_id(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Items::new(&mut conn);

        let created = repo.create(&create_request("Mouse", "MOU01")).await.unwrap();

        let found = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created.clone()));

        let missing = repo.get_by_id(created.id + 1000).await.unwrap();
        assert!(missing.is_none());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_returns_all_items_in_id_order(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Items::new(&mut conn);

        assert!(repo.list().await.unwrap().is_empty());

        let a = repo.create(&create_request("A", "A1")).await.unwrap();
        let b = repo.create(&create_request("B", "B1")).await.unwrap();
        let c = repo.create(&create_request("C", "C1")).await.unwrap();

        let ids: Vec<_> = repo.list().await.unwrap().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_get_by_code_is_case_sensitive(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Items::new(&mut conn);

        let created = repo.create(&create_request("Teclado", "TEC001")).await.unwrap();

        let found = repo.get_by_code("TEC001").await.unwrap();
        assert_eq!(found.map(|i| i.id), Some(created.id));

        assert!(repo.get_by_code("tec001").await.unwrap().is_none());
        assert!(repo.get_by_code("TEC00").await.unwrap().is_none());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_get_by_code_prefers_lowest_id(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Items::new(&mut conn);

        let first = repo.create(&create_request("Original", "DUP")).await.unwrap();
        repo.create(&create_request("Copy", "DUP")).await.unwrap();

        let found = repo.get_by_code("DUP").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
        assert_eq!(found.name, "Original");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_save_replaces_existing_row(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Items::new(&mut conn);

        let created = repo.create(&create_request("Mouse", "MOU01")).await.unwrap();

        let saved = repo
            .save(&ItemSaveDBRequest {
                id: created.id,
                name: "Mouse sem fio".to_string(),
                code: "MOU02".to_string(),
                description: None,
                price: Some(79.0),
                quantity: None,
            })
            .await
            .unwrap();

        assert_eq!(saved.id, created.id);
        assert_eq!(saved.name, "Mouse sem fio");
        assert_eq!(saved.code, "MOU02");
        // Full replace: fields absent from the request are cleared, not kept
        assert_eq!(saved.description, None);
        assert_eq!(saved.quantity, None);

        assert_eq!(repo.get_by_id(created.id).await.unwrap(), Some(saved));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_save_unknown_id_inserts_with_that_id(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Items::new(&mut conn);

        let saved = repo
            .save(&ItemSaveDBRequest {
                id: 42,
                name: "Monitor".to_string(),
                code: "MON42".to_string(),
                description: None,
                price: None,
                quantity: Some(1),
            })
            .await
            .unwrap();
        assert_eq!(saved.id, 42);
        assert!(repo.get_by_id(42).await.unwrap().is_some());

        // Later creates continue after the highest id in use
        let created = repo.create(&create_request("Cabo", "CAB01")).await.unwrap();
        assert!(created.id > 42);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_delete_existing_item(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Items::new(&mut conn);

        let created = repo.create(&create_request("Mouse", "MOU01")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());

        // Identifiers of deleted rows are never handed out again
        let next = repo.create(&create_request("Mouse", "MOU01")).await.unwrap();
        assert!(next.id > created.id);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_delete_nonexistent_item(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Items::new(&mut conn);

        assert!(!repo.delete(9999).await.unwrap());
    }
}
