//! Database repository for item categories.

use crate::db::errors::Result;
use crate::db::handlers::repository::Repository;
use crate::db::models::categories::{CategoryCreateDBRequest, CategoryDBResponse, CategorySaveDBRequest};
use crate::types::CategoryId;
use sqlx::{FromRow, SqliteConnection};
use tracing::instrument;

// Database entity model
#[derive(Debug, Clone, FromRow)]
struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
}

impl From<Category> for CategoryDBResponse {
    fn from(src: Category) -> Self {
        Self {
            id: src.id,
            name: src.name,
            description: src.description,
        }
    }
}

pub struct Categories<'c> {
    db: &'c mut SqliteConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Categories<'c> {
    type CreateRequest = CategoryCreateDBRequest;
    type SaveRequest = CategorySaveDBRequest;
    type Response = CategoryDBResponse;
    type Id = CategoryId;

    #[instrument(skip(self, request), fields(name = %request.name), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name, description) VALUES (?, ?) RETURNING id, name, description",
        )
        .bind(request.name.as_str())
        .bind(request.description.as_deref())
        .fetch_one(&mut *self.db)
        .await?;

        Ok(category.into())
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let category = sqlx::query_as::<_, Category>("SELECT id, name, description FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(category.map(Into::into))
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let categories = sqlx::query_as::<_, Category>("SELECT id, name, description FROM categories ORDER BY id")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(categories.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, request), fields(category_id = request.id), err)]
    async fn save(&mut self, request: &Self::SaveRequest) -> Result<Self::Response> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (id, name, description)
            VALUES (?, ?, ?)
            ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                description = excluded.description
            RETURNING id, name, description
            "#,
        )
        .bind(request.id)
        .bind(request.name.as_str())
        .bind(request.description.as_deref())
        .fetch_one(&mut *self.db)
        .await?;

        Ok(category.into())
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl<'c> Categories<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    fn create_request(name: &str) -> CategoryCreateDBRequest {
        CategoryCreateDBRequest {
            name: name.to_string(),
            description: Some(format!("{name} e acessórios")),
        }
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_and_get(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Categories::new(&mut conn);

        let created = repo.create(&create_request("Periféricos")).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.name, "Periféricos");

        let found = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_list(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Categories::new(&mut conn);

        repo.create(&create_request("Periféricos")).await.unwrap();
        repo.create(&create_request("Monitores")).await.unwrap();

        let names: Vec<_> = repo.list().await.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Periféricos", "Monitores"]);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_save_upserts(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Categories::new(&mut conn);

        let created = repo.create(&create_request("Periféricos")).await.unwrap();

        let updated = repo
            .save(&CategorySaveDBRequest {
                id: created.id,
                name: "Acessórios".to_string(),
                description: None,
            })
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Acessórios");
        assert_eq!(updated.description, None);

        let inserted = repo
            .save(&CategorySaveDBRequest {
                id: 77,
                name: "Cabos".to_string(),
                description: None,
            })
            .await
            .unwrap();
        assert_eq!(inserted.id, 77);
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_delete(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Categories::new(&mut conn);

        let created = repo.create(&create_request("Periféricos")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }
}
