//! API request/response models for categories.

use crate::api::extractors::BodyResource;
use crate::db::models::categories::{CategoryCreateDBRequest, CategoryDBResponse, CategorySaveDBRequest};
use crate::errors::{Error, Result};
use crate::types::{CategoryId, MAX_CLIENT_ID, Resource};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a new category. Any `id` in the body is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CategoryCreate {
    #[serde(rename = "nome")]
    #[schema(example = "Periféricos")]
    pub name: String,
    #[serde(rename = "descricao")]
    #[schema(example = "Mouses, teclados e afins")]
    pub description: Option<String>,
}

impl BodyResource for CategoryCreate {
    const RESOURCE: Resource = Resource::Category;
}

impl From<CategoryCreate> for CategoryCreateDBRequest {
    fn from(create: CategoryCreate) -> Self {
        Self {
            name: create.name,
            description: create.description,
        }
    }
}

/// Request body for replacing a category, keyed by the `id` it carries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CategoryUpdate {
    #[schema(example = 1)]
    pub id: Option<CategoryId>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
}

impl BodyResource for CategoryUpdate {
    const RESOURCE: Resource = Resource::Category;
}

impl TryFrom<CategoryUpdate> for CategorySaveDBRequest {
    type Error = Error;

    fn try_from(update: CategoryUpdate) -> Result<Self> {
        let id = update.id.filter(|id| *id > 0).ok_or_else(|| Error::Validation {
            message: Resource::Category.missing_id_message().to_string(),
        })?;
        if id > MAX_CLIENT_ID {
            return Err(Error::InvalidParameter {
                name: "id",
                value: id.to_string(),
            });
        }

        Ok(Self {
            id,
            name: update.name,
            description: update.description,
        })
    }
}

/// Category as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    #[schema(example = 1)]
    pub id: CategoryId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
}

impl From<CategoryDBResponse> for CategoryResponse {
    fn from(db: CategoryDBResponse) -> Self {
        Self {
            id: db.id,
            name: db.name,
            description: db.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_without_id_is_rejected() {
        let update: CategoryUpdate = serde_json::from_value(json!({ "nome": "Cabos" })).unwrap();
        let err = CategorySaveDBRequest::try_from(update).unwrap_err();
        assert_eq!(err.user_message(), "ID da categoria não fornecido");
    }

    #[test]
    fn test_update_id_above_client_range_is_invalid() {
        let update: CategoryUpdate = serde_json::from_value(json!({ "id": MAX_CLIENT_ID + 1 })).unwrap();
        let err = CategorySaveDBRequest::try_from(update).unwrap_err();
        assert_eq!(err.user_message(), "ID inválido");
    }

    #[test]
    fn test_empty_name_is_allowed() {
        let create: CategoryCreate = serde_json::from_value(json!({})).unwrap();
        let request = CategoryCreateDBRequest::from(create);
        assert_eq!(request.name, "");
    }
}
