//! API request/response models for catalog items.
//!
//! Wire names are Portuguese (`nome`, `codigo`, ...) for compatibility with existing clients.

use crate::api::extractors::BodyResource;
use crate::db::models::items::{ItemCreateDBRequest, ItemDBResponse, ItemSaveDBRequest};
use crate::errors::{Error, Result};
use crate::types::{ItemId, MAX_CLIENT_ID, Resource};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a new item. Any `id` in the body is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ItemCreate {
    /// Display name; must not be empty
    #[serde(rename = "nome")]
    #[schema(example = "Mouse")]
    pub name: String,
    /// Alternate lookup key
    #[serde(rename = "codigo")]
    #[schema(example = "MOU01")]
    pub code: String,
    #[serde(rename = "descricao")]
    #[schema(example = "Mouse óptico USB")]
    pub description: Option<String>,
    #[serde(rename = "preco")]
    #[schema(example = 49.9)]
    pub price: Option<f64>,
    #[serde(rename = "quantidade")]
    #[schema(example = 10)]
    pub quantity: Option<i64>,
}

impl ItemCreate {
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::Validation {
                message: "nome do item não pode ser vazio".to_string(),
            });
        }
        Ok(())
    }
}

impl BodyResource for ItemCreate {
    const RESOURCE: Resource = Resource::Item;
}

/// Request body for replacing an item. The record is keyed by the `id` it carries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ItemUpdate {
    /// Identifier of the item to replace; must be positive
    #[schema(example = 1)]
    pub id: Option<ItemId>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "preco")]
    pub price: Option<f64>,
    #[serde(rename = "quantidade")]
    pub quantity: Option<i64>,
}

impl BodyResource for ItemUpdate {
    const RESOURCE: Resource = Resource::Item;
}

impl TryFrom<ItemUpdate> for ItemSaveDBRequest {
    type Error = Error;

    fn try_from(update: ItemUpdate) -> Result<Self> {
        let id = update.id.filter(|id| *id > 0).ok_or_else(|| Error::Validation {
            message: Resource::Item.missing_id_message().to_string(),
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
            code: update.code,
            description: update.description,
            price: update.price,
            quantity: update.quantity,
        })
    }
}

impl From<ItemCreate> for ItemCreateDBRequest {
    fn from(create: ItemCreate) -> Self {
        Self {
            name: create.name,
            code: create.code,
            description: create.description,
            price: create.price,
            quantity: create.quantity,
        }
    }
}

/// Item as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    #[schema(example = 1)]
    pub id: ItemId,
    #[serde(rename = "nome")]
    #[schema(example = "Mouse")]
    pub name: String,
    #[serde(rename = "codigo")]
    #[schema(example = "MOU01")]
    pub code: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "preco")]
    pub price: Option<f64>,
    #[serde(rename = "quantidade")]
    pub quantity: Option<i64>,
}

impl From<ItemDBResponse> for ItemResponse {
    fn from(db: ItemDBResponse) -> Self {
        Self {
            id: db.id,
            name: db.name,
            code: db.code,
            description: db.description,
            price: db.price,
            quantity: db.quantity,
        }
    }
}
