use crate::types::ItemId;

/// Database request for creating a new item. The identifier is assigned by the database.
#[derive(Debug, Clone)]
pub struct ItemCreateDBRequest {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

/// Database request for saving a full item record, keyed by its identifier.
///
/// Saving replaces every column of the row with `id`, inserting it when no such row exists.
#[derive(Debug, Clone)]
pub struct ItemSaveDBRequest {
    pub id: ItemId,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

/// Database response for an item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDBResponse {
    pub id: ItemId,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}
