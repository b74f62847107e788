use crate::types::CategoryId;

/// Database request for creating a new category
#[derive(Debug, Clone)]
pub struct CategoryCreateDBRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Database request for saving a full category record (upsert by `id`)
#[derive(Debug, Clone)]
pub struct CategorySaveDBRequest {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
}

/// Database response for a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDBResponse {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
}
