//! OpenAPI documentation for the catalog API.
//!
//! Served as JSON at `/swagger/doc.json` and rendered with Scalar at `/docs`.

use utoipa::OpenApi;

use crate::api;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        description = "CRUD API for catalog items and their categories. Errors are plain-text messages."
    ),
    paths(
        api::handlers::items::list_items,
        api::handlers::items::get_item,
        api::handlers::items::get_item_by_code,
        api::handlers::items::create_item,
        api::handlers::items::update_item,
        api::handlers::items::delete_item,
        api::handlers::categories::list_categories,
        api::handlers::categories::get_category,
        api::handlers::categories::create_category,
        api::handlers::categories::update_category,
        api::handlers::categories::delete_category,
        api::handlers::meta::banner,
        api::handlers::meta::healthz,
    ),
    components(
        schemas(
            api::models::items::ItemCreate,
            api::models::items::ItemUpdate,
            api::models::items::ItemResponse,
            api::models::categories::CategoryCreate,
            api::models::categories::CategoryUpdate,
            api::models::categories::CategoryResponse,
        )
    ),
    tags(
        (name = "items", description = "Catalog items"),
        (name = "categorias", description = "Item categories"),
        (name = "meta", description = "Service endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_operation() {
        let doc = ApiDoc::openapi();

        let item_get = doc.paths.paths.get("/items/get").unwrap();
        assert!(item_get.get.is_some());
        assert!(item_get.post.is_none());

        let category_update = doc.paths.paths.get("/categorias/update").unwrap();
        assert!(category_update.put.is_some());

        assert!(!doc.paths.paths.contains_key("/categorias/get-code"));
    }
}
