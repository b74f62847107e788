//! Service-level endpoints that don't touch a resource: banner, health, OpenAPI document and the
//! fallbacks for unmatched verbs and paths.

use crate::errors::Error;
use crate::openapi::ApiDoc;
use axum::{
    http::Uri,
    response::Html,
    Json,
};
use utoipa::OpenApi;
use utoipa_scalar::Scalar;

pub const BANNER: &str = "Catalog API";

#[utoipa::path(
    get,
    path = "/api",
    tag = "meta",
    summary = "Service banner",
    responses((status = 200, description = "Plain-text banner", body = String, content_type = "text/plain"))
)]
pub async fn banner() -> &'static str {
    BANNER
}

#[utoipa::path(
    get,
    path = "/healthz",
    tag = "meta",
    summary = "Liveness probe",
    responses((status = 200, description = "Process is up", body = String, content_type = "text/plain"))
)]
pub async fn healthz() -> &'static str {
    "OK"
}

/// OpenAPI document as JSON
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Scalar API reference page rendered from [`ApiDoc`]
pub async fn docs() -> Html<String> {
    Html(Scalar::new(ApiDoc::openapi()).to_html())
}

/// Method fallback for bound paths.
///
/// Runs before any extractor, so no parameter or body validation happens on a wrong verb.
pub async fn method_not_allowed() -> Error {
    Error::MethodNotAllowed
}

/// Router fallback for unknown paths
pub async fn route_not_found(uri: Uri) -> Error {
    Error::RouteNotFound { path: uri.path().to_string() }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::create_test_app;
    use axum::http::{Method, StatusCode};
    use sqlx::SqlitePool;

    #[sqlx::test]
    #[test_log::test]
    async fn test_banner_and_health(pool: SqlitePool) {
        let app = create_test_app(pool).await;

        let response = app.get("/api").await;
        response.assert_status_ok();
        response.assert_text(super::BANNER);
        assert!(response.header("content-type").to_str().unwrap().starts_with("text/plain"));

        app.get("/healthz").await.assert_text("OK");

        let response = app.post("/api").await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        response.assert_text("Método não permitido");
        app.method(Method::HEAD, "/healthz").await.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_docs_page(pool: SqlitePool) {
        let app = create_test_app(pool).await;

        let response = app.get("/docs").await;
        response.assert_status_ok();
        assert!(response.header("content-type").to_str().unwrap().starts_with("text/html"));
        assert!(response.text().contains("api-reference"));

        let response = app.post("/docs").await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        response.assert_text("Método não permitido");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_openapi_document(pool: SqlitePool) {
        let app = create_test_app(pool).await;

        let response = app.get("/swagger/doc.json").await;
        response.assert_status_ok();
        let doc: serde_json::Value = response.json();

        assert!(doc["openapi"].as_str().unwrap().starts_with("3."));
        let paths = doc["paths"].as_object().unwrap();
        for path in [
            "/items",
            "/items/get",
            "/items/get-code",
            "/items/create",
            "/items/update",
            "/items/delete",
            "/categorias",
            "/categorias/get",
            "/categorias/create",
            "/categorias/update",
            "/categorias/delete",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
        assert!(doc["components"]["schemas"]["ItemResponse"].is_object());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_unknown_path(pool: SqlitePool) {
        let app = create_test_app(pool).await;

        let response = app.get("/nada").await;
        response.assert_status_not_found();
        response.assert_text("Rota não encontrada");

        // Paths are matched exactly
        app.get("/items/").await.assert_status_not_found();
    }
}
