use crate::api::extractors::{JsonBody, RecordId};
use crate::api::models::categories::{CategoryCreate, CategoryResponse, CategoryUpdate};
use crate::db::handlers::{Categories, Repository};
use crate::db::models::categories::{CategoryCreateDBRequest, CategorySaveDBRequest};
use crate::errors::{Error, Result};
use crate::types::{Operation, Resource};
use crate::AppState;
use axum::{extract::State, Json};

#[utoipa::path(
    get,
    path = "/categorias",
    tag = "categorias",
    summary = "List categories",
    responses(
        (status = 200, description = "Every stored category", body = Vec<CategoryResponse>),
        (status = 500, description = "Erro ao buscar categorias")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<CategoryResponse>>> {
    let mut conn = state
        .db
        .acquire()
        .await
        .map_err(|e| Error::persistence(Resource::Category, Operation::List, e))?;
    let mut repo = Categories::new(&mut conn);

    let categories = repo
        .list()
        .await
        .map_err(|e| Error::persistence(Resource::Category, Operation::List, e))?;

    Ok(Json(categories.into_iter().map(CategoryResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/categorias/get",
    tag = "categorias",
    summary = "Get category by ID",
    params(("id" = i64, Query, description = "Category ID")),
    responses(
        (status = 200, description = "The category", body = CategoryResponse),
        (status = 400, description = "ID não fornecido ou inválido"),
        (status = 404, description = "Categoria não encontrada"),
        (status = 500, description = "Erro ao buscar a categoria")
    )
)]
#[tracing::instrument(skip_all, fields(category_id = id))]
pub async fn get_category(State(state): State<AppState>, RecordId(id): RecordId) -> Result<Json<CategoryResponse>> {
    let mut conn = state
        .db
        .acquire()
        .await
        .map_err(|e| Error::persistence(Resource::Category, Operation::Get, e))?;
    let mut repo = Categories::new(&mut conn);

    match repo
        .get_by_id(id)
        .await
        .map_err(|e| Error::persistence(Resource::Category, Operation::Get, e))?
    {
        Some(category) => Ok(Json(category.into())),
        None => Err(Error::NotFound {
            resource: Resource::Category,
        }),
    }
}

#[utoipa::path(
    post,
    path = "/categorias/create",
    tag = "categorias",
    summary = "Create category",
    request_body = CategoryCreate,
    responses(
        (status = 200, description = "The stored category with its assigned ID", body = CategoryResponse),
        (status = 400, description = "Erro ao decodificar a categoria"),
        (status = 500, description = "Erro ao criar a categoria")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_category(
    State(state): State<AppState>,
    JsonBody(create): JsonBody<CategoryCreate>,
) -> Result<Json<CategoryResponse>> {
    let mut conn = state
        .db
        .acquire()
        .await
        .map_err(|e| Error::persistence(Resource::Category, Operation::Create, e))?;
    let mut repo = Categories::new(&mut conn);

    let category = repo
        .create(&CategoryCreateDBRequest::from(create))
        .await
        .map_err(|e| Error::persistence(Resource::Category, Operation::Create, e))?;

    tracing::info!(category_id = category.id, "Created category");
    Ok(Json(category.into()))
}

#[utoipa::path(
    put,
    path = "/categorias/update",
    tag = "categorias",
    summary = "Replace category",
    description = "Replaces the category with the given `id`, inserting it when no such category exists.",
    request_body = CategoryUpdate,
    responses(
        (status = 200, description = "The category as stored", body = CategoryResponse),
        (status = 400, description = "Corpo inválido ou ID da categoria não fornecido"),
        (status = 500, description = "Erro ao atualizar a categoria")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_category(
    State(state): State<AppState>,
    JsonBody(update): JsonBody<CategoryUpdate>,
) -> Result<Json<CategoryResponse>> {
    let request = CategorySaveDBRequest::try_from(update)?;

    let mut conn = state
        .db
        .acquire()
        .await
        .map_err(|e| Error::persistence(Resource::Category, Operation::Update, e))?;
    let mut repo = Categories::new(&mut conn);

    let category = repo
        .save(&request)
        .await
        .map_err(|e| Error::persistence(Resource::Category, Operation::Update, e))?;

    Ok(Json(category.into()))
}

#[utoipa::path(
    delete,
    path = "/categorias/delete",
    tag = "categorias",
    summary = "Delete category",
    params(("id" = i64, Query, description = "Category ID")),
    responses(
        (status = 200, description = "Categoria deletada com sucesso", body = String, content_type = "text/plain"),
        (status = 400, description = "ID não fornecido ou inválido"),
        (status = 500, description = "Erro ao deletar a categoria")
    )
)]
#[tracing::instrument(skip_all, fields(category_id = id))]
pub async fn delete_category(State(state): State<AppState>, RecordId(id): RecordId) -> Result<&'static str> {
    let mut conn = state
        .db
        .acquire()
        .await
        .map_err(|e| Error::persistence(Resource::Category, Operation::Delete, e))?;
    let mut repo = Categories::new(&mut conn);

    let removed = repo
        .delete(id)
        .await
        .map_err(|e| Error::persistence(Resource::Category, Operation::Delete, e))?;
    if !removed {
        tracing::debug!("Delete matched no category");
    }

    Ok(Resource::Category.deleted_message())
}

#[cfg(test)]
mod tests {
    use crate::api::models::categories::CategoryResponse;
    use crate::test_utils::{create_test_app, create_test_category};
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use sqlx::SqlitePool;

    #[sqlx::test]
    #[test_log::test]
    async fn test_category_crud(pool: SqlitePool) {
        let app = create_test_app(pool).await;

        let response = app
            .post("/categorias/create")
            .json(&json!({ "nome": "Periféricos", "descricao": "Mouses e teclados" }))
            .await;
        response.assert_status_ok();
        let created: CategoryResponse = response.json();
        assert!(created.id > 0);

        let fetched: CategoryResponse = app.get(&format!("/categorias/get?id={}", created.id)).await.json();
        assert_eq!(fetched, created);

        let updated: CategoryResponse = app
            .put("/categorias/update")
            .json(&json!({ "id": created.id, "nome": "Acessórios" }))
            .await
            .json();
        assert_eq!(updated.name, "Acessórios");
        assert_eq!(updated.description, None);

        let listed: Vec<CategoryResponse> = app.get("/categorias").await.json();
        assert_eq!(listed, vec![updated]);

        let response = app.delete(&format!("/categorias/delete?id={}", created.id)).await;
        response.assert_status_ok();
        response.assert_text("Categoria deletada com sucesso");

        let response = app.get(&format!("/categorias/get?id={}", created.id)).await;
        response.assert_status_not_found();
        response.assert_text("Categoria não encontrada");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_categories(pool: SqlitePool) {
        let monitors = create_test_category(&pool, "Monitores").await;
        let cables = create_test_category(&pool, "Cabos").await;
        let app = create_test_app(pool).await;

        let response = app.get("/categorias").await;
        response.assert_status_ok();
        response.assert_header("content-type", "application/json");
        let listed: Vec<CategoryResponse> = response.json();
        assert_eq!(listed, vec![CategoryResponse::from(monitors), CategoryResponse::from(cables)]);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_category_errors(pool: SqlitePool) {
        let app = create_test_app(pool).await;

        let response = app.post("/categorias/create").text("not json").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_text("Erro ao decodificar a categoria");

        let response = app.put("/categorias/update").json(&json!({ "nome": "Cabos" })).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_text("ID da categoria não fornecido");

        let response = app.get("/categorias/get?id=x").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_text("ID inválido");

        let response = app.delete("/categorias/delete").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_text("ID não fornecido");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_category_update_unknown_id_inserts(pool: SqlitePool) {
        let app = create_test_app(pool).await;

        let saved: CategoryResponse = app
            .put("/categorias/update")
            .json(&json!({ "id": 12, "nome": "Cabos" }))
            .await
            .json();
        assert_eq!(saved.id, 12);

        app.get("/categorias/get?id=12").await.assert_status_ok();
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_category_update_with_huge_id_is_rejected(pool: SqlitePool) {
        let app = create_test_app(pool).await;

        let response = app
            .put("/categorias/update")
            .json(&json!({ "id": i64::MAX, "nome": "Cabos" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_text("ID inválido");

        let created: CategoryResponse = app.post("/categorias/create").json(&json!({ "nome": "Cabos" })).await.json();
        assert_eq!(created.id, 1);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_category_wrong_verb(pool: SqlitePool) {
        let app = create_test_app(pool).await;

        for response in [
            app.delete("/categorias").await,
            app.put("/categorias/get?id=1").await,
            app.put("/categorias/create").await,
            app.get("/categorias/update").await,
            app.post("/categorias/delete?id=1").await,
        ] {
            response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
            response.assert_text("Método não permitido");
        }

        for uri in ["/categorias", "/categorias/get?id=x", "/categorias/get?id=1"] {
            app.method(Method::HEAD, uri)
                .await
                .assert_status(StatusCode::METHOD_NOT_ALLOWED);
        }
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_no_code_lookup_for_categories(pool: SqlitePool) {
        let app = create_test_app(pool).await;

        let response = app.get("/categorias/get-code?codigo=X").await;
        response.assert_status_not_found();
        response.assert_text("Rota não encontrada");
    }
}
