use crate::api::extractors::{ItemCode, JsonBody, RecordId};
use crate::api::models::items::{ItemCreate, ItemResponse, ItemUpdate};
use crate::db::handlers::{Items, Repository};
use crate::db::models::items::{ItemCreateDBRequest, ItemSaveDBRequest};
use crate::errors::{Error, Result};
use crate::types::{Operation, Resource};
use crate::AppState;
use axum::{extract::State, Json};

#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    summary = "List items",
    responses(
        (status = 200, description = "Every stored item", body = Vec<ItemResponse>),
        (status = 405, description = "Método não permitido"),
        (status = 500, description = "Erro ao buscar itens")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<ItemResponse>>> {
    let mut conn = state
        .db
        .acquire()
        .await
        .map_err(|e| Error::persistence(Resource::Item, Operation::List, e))?;
    let mut repo = Items::new(&mut conn);

    let items = repo
        .list()
        .await
        .map_err(|e| Error::persistence(Resource::Item, Operation::List, e))?;

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/items/get",
    tag = "items",
    summary = "Get item by ID",
    params(("id" = i64, Query, description = "Item ID")),
    responses(
        (status = 200, description = "The item", body = ItemResponse),
        (status = 400, description = "ID não fornecido ou inválido"),
        (status = 404, description = "Item não encontrado"),
        (status = 500, description = "Erro ao buscar o item")
    )
)]
#[tracing::instrument(skip_all, fields(item_id = id))]
pub async fn get_item(State(state): State<AppState>, RecordId(id): RecordId) -> Result<Json<ItemResponse>> {
    let mut conn = state
        .db
        .acquire()
        .await
        .map_err(|e| Error::persistence(Resource::Item, Operation::Get, e))?;
    let mut repo = Items::new(&mut conn);

    match repo
        .get_by_id(id)
        .await
        .map_err(|e| Error::persistence(Resource::Item, Operation::Get, e))?
    {
        Some(item) => Ok(Json(item.into())),
        None => Err(Error::NotFound { resource: Resource::Item }),
    }
}

#[utoipa::path(
    get,
    path = "/items/get-code",
    tag = "items",
    summary = "Get item by code",
    description = "Exact, case-sensitive match on `codigo`. When several items share a code the one with the lowest ID is returned.",
    params(("codigo" = String, Query, description = "Item code")),
    responses(
        (status = 200, description = "The item", body = ItemResponse),
        (status = 400, description = "Código não fornecido"),
        (status = 404, description = "Item não encontrado"),
        (status = 500, description = "Erro ao buscar o item")
    )
)]
#[tracing::instrument(skip_all, fields(code = %code))]
pub async fn get_item_by_code(State(state): State<AppState>, ItemCode(code): ItemCode) -> Result<Json<ItemResponse>> {
    let mut conn = state
        .db
        .acquire()
        .await
        .map_err(|e| Error::persistence(Resource::Item, Operation::Get, e))?;
    let mut repo = Items::new(&mut conn);

    match repo
        .get_by_code(&code)
        .await
        .map_err(|e| Error::persistence(Resource::Item, Operation::Get, e))?
    {
        Some(item) => Ok(Json(item.into())),
        None => Err(Error::NotFound { resource: Resource::Item }),
    }
}

#[utoipa::path(
    post,
    path = "/items/create",
    tag = "items",
    summary = "Create item",
    request_body = ItemCreate,
    responses(
        (status = 200, description = "The stored item with its assigned ID", body = ItemResponse),
        (status = 400, description = "Corpo inválido ou nome vazio"),
        (status = 500, description = "Erro ao criar o item")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_item(State(state): State<AppState>, JsonBody(create): JsonBody<ItemCreate>) -> Result<Json<ItemResponse>> {
    create.validate()?;

    let mut conn = state
        .db
        .acquire()
        .await
        .map_err(|e| Error::persistence(Resource::Item, Operation::Create, e))?;
    let mut repo = Items::new(&mut conn);

    let item = repo
        .create(&ItemCreateDBRequest::from(create))
        .await
        .map_err(|e| Error::persistence(Resource::Item, Operation::Create, e))?;

    tracing::info!(item_id = item.id, "Created item");
    Ok(Json(item.into()))
}

#[utoipa::path(
    put,
    path = "/items/update",
    tag = "items",
    summary = "Replace item",
    description = "Replaces every field of the item with the given `id`. An `id` that matches no item inserts a new item with that ID.",
    request_body = ItemUpdate,
    responses(
        (status = 200, description = "The item as stored", body = ItemResponse),
        (status = 400, description = "Corpo inválido ou ID do item não fornecido"),
        (status = 500, description = "Erro ao atualizar o item")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_item(State(state): State<AppState>, JsonBody(update): JsonBody<ItemUpdate>) -> Result<Json<ItemResponse>> {
    let request = ItemSaveDBRequest::try_from(update)?;

    let mut conn = state
        .db
        .acquire()
        .await
        .map_err(|e| Error::persistence(Resource::Item, Operation::Update, e))?;
    let mut repo = Items::new(&mut conn);

    let item = repo
        .save(&request)
        .await
        .map_err(|e| Error::persistence(Resource::Item, Operation::Update, e))?;

    Ok(Json(item.into()))
}

#[utoipa::path(
    delete,
    path = "/items/delete",
    tag = "items",
    summary = "Delete item",
    params(("id" = i64, Query, description = "Item ID")),
    responses(
        (status = 200, description = "Item deletado com sucesso", body = String, content_type = "text/plain"),
        (status = 400, description = "ID não fornecido ou inválido"),
        (status = 500, description = "Erro ao deletar o item")
    )
)]
#[tracing::instrument(skip_all, fields(item_id = id))]
pub async fn delete_item(State(state): State<AppState>, RecordId(id): RecordId) -> Result<&'static str> {
    let mut conn = state
        .db
        .acquire()
        .await
        .map_err(|e| Error::persistence(Resource::Item, Operation::Delete, e))?;
    let mut repo = Items::new(&mut conn);

    let removed = repo
        .delete(id)
        .await
        .map_err(|e| Error::persistence(Resource::Item, Operation::Delete, e))?;
    if !removed {
        tracing::debug!("Delete matched no item");
    }

    Ok(Resource::Item.deleted_message())
}
