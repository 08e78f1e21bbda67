use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, JsonBody,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemUpdated, MessageResponse, UpdateItem};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(
        schemas(Item, CreateItem, UpdateItem, ItemUpdated, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Items", description = "Item management endpoints (in-memory)")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", get(get_item).put(update_item).delete(delete_item))
        .with_state(shared_service)
}

/// Get all items
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    responses(
        (status = 200, description = "A list of items", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created successfully", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    JsonBody(input): JsonBody<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get a single item
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = u64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "A single item", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(id.ok_or(ItemError::NotFound)?).await?;
    Ok(Json(item))
}

/// Update an item
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = u64, Path, description = "Item ID")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated successfully", body = ItemUpdated),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<UpdateItem>,
) -> ItemResult<Json<ItemUpdated>> {
    let updated = service
        .update_item(id.ok_or(ItemError::NotFound)?, input)
        .await?;
    Ok(Json(updated))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = u64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted successfully", body = MessageResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<Json<MessageResponse>> {
    let deleted = service.delete_item(id.ok_or(ItemError::NotFound)?).await?;
    Ok(Json(deleted))
}
