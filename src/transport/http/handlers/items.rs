use crate::domain::item::GroceryItem;
use crate::transport::http::handlers::common::parse_item_id;
use crate::transport::http::types::{
    json_422, AppState, CreateItemRequest, UpdateItemRequest,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/items",
    responses(
        (status = 200, description = "All items in insertion order", body = [GroceryItem])
    )
)]
pub async fn list_items_handler(State(state): State<AppState>) -> Json<Vec<GroceryItem>> {
    let service = state.service.lock().await;
    Json(service.list())
}

#[utoipa::path(
    get,
    path = "/api/items/{id}",
    params(
        ("id" = u64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "The item", body = GroceryItem),
        (status = 404, description = "No item with this id", body = ErrorResponse)
    )
)]
pub async fn get_item_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_item_id(&id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    let service = state.service.lock().await;
    match service.get(id) {
        Ok(item) => Json(item).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = GroceryItem),
        (status = 400, description = "Name or quantity missing, or quantity not an integer", body = ErrorResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ErrorResponse)
    )
)]
pub async fn create_item_handler(
    State(state): State<AppState>,
    request: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(
                e,
                "{\"name\": string, \"quantity\": int, \"category\"?: string, \"purchased\"?: bool}",
            )
            .into_response();
        }
    };
    let new_item = match request.into_new_item() {
        Ok(n) => n,
        Err(e) => return e.into_response(),
    };

    let mut service = state.service.lock().await;
    match service.create(new_item) {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => {
            tracing::debug!(error = %e, "rejected create request");
            e.into_response()
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/items/{id}",
    params(
        ("id" = u64, Path, description = "Item id")
    ),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated", body = GroceryItem),
        (status = 400, description = "Quantity not an integer", body = ErrorResponse),
        (status = 404, description = "No item with this id", body = ErrorResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ErrorResponse)
    )
)]
pub async fn update_item_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Response {
    let id = match parse_item_id(&id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    // An unknown id is 404 whatever the body holds, so look it up before decoding.
    let mut service = state.service.lock().await;
    if let Err(e) = service.get(id) {
        return e.into_response();
    }

    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(
                e,
                "{\"name\"?: string, \"quantity\"?: int, \"category\"?: string, \"purchased\"?: bool}",
            )
            .into_response();
        }
    };
    let patch = match request.into_patch() {
        Ok(p) => p,
        Err(e) => return e.into_response(),
    };

    match service.update(id, patch) {
        Ok(item) => Json(item).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(
        ("id" = u64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item deleted", body = DeletedItem),
        (status = 404, description = "No item with this id", body = ErrorResponse)
    )
)]
pub async fn delete_item_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_item_id(&id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    let mut service = state.service.lock().await;
    match service.delete(id) {
        Ok(deleted) => Json(deleted).into_response(),
        Err(e) => e.into_response(),
    }
}
