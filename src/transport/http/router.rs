use crate::domain::item::{DeletedItem, GroceryItem};
use crate::transport::http::handlers::{health, items};
use crate::transport::http::types::{CreateItemRequest, ErrorResponse, UpdateItemRequest};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        items::list_items_handler,
        items::get_item_handler,
        items::create_item_handler,
        items::update_item_handler,
        items::delete_item_handler
    ),
    components(schemas(
        GroceryItem,
        DeletedItem,
        CreateItemRequest,
        UpdateItemRequest,
        ErrorResponse,
        health::HealthResponse
    ))
)]
pub struct ApiDoc;

/// API routes only. Static assets, CORS, tracing and Swagger UI are layered on by the binary.
pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/api/items",
            get(items::list_items_handler).post(items::create_item_handler),
        )
        .route(
            "/api/items/:id",
            get(items::get_item_handler)
                .put(items::update_item_handler)
                .delete(items::delete_item_handler),
        )
        .with_state(app_state)
}
