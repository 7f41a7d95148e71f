use crate::app::grocery_service::{GroceryService, ServiceError};
use crate::domain::item::{ItemPatch, NewItem};
use crate::transport::http::handlers::common::coerce_quantity;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tokio::sync::Mutex;
use utoipa::ToSchema;

/// Shared handler state. The service is the only owner of the item store; the mutex
/// makes every request observe and mutate it sequentially.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<Mutex<GroceryService>>,
}

impl AppState {
    pub fn new(service: GroceryService) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
        }
    }
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    /// Integer, or a string holding an integer (e.g. `"3"`).
    #[serde(default)]
    #[schema(value_type = Option<i64>)]
    pub quantity: Option<JsonValue>,
    /// Defaults to `Other`.
    #[serde(default)]
    pub category: Option<String>,
    /// Defaults to `false`.
    #[serde(default)]
    pub purchased: Option<bool>,
}

impl CreateItemRequest {
    pub fn into_new_item(self) -> Result<NewItem, ServiceError> {
        Ok(NewItem {
            name: self.name,
            quantity: self.quantity.as_ref().map(coerce_quantity).transpose()?,
            category: self.category,
            purchased: self.purchased,
        })
    }
}

/// Every field is optional; omitted fields keep their stored values.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<i64>)]
    pub quantity: Option<JsonValue>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub purchased: Option<bool>,
}

impl UpdateItemRequest {
    pub fn into_patch(self) -> Result<ItemPatch, ServiceError> {
        Ok(ItemPatch {
            name: self.name,
            quantity: self.quantity.as_ref().map(coerce_quantity).transpose()?,
            category: self.category,
            purchased: self.purchased,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse::new(format!(
            "Invalid JSON body: {} (expected: {})",
            err, expected
        ))),
    )
}
