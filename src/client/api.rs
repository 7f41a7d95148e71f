//! HTTP access to the grocery service.

use crate::domain::item::{DeletedItem, GroceryItem, ItemPatch, NewItem};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Any failure between issuing a call and decoding its result.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// The calls the client makes against the service.
#[async_trait]
pub trait GroceryApi: Send + Sync {
    async fn list(&self) -> Result<Vec<GroceryItem>, TransportError>;

    async fn get(&self, id: u64) -> Result<GroceryItem, TransportError>;

    async fn create(&self, item: &NewItem) -> Result<GroceryItem, TransportError>;

    async fn update(&self, id: u64, patch: &ItemPatch) -> Result<GroceryItem, TransportError>;

    async fn delete(&self, id: u64) -> Result<DeletedItem, TransportError>;
}

/// `GroceryApi` over `reqwest`, rooted at the server's base URL.
#[derive(Debug, Clone)]
pub struct HttpGroceryApi {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpGroceryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn items_url(&self) -> String {
        format!("{}/api/items", self.base_url)
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/api/items/{}", self.base_url, id)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, TransportError> {
    let status = response.status();
    let body = response.bytes().await?;
    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned());
        return Err(TransportError::Status {
            status: status.as_u16(),
            message,
        });
    }
    serde_json::from_slice(&body).map_err(|e| TransportError::Decode(e.to_string()))
}

#[async_trait]
impl GroceryApi for HttpGroceryApi {
    async fn list(&self) -> Result<Vec<GroceryItem>, TransportError> {
        decode(self.client.get(self.items_url()).send().await?).await
    }

    async fn get(&self, id: u64) -> Result<GroceryItem, TransportError> {
        decode(self.client.get(self.item_url(id)).send().await?).await
    }

    async fn create(&self, item: &NewItem) -> Result<GroceryItem, TransportError> {
        let response = self.client.post(self.items_url()).json(item).send().await?;
        decode(response).await
    }

    async fn update(&self, id: u64, patch: &ItemPatch) -> Result<GroceryItem, TransportError> {
        let response = self.client.put(self.item_url(id)).json(patch).send().await?;
        decode(response).await
    }

    async fn delete(&self, id: u64) -> Result<DeletedItem, TransportError> {
        decode(self.client.delete(self.item_url(id)).send().await?).await
    }
}
