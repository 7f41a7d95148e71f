//! Shared helpers for the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use grocery_list::client::{GroceryApi, Prompt, TransportError};
use grocery_list::{
    transport, DeletedItem, GroceryItem, GroceryService, ItemPatch, ItemStore, NewItem,
    ServiceError,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Serves the API router on an ephemeral port and returns its base URL.
pub async fn spawn_server(store: ItemStore) -> String {
    let app_state = transport::http::AppState::new(GroceryService::new(store));
    let router = transport::http::create_router(app_state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

/// Records alerts and answers confirmations from a script (default: no).
#[derive(Default)]
pub struct ScriptedPrompt {
    pub answers: VecDeque<bool>,
    pub questions: Vec<String>,
    pub alerts: Vec<String>,
}

impl ScriptedPrompt {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        self.questions.push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

/// `GroceryApi` served straight from a `GroceryService`, with a switch that makes
/// every call fail like a dropped connection.
pub struct InMemoryApi {
    service: Mutex<GroceryService>,
    offline: AtomicBool,
    calls: Mutex<Vec<String>>,
}

impl InMemoryApi {
    pub fn seeded() -> Self {
        Self {
            service: Mutex::new(GroceryService::new(ItemStore::seeded())),
            offline: AtomicBool::new(false),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn server_items(&self) -> Vec<GroceryItem> {
        self.service.lock().unwrap().list()
    }

    fn call<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut GroceryService) -> Result<T, ServiceError>,
    ) -> Result<T, TransportError> {
        self.calls.lock().unwrap().push(name.to_string());
        if self.offline.load(Ordering::SeqCst) {
            return Err(TransportError::Status {
                status: 503,
                message: "offline".to_string(),
            });
        }
        let mut service = self.service.lock().unwrap();
        f(&mut *service).map_err(|e| TransportError::Status {
            status: e.status_code().as_u16(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl GroceryApi for InMemoryApi {
    async fn list(&self) -> Result<Vec<GroceryItem>, TransportError> {
        self.call("list", |s| Ok(s.list()))
    }

    async fn get(&self, id: u64) -> Result<GroceryItem, TransportError> {
        self.call("get", |s| s.get(id))
    }

    async fn create(&self, item: &NewItem) -> Result<GroceryItem, TransportError> {
        self.call("create", |s| s.create(item.clone()))
    }

    async fn update(&self, id: u64, patch: &ItemPatch) -> Result<GroceryItem, TransportError> {
        self.call("update", |s| s.update(id, patch.clone()))
    }

    async fn delete(&self, id: u64) -> Result<DeletedItem, TransportError> {
        self.call("delete", |s| s.delete(id))
    }
}
