// src/bin/api_server.rs

use grocery_list::infra::{config, telemetry};
use grocery_list::transport;
use grocery_list::{GroceryService, ItemStore};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_tracing(config::DEFAULT_LOG_FILTER)?;

    let config = config::ServerConfig::from_env()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        static_dir = %config.static_dir.display(),
        seed = config.seed,
        "configuration loaded"
    );

    // --- Store + service (one instance for the whole process) ---
    let store = if config.seed {
        ItemStore::seeded()
    } else {
        ItemStore::new()
    };
    tracing::info!(items = store.len(), next_id = store.next_id(), "item store initialized");
    let app_state = transport::http::AppState::new(GroceryService::new(store));

    // --- API server ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("grocery list API listening on http://{}", listener.local_addr()?);
    tracing::info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("shutdown signal received"),
                Err(e) => {
                    tracing::error!(error = %e, "could not listen for Ctrl+C; running until killed");
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    tracing::info!("server stopped; in-memory items discarded");
    Ok(())
}
