//! Todo Server Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use todo_server::api::create_router;
use todo_server::config::ServerConfig;
use todo_server::repository::JsonFileStore;
use todo_server::service::TodoService;
use todo_server::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,todo_server=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env();
    tracing::info!("Persisting todos to {}", config.data_file.display());

    let store = Arc::new(JsonFileStore::new(config.data_file.clone()));
    let service = TodoService::load(store).await;
    let app = create_router(AppState {
        service: Arc::new(service),
    });

    let listener = TcpListener::bind(config.bind_address())
        .await
        .expect("failed to bind API address");
    tracing::info!("API running on http://{}", config.bind_address());

    axum::serve(listener, app).await.expect("server error");
}
