use axum::{routing::get, Router};
use std::env;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub mod actions;
pub mod models;
pub mod routes;
pub mod state;

use shared::repositories::game_repository::InMemoryGameSessionRepository;
use shared::repositories::websocket_repository::InMemoryWebSocketRepository;
use shared::services::game_session_service::GameSessionService;
use shared::services::websocket_service::WebSocketService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Set up services
    let game_session_repository = Arc::new(InMemoryGameSessionRepository::new());
    let game_session_service = Arc::new(GameSessionService::new(game_session_repository));

    let websocket_repository = Arc::new(InMemoryWebSocketRepository::new());
    let websocket_service = Arc::new(WebSocketService::new(websocket_repository));

    let app_state = state::AppState {
        game_session_service,
        websocket_service,
    };

    // Configure CORS
    // ToDo: Tighten this up
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Merge routes
    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/ws", get(routes::websocket::websocket_handler))
        .layer(cors)
        .with_state(app_state);

    let port = env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
