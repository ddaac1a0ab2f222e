mod config;
mod db;
mod dictionary;
mod error;
mod game;
mod models;
mod routes;
mod scores;
mod utils;
mod websocket;

use std::{sync::Arc, time::Instant};

use anyhow::Result;
use axum::{routing::get, Router};
use config::Config;
use dashmap::DashMap;
use dictionary::WordPool;
use game::SessionSettings;
use scores::{FileScoreStore, ScoreStore};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Bookkeeping for an open WebSocket connection
#[derive(Debug, Clone)]
pub struct Connection {
    pub connected_at: Instant,
    /// Game currently played on this connection, if any
    pub session_id: Option<Uuid>,
}

impl Connection {
    pub fn new() -> Self {
        Self {
            connected_at: Instant::now(),
            session_id: None,
        }
    }
}

/// Application state shared across all handlers
pub struct AppState {
    pub words: WordPool,
    pub session_settings: SessionSettings,
    pub scores: Arc<dyn ScoreStore>,
    /// Open connections keyed by connection id
    pub connections: DashMap<Uuid, Connection>,
}

impl AppState {
    pub fn new(words: WordPool, session_settings: SessionSettings, scores: Arc<dyn ScoreStore>) -> Self {
        Self {
            words,
            session_settings,
            scores,
            connections: DashMap::new(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_search_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Word Search backend server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded (match policy: {})", config.game.match_policy);

    // Load word lists
    let words = match &config.game.word_list_path {
        Some(path) => WordPool::load_or_builtin(path).await,
        None => WordPool::builtin(),
    };

    let scores = create_score_store(&config).await?;

    // Create application state
    let state = Arc::new(AppState::new(words, config.game.session_settings(), scores));

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Serve frontend static files
    let frontend_service = ServeDir::new(&config.server.frontend_dir);

    // Build router
    let app = Router::new()
        // WebSocket endpoint
        .route("/ws", get(websocket::handle_websocket))
        // API routes
        .merge(routes::create_routes())
        .fallback_service(frontend_service)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("WebSocket endpoint: ws://{}/ws", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Game frontend: http://{}/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// PostgreSQL when `DATABASE_URL` is set, a JSON file otherwise.
async fn create_score_store(config: &Config) -> Result<Arc<dyn ScoreStore>> {
    let Some(url) = &config.database.url else {
        tracing::info!("Storing high scores in {}", config.scores.path.display());
        return Ok(Arc::new(FileScoreStore::new(
            &config.scores.path,
            config.scores.max_scores,
        )));
    };

    // Connect to database
    let pool = db::create_pool(url, config.database.max_connections).await?;
    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(Arc::new(db::PgScoreStore::new(pool, config.scores.max_scores)))
}
