//! HTTP server hosting the analysis form and JSON API

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::{self, AppState};
use crate::api::web;
use crate::scoring::ScoringPipeline;

/// API Server configuration
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
    max_upload_size: usize,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(pipeline: ScoringPipeline, addr: String, max_upload_size: usize) -> Self {
        let state = Arc::new(AppState { pipeline });

        Self {
            state,
            addr,
            max_upload_size,
        }
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        // JSON routes
        let api_routes = Router::new()
            .route("/analyze", post(handlers::analyze));

        // Web routes (HTML pages)
        let web_routes = Router::new()
            .route("/", get(web::index_page))
            .route("/analyze", post(web::analyze_submit));

        Router::new()
            .route("/health", get(handlers::health))
            .nest("/api", api_routes)
            .merge(web_routes)
            .layer(DefaultBodyLimit::max(self.max_upload_size))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Start the API server
    pub async fn run(&self) -> std::io::Result<()> {
        let router = self.router();

        info!("Starting web server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
