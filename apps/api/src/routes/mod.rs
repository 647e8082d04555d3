pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::generation::handlers;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such endpoint".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/marketing", post(handlers::handle_marketing))
        .route("/api/sales", post(handlers::handle_sales))
        .route("/api/leads/score", post(handlers::handle_lead_score))
        .fallback(not_found)
        .with_state(state)
}
