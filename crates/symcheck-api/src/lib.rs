//! symcheck-api library root.
//!
//! Exposes the router so integration tests can drive it in-process
//! without binding a socket.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/symptoms", get(routes::catalog::list_symptoms))
        .route("/conditions", get(routes::catalog::list_conditions))
        .route("/conditions/{name}", get(routes::catalog::get_condition))
        .route("/predict", post(routes::predict::predict))
        .layer(axum_mw::from_fn(middleware::logging::request_log))
        .layer(cors)
        .with_state(state)
}
