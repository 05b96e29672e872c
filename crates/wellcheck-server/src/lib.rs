//! wellcheck-server
//!
//! HTTP front end for the wellness check-in: serves the questionnaire,
//! parses submitted answers, and renders results. Also exposes the domain
//! table and the scorer as a small JSON API.

pub mod config;
pub mod error;
pub mod form;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::questionnaire::show_questionnaire))
        .route("/submit", post(routes::submit::submit))
        .route("/health", get(routes::health::health_check))
        // JSON API
        .route("/api/domains", get(routes::domains::list_domains))
        .route("/api/domains/{id}", get(routes::domains::get_domain_detail))
        .route("/api/evaluate", post(routes::evaluate::evaluate_responses))
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::request_log::request_log))
                .layer(cors),
        )
        .with_state(state)
}
