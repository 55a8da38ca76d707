use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main router with all routes.
///
/// `/` answers uptime pingers, `/chat` is the command transport, and the
/// JSON API under `/api/v1` exposes one route per engine operation.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::keep_alive))
        .route("/health", get(handlers::health_check))
        .route("/chat", post(handlers::chat))
        .nest("/api/v1", api_routes())
        // Request-id runs outermost so the trace span can pick the id up.
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/genres", get(handlers::get_genres))
        .route("/recommendations", get(handlers::get_recommendations))
        .route("/popular", get(handlers::get_popular))
        .route("/random", get(handlers::get_random))
}
