use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::state::AppState;

pub mod brands;
pub mod categories;
pub mod measurement_units;
pub mod products;
pub mod users;
pub mod warehouses;

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Resource routes, mounted under `/api`.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/brands", get(brands::list).post(brands::create))
        .route("/brands/:id", get(brands::show).patch(brands::update).delete(brands::destroy))
        .route("/categories", get(categories::list).post(categories::create))
        .route(
            "/categories/:id",
            get(categories::show).patch(categories::update).delete(categories::destroy),
        )
        .route("/products", get(products::list).post(products::create))
        .route("/products/:id", get(products::show).patch(products::update).delete(products::destroy))
        .route("/warehouses", get(warehouses::list).post(warehouses::create))
        .route(
            "/warehouses/:id",
            get(warehouses::show).patch(warehouses::update).delete(warehouses::destroy),
        )
        .route("/users", get(users::list).post(users::create))
        .route("/users/:id", get(users::show).patch(users::update).delete(users::destroy))
        .route("/measurement-units", get(measurement_units::list))
        .route("/measurement-units/:id", get(measurement_units::show))
}

/// Build the full application router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
