use axum::{Router, routing::get};

use crate::state::AppState;

pub mod admin;
pub mod assistant;
pub mod auth;
pub mod cart;
pub mod doc;
pub mod health;
pub mod params;
pub mod products;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/auth", auth::router())
        .nest("/cart", cart::router())
        .nest("/users", users::router())
        .nest("/assistant", assistant::router())
        .nest("/admin", admin::router())
}

/// Full application router: health, `/api`, and docs, bound to `state`.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .with_state(state)
}
