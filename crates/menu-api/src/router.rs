use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{health, menus};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Menu API
        .route("/api/v1/menus", get(menus::list_menus))
        .route("/api/v1/menus/{name}", get(menus::get_menu))
        .route("/api/v1/menus/{name}/tree", get(menus::menu_tree))
        // Menu markup
        .route("/menu", get(menus::draw_default_menu))
        .route("/menus/{name}", get(menus::draw_menu))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
