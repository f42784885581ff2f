// ============================================================================
// Menu API - Menu Handlers
// File: crates/menu-api/src/handlers/menus.rs
// ============================================================================
//! Menu listing, tree JSON, and HTML fragment handlers.
//!
//! The `path` query parameter carries the page being rendered. When it is
//! missing there is no request context and nothing is drawn.

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use menu_core::{DrawnMenu, Menu, MenuError, MenuNode};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DrawParams {
    pub path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MenuDto {
    pub id: Uuid,
    pub name: String,
    pub title: String,
}

impl From<&Menu> for MenuDto {
    fn from(menu: &Menu) -> Self {
        Self {
            id: menu.id,
            name: menu.name.clone(),
            title: menu.display_title().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MenuTreeResponse {
    pub menu: String,
    pub active_id: Option<Uuid>,
    pub expanded_ids: Vec<Uuid>,
    pub roots: Vec<MenuNode>,
}

impl MenuTreeResponse {
    fn new(menu: &str, drawn: &DrawnMenu) -> Self {
        let mut expanded_ids: Vec<Uuid> = drawn.expanded().iter().copied().collect();
        expanded_ids.sort();

        Self {
            menu: menu.to_string(),
            active_id: drawn.active_id(),
            expanded_ids,
            roots: drawn.to_nodes(),
        }
    }
}

/// List menus - GET /api/v1/menus
pub async fn list_menus(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<MenuDto>>>, ApiError> {
    let menus = state.menu_repo.list().await?;
    Ok(Json(ApiResponse::success(menus.iter().map(MenuDto::from).collect())))
}

/// Menu details - GET /api/v1/menus/{name}
pub async fn get_menu(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<MenuDto>>, ApiError> {
    let menu = state
        .menu_repo
        .find_by_name(&name)
        .await?
        .ok_or(MenuError::MenuNotFound(name))?;
    Ok(Json(ApiResponse::success(MenuDto::from(&menu))))
}

/// Menu tree as JSON - GET /api/v1/menus/{name}/tree?path=...
pub async fn menu_tree(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<DrawParams>,
) -> Result<Json<ApiResponse<Option<MenuTreeResponse>>>, ApiError> {
    let drawn = state
        .menu_service
        .draw_menu(&name, params.path.as_deref())
        .await?;

    let tree = drawn.as_ref().map(|d| MenuTreeResponse::new(&name, d));
    Ok(Json(ApiResponse::success(tree)))
}

/// Menu markup - GET /menus/{name}?path=...
pub async fn draw_menu(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<DrawParams>,
) -> Result<Html<String>, ApiError> {
    render_menu(&state, &name, params.path.as_deref()).await
}

/// Default menu markup - GET /menu?path=...
pub async fn draw_default_menu(
    State(state): State<AppState>,
    Query(params): Query<DrawParams>,
) -> Result<Html<String>, ApiError> {
    render_menu(&state, &state.default_menu, params.path.as_deref()).await
}

async fn render_menu(
    state: &AppState,
    name: &str,
    request_path: Option<&str>,
) -> Result<Html<String>, ApiError> {
    let drawn = state.menu_service.draw_menu(name, request_path).await?;
    let html = state.renderer.render(drawn.as_ref())?;
    Ok(Html(html))
}
