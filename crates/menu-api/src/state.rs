use std::sync::Arc;

use menu_core::repositories::MenuRepository;
use menu_core::MenuService;

use crate::render::MenuRenderer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub menu_service: Arc<MenuService>,
    pub menu_repo: Arc<dyn MenuRepository>,
    pub renderer: Arc<MenuRenderer>,
    /// Menu drawn by `GET /menu`.
    pub default_menu: String,
}
