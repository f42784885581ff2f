// ============================================================================
// Menu Core - Menu Service
// File: crates/menu-core/src/services/menu_service.rs
// ============================================================================
//! Draws one menu for one request: a single repository fetch, then tree
//! building, active path resolution and expansion, all local to the call.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::MenuItem;
use crate::error::MenuError;
use crate::repositories::{MenuItemRepository, RouteResolver};
use crate::services::{compute_expanded, resolve_active, resolve_hrefs, MenuTree};

/// Menu service for rendering navigation trees
pub struct MenuService {
    item_repo: Arc<dyn MenuItemRepository>,
    routes: Arc<dyn RouteResolver>,
}

impl MenuService {
    pub fn new(item_repo: Arc<dyn MenuItemRepository>, routes: Arc<dyn RouteResolver>) -> Self {
        Self { item_repo, routes }
    }

    /// Draw `menu_name` for the page at `request_path`.
    ///
    /// Without a request path there is nothing to mark active, so nothing
    /// is drawn and the repository is not queried. An unknown menu draws
    /// an empty tree. Fetch failures, unknown route names and parent cycles
    /// are returned as errors.
    pub async fn draw_menu(
        &self,
        menu_name: &str,
        request_path: Option<&str>,
    ) -> Result<Option<DrawnMenu>, MenuError> {
        let Some(request_path) = request_path else {
            debug!("No request path for menu '{}', drawing nothing", menu_name);
            return Ok(None);
        };

        let items = self.item_repo.fetch_items(menu_name).await?;
        if items.is_empty() {
            info!("Menu '{}' has no items", menu_name);
        }

        let drawn = DrawnMenu::compute(items, self.routes.as_ref(), request_path)?;
        debug!(
            "Drew menu '{}' for {}: {} items, active={:?}, expanded={}",
            menu_name,
            request_path,
            drawn.tree().len(),
            drawn.active_id(),
            drawn.expanded().len()
        );

        Ok(Some(drawn))
    }
}

/// Everything a renderer needs for one menu: the tree (roots and children
/// lookup), each item's effective URL, the active id and the expanded set.
#[derive(Debug, Clone)]
pub struct DrawnMenu {
    tree: MenuTree,
    hrefs: HashMap<Uuid, String>,
    active_id: Option<Uuid>,
    expanded: HashSet<Uuid>,
}

impl DrawnMenu {
    pub fn compute<R: RouteResolver + ?Sized>(
        items: Vec<MenuItem>,
        routes: &R,
        request_path: &str,
    ) -> Result<Self, MenuError> {
        let tree = MenuTree::build(items);
        let hrefs = resolve_hrefs(&tree, routes)?;
        let active = resolve_active(&tree, &hrefs, request_path)?;
        let expanded = compute_expanded(&tree, &active);

        let hrefs = tree
            .items()
            .iter()
            .map(|item| item.id)
            .zip(hrefs)
            .collect();

        Ok(Self {
            tree,
            hrefs,
            active_id: active.active_id,
            expanded,
        })
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn roots(&self) -> impl Iterator<Item = &MenuItem> + '_ {
        self.tree.roots()
    }

    /// Children of `id`, empty when none are recorded.
    pub fn children(&self, id: &Uuid) -> impl Iterator<Item = &MenuItem> + '_ {
        self.tree.children(id)
    }

    pub fn children_map(&self) -> HashMap<Option<Uuid>, Vec<&MenuItem>> {
        self.tree.children_map()
    }

    pub fn active_id(&self) -> Option<Uuid> {
        self.active_id
    }

    pub fn expanded(&self) -> &HashSet<Uuid> {
        &self.expanded
    }

    pub fn is_active(&self, id: &Uuid) -> bool {
        self.active_id.as_ref() == Some(id)
    }

    pub fn is_expanded(&self, id: &Uuid) -> bool {
        self.expanded.contains(id)
    }

    pub fn href(&self, id: &Uuid) -> Option<&str> {
        self.hrefs.get(id).map(String::as_str)
    }

    /// Nested view of the tree starting at the roots. Every child is
    /// included; `expanded` tells the renderer which lists to open.
    pub fn to_nodes(&self) -> Vec<MenuNode> {
        self.roots().map(|item| self.node(item)).collect()
    }

    fn node(&self, item: &MenuItem) -> MenuNode {
        MenuNode {
            id: item.id,
            title: item.title.clone(),
            href: self.href(&item.id).unwrap_or_default().to_string(),
            active: self.is_active(&item.id),
            expanded: self.is_expanded(&item.id),
            children: self.children(&item.id).map(|child| self.node(child)).collect(),
        }
    }
}

/// Serializable tree node handed to templates and JSON clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuNode {
    pub id: Uuid,
    pub title: String,
    pub href: String,
    pub active: bool,
    pub expanded: bool,
    pub children: Vec<MenuNode>,
}
