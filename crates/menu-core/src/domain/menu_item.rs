// ============================================================================
// Menu Core - Menu Item Entity
// File: crates/menu-core/src/domain/menu_item.rs
// Description: One node of a menu tree and its link target
// ============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::MenuError;
use crate::repositories::RouteResolver;

/// Where a menu item links to: a literal path, or a route name that the
/// route resolver turns into a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum UrlTarget {
    Literal(String),
    Named(String),
}

impl UrlTarget {
    /// Maps the two nullable storage columns onto a target. A non-empty
    /// `named_url` takes precedence over `url`.
    pub fn from_columns(
        item_id: Uuid,
        url: Option<String>,
        named_url: Option<String>,
    ) -> Result<Self, MenuError> {
        let non_empty = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        match (non_empty(url), non_empty(named_url)) {
            (_, Some(name)) => Ok(UrlTarget::Named(name)),
            (Some(path), None) => Ok(UrlTarget::Literal(path)),
            (None, None) => Err(MenuError::InvalidItem {
                item_id,
                reason: "neither url nor named_url is set".to_string(),
            }),
        }
    }

    /// Effective URL of the target.
    pub fn resolve<R: RouteResolver + ?Sized>(&self, routes: &R) -> Result<String, MenuError> {
        match self {
            UrlTarget::Literal(path) => Ok(path.clone()),
            UrlTarget::Named(name) => routes.resolve(name),
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            UrlTarget::Literal(path) => Some(path),
            UrlTarget::Named(_) => None,
        }
    }

    pub fn named_url(&self) -> Option<&str> {
        match self {
            UrlTarget::Literal(_) => None,
            UrlTarget::Named(name) => Some(name),
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            UrlTarget::Literal(value) | UrlTarget::Named(value) => value.trim().is_empty(),
        }
    }
}

/// Menu item entity. Items are read-only configuration: the tree built
/// from them for a render lives in [`crate::services::MenuTree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MenuItem {
    pub id: Uuid,
    pub menu_id: Uuid,
    pub parent_id: Option<Uuid>,

    #[validate(length(min = 1, max = 100, message = "Menu item title must be between 1 and 100 characters"))]
    pub title: String,

    /// Sibling order, ascending.
    pub order: i32,
    pub target: UrlTarget,
}

impl MenuItem {
    pub fn new(
        menu_id: Uuid,
        parent_id: Option<Uuid>,
        title: String,
        target: UrlTarget,
        order: i32,
    ) -> Result<Self, MenuError> {
        let item = Self {
            id: Uuid::new_v4(),
            menu_id,
            parent_id,
            title: title.trim().to_string(),
            order,
            target,
        };

        item.validate()?;
        if item.target.is_blank() {
            return Err(MenuError::InvalidItem {
                item_id: item.id,
                reason: "link target is empty".to_string(),
            });
        }
        if item.parent_id == Some(item.id) {
            return Err(MenuError::InvalidItem {
                item_id: item.id,
                reason: "item cannot be its own parent".to_string(),
            });
        }
        Ok(item)
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
