// ============================================================================
// Menu Core - Menu Entity
// File: crates/menu-core/src/domain/menu.rs
// Description: Named collection of menu items
// ============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::MenuError;

/// Menu entity. `name` is unique across all menus and selects which menu
/// a page draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Menu {
    pub id: Uuid,

    #[validate(length(min = 1, max = 50, message = "Menu name must be between 1 and 50 characters"))]
    pub name: String,

    #[validate(length(max = 100, message = "Menu title too long"))]
    pub title: Option<String>,
}

impl Menu {
    pub fn new(name: String, title: Option<String>) -> Result<Self, MenuError> {
        let menu = Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            title: title
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
        };

        menu.validate()?;
        Ok(menu)
    }

    /// Human-readable label, falling back to `name` when no title is set.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.name,
        }
    }
}
