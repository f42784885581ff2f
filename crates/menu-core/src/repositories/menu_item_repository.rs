//! Menu item repository trait (port)

use async_trait::async_trait;
use crate::domain::MenuItem;
use crate::error::MenuError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// Every item of the menu named `menu_name`, ordered by `order`
    /// ascending with ties kept in insertion order. Issued as a single
    /// query; an unknown menu yields an empty list, not an error.
    async fn fetch_items(&self, menu_name: &str) -> Result<Vec<MenuItem>, MenuError>;
}
