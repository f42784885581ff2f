//! Menu repository trait (port)

use async_trait::async_trait;
use crate::domain::Menu;
use crate::error::MenuError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<Menu>, MenuError>;
    async fn list(&self) -> Result<Vec<Menu>, MenuError>;
}
