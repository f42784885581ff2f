//! Domain errors

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Menu not found: {0}")]
    MenuNotFound(String),

    #[error("Unknown route name: {0}")]
    UnresolvedRoute(String),

    #[error("Cycle in parent references reached from menu item {item_id}")]
    CyclicParent { item_id: Uuid },

    #[error("Invalid menu item {item_id}: {reason}")]
    InvalidItem { item_id: Uuid, reason: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl MenuError {
    /// Errors caused by bad menu data or route configuration rather than
    /// by the request or the infrastructure.
    pub fn is_configuration_defect(&self) -> bool {
        matches!(
            self,
            MenuError::UnresolvedRoute(_)
                | MenuError::CyclicParent { .. }
                | MenuError::InvalidItem { .. }
        )
    }
}

impl From<validator::ValidationErrors> for MenuError {
    fn from(errors: validator::ValidationErrors) -> Self {
        MenuError::ValidationError(errors.to_string())
    }
}
