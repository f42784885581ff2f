//! Route resolver trait (port)

use crate::error::MenuError;

/// Turns a symbolic route name into a concrete path.
#[cfg_attr(test, mockall::automock)]
pub trait RouteResolver: Send + Sync {
    /// Fails with [`MenuError::UnresolvedRoute`] for unknown names.
    fn resolve(&self, route_name: &str) -> Result<String, MenuError>;
}
