//! # Menu Core
//! 
//! Domain entities, repository ports, and the menu tree algorithms:
//! building the parent/child tree, resolving the active item, and
//! computing the expanded set for one render.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::MenuError;
pub use services::{DrawnMenu, MenuNode, MenuService, MenuTree, RouteTable};
