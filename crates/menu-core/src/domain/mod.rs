//! # Menu Core - Domain Module
//! 
//! Domain entities for the menu application.

pub mod menu;
pub mod menu_item;

// Re-export all entities and enums
pub use menu::Menu;
pub use menu_item::{MenuItem, UrlTarget};
