//! PostgreSQL repository implementations

pub mod menu_repo_impl;
pub mod menu_item_repo_impl;

pub use menu_repo_impl::PgMenuRepository;
pub use menu_item_repo_impl::PgMenuItemRepository;
