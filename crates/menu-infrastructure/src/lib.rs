//! # Menu Infrastructure
//! 
//! Database implementations (adapters) of the menu repository ports.

pub mod database;

pub use database::{create_pool, run_migrations, PgMenuItemRepository, PgMenuRepository};
