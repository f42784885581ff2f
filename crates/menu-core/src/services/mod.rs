//! Domain services (business logic)

pub mod tree_builder;
pub mod active_path;
pub mod expansion;
pub mod route_table;
pub mod menu_service;

pub use tree_builder::MenuTree;
pub use active_path::{ancestor_chain, find_active, resolve_active, resolve_hrefs, ActivePath};
pub use expansion::compute_expanded;
pub use route_table::RouteTable;
pub use menu_service::{DrawnMenu, MenuNode, MenuService};

#[cfg(test)]
pub(crate) mod test_support;
