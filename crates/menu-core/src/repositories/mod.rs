//! Repository traits (ports)

pub mod menu_repository;
pub mod menu_item_repository;
pub mod route_resolver;

pub use menu_repository::MenuRepository;
pub use menu_item_repository::MenuItemRepository;
pub use route_resolver::RouteResolver;

#[cfg(test)]
pub use menu_item_repository::MockMenuItemRepository;
#[cfg(test)]
pub use route_resolver::MockRouteResolver;
