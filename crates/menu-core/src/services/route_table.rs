//! In-memory route table

use std::collections::HashMap;

use menu_shared::constants::DEFAULT_ROUTES;

use crate::error::MenuError;
use crate::repositories::RouteResolver;

/// [`RouteResolver`] backed by a fixed name -> path map.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding the site's built-in routes.
    pub fn with_defaults() -> Self {
        DEFAULT_ROUTES
            .iter()
            .map(|(name, path)| (name.to_string(), path.to_string()))
            .collect()
    }

    pub fn from_map(routes: HashMap<String, String>) -> Self {
        Self { routes }
    }

    /// Adds or replaces a route.
    pub fn register(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.routes.insert(name.into(), path.into());
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl FromIterator<(String, String)> for RouteTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}

impl RouteResolver for RouteTable {
    fn resolve(&self, route_name: &str) -> Result<String, MenuError> {
        self.routes
            .get(route_name)
            .cloned()
            .ok_or_else(|| MenuError::UnresolvedRoute(route_name.to_string()))
    }
}
