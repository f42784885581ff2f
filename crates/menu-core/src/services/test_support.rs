//! Fixtures shared by the service tests.

use uuid::Uuid;

use crate::domain::{MenuItem, UrlTarget};
use crate::services::RouteTable;

pub(crate) fn literal(menu_id: Uuid, parent: Option<&MenuItem>, title: &str, path: &str, order: i32) -> MenuItem {
    MenuItem::new(
        menu_id,
        parent.map(|p| p.id),
        title.to_string(),
        UrlTarget::Literal(path.to_string()),
        order,
    )
    .unwrap()
}

pub(crate) fn named(menu_id: Uuid, parent: Option<&MenuItem>, title: &str, route: &str, order: i32) -> MenuItem {
    MenuItem::new(
        menu_id,
        parent.map(|p| p.id),
        title.to_string(),
        UrlTarget::Named(route.to_string()),
        order,
    )
    .unwrap()
}

/// Default routes plus `foo-bar -> /foo/bar/`.
pub(crate) fn routes() -> RouteTable {
    let mut routes = RouteTable::with_defaults();
    routes.register("foo-bar", "/foo/bar/");
    routes
}

/// Menu "main":
/// Home (/), About (/about/), Services (/services/)
/// Services -> Web (route "foo-bar"), Mobile (/services/mobile/)
pub(crate) struct MainMenu {
    pub home: MenuItem,
    pub about: MenuItem,
    pub services: MenuItem,
    pub web: MenuItem,
    pub mobile: MenuItem,
}

impl MainMenu {
    pub(crate) fn new() -> Self {
        let menu_id = Uuid::new_v4();
        let home = literal(menu_id, None, "Home", "/", 0);
        let about = literal(menu_id, None, "About", "/about/", 1);
        let services = literal(menu_id, None, "Services", "/services/", 2);
        let web = named(menu_id, Some(&services), "Web", "foo-bar", 0);
        let mobile = literal(menu_id, Some(&services), "Mobile", "/services/mobile/", 1);
        Self { home, about, services, web, mobile }
    }

    /// Items as the repository returns them: by `order`, ties in insertion order.
    pub(crate) fn fetched(&self) -> Vec<MenuItem> {
        vec![
            self.home.clone(),
            self.web.clone(),
            self.about.clone(),
            self.mobile.clone(),
            self.services.clone(),
        ]
    }
}
