// ============================================================================
// Menu Core - Active Path Resolver
// File: crates/menu-core/src/services/active_path.rs
// Description: Current request path -> active item + ancestor chain
// ============================================================================

use tracing::{error, warn};
use uuid::Uuid;

use crate::domain::MenuItem;
use crate::error::MenuError;
use crate::repositories::RouteResolver;
use crate::services::MenuTree;

/// Active item of a render and its ancestor chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivePath {
    pub active_id: Option<Uuid>,
    /// Active item first, then each parent up to the root. Empty when
    /// nothing is active.
    pub ancestors: Vec<Uuid>,
}

/// Effective URL of every item, aligned with `tree.items()`. Any unknown
/// route name fails the whole render.
pub fn resolve_hrefs<R: RouteResolver + ?Sized>(
    tree: &MenuTree,
    routes: &R,
) -> Result<Vec<String>, MenuError> {
    tree.items()
        .iter()
        .map(|item| {
            item.target.resolve(routes).inspect_err(|e| {
                error!("Menu item {} ({}) has no usable link: {}", item.id, item.title, e);
            })
        })
        .collect()
}

/// First item, in fetch order, whose effective URL equals `request_path`
/// exactly. Items sharing a URL resolve to the earliest one.
pub fn find_active<'a>(
    tree: &'a MenuTree,
    hrefs: &[String],
    request_path: &str,
) -> Option<&'a MenuItem> {
    tree.items()
        .iter()
        .zip(hrefs)
        .find(|(_, href)| href.as_str() == request_path)
        .map(|(item, _)| item)
}

/// Ids from `active` up to its root, `active` included.
///
/// The walk is bounded by the number of items: a chain longer than that
/// must revisit an item, which is reported as [`MenuError::CyclicParent`].
/// A parent outside the fetched set ends the chain.
pub fn ancestor_chain(tree: &MenuTree, active: &MenuItem) -> Result<Vec<Uuid>, MenuError> {
    let mut chain = vec![active.id];
    let mut current = active;

    while let Some(parent_id) = current.parent_id {
        let Some(parent) = tree.get(&parent_id) else {
            warn!(
                "Ancestor walk from {} stopped at {}: parent {} not in menu",
                active.id, current.id, parent_id
            );
            break;
        };

        if chain.len() >= tree.len() {
            error!("Cycle in menu parent references reached from item {}", active.id);
            return Err(MenuError::CyclicParent { item_id: active.id });
        }

        chain.push(parent.id);
        current = parent;
    }

    Ok(chain)
}

/// Finds the active item for `request_path` and collects its ancestors.
pub fn resolve_active(
    tree: &MenuTree,
    hrefs: &[String],
    request_path: &str,
) -> Result<ActivePath, MenuError> {
    match find_active(tree, hrefs, request_path) {
        Some(active) => Ok(ActivePath {
            active_id: Some(active.id),
            ancestors: ancestor_chain(tree, active)?,
        }),
        None => Ok(ActivePath::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UrlTarget;
    use crate::repositories::MockRouteResolver;
    use crate::services::test_support::{literal, named, routes, MainMenu};

    fn resolved(main: &MainMenu) -> (MenuTree, Vec<String>) {
        let tree = MenuTree::build(main.fetched());
        let hrefs = resolve_hrefs(&tree, &routes()).unwrap();
        (tree, hrefs)
    }

    #[test]
    fn test_hrefs_follow_fetch_order() {
        let main = MainMenu::new();
        let (_, hrefs) = resolved(&main);

        assert_eq!(
            hrefs,
            vec!["/", "/foo/bar/", "/about/", "/services/mobile/", "/services/"]
        );
    }

    #[test]
    fn test_named_route_resolved_once_per_item() {
        let main = MainMenu::new();
        let tree = MenuTree::build(main.fetched());

        let mut resolver = MockRouteResolver::new();
        resolver
            .expect_resolve()
            .withf(|name: &str| name == "foo-bar")
            .times(1)
            .returning(|_| Ok("/foo/bar/".to_string()));

        let hrefs = resolve_hrefs(&tree, &resolver).unwrap();
        assert_eq!(hrefs[1], "/foo/bar/");
    }

    #[test]
    fn test_unknown_route_fails_render() {
        let menu_id = Uuid::new_v4();
        let broken = named(menu_id, None, "Broken", "does-not-exist", 0);
        let tree = MenuTree::build(vec![broken]);

        let result = resolve_hrefs(&tree, &routes());
        assert!(matches!(result, Err(MenuError::UnresolvedRoute(name)) if name == "does-not-exist"));
    }

    #[test]
    fn test_active_by_named_route() {
        let main = MainMenu::new();
        let (tree, hrefs) = resolved(&main);

        let path = resolve_active(&tree, &hrefs, "/foo/bar/").unwrap();
        assert_eq!(path.active_id, Some(main.web.id));
        assert_eq!(path.ancestors, vec![main.web.id, main.services.id]);
    }

    #[test]
    fn test_no_match_is_not_an_error() {
        let main = MainMenu::new();
        let (tree, hrefs) = resolved(&main);

        let path = resolve_active(&tree, &hrefs, "/nowhere/").unwrap();
        assert_eq!(path, ActivePath::default());
    }

    #[test]
    fn test_exact_match_only() {
        let main = MainMenu::new();
        let (tree, hrefs) = resolved(&main);

        // No prefix matching and no trailing-slash normalisation.
        assert!(find_active(&tree, &hrefs, "/services").is_none());
        assert!(find_active(&tree, &hrefs, "/services/mobile/extra/").is_none());
        assert_eq!(
            find_active(&tree, &hrefs, "/services/mobile/").map(|i| i.id),
            Some(main.mobile.id)
        );
    }

    #[test]
    fn test_duplicate_url_first_in_fetch_order_wins() {
        let menu_id = Uuid::new_v4();
        let first = literal(menu_id, None, "First", "/same/", 0);
        let second = literal(menu_id, None, "Second", "/same/", 1);
        let tree = MenuTree::build(vec![first.clone(), second]);
        let hrefs = resolve_hrefs(&tree, &routes()).unwrap();

        let active = find_active(&tree, &hrefs, "/same/").unwrap();
        assert_eq!(active.id, first.id);
    }

    #[test]
    fn test_three_level_chain() {
        let menu_id = Uuid::new_v4();
        let root = literal(menu_id, None, "Root", "/r/", 0);
        let middle = literal(menu_id, Some(&root), "Middle", "/r/m/", 0);
        let leaf = literal(menu_id, Some(&middle), "Leaf", "/r/m/l/", 0);
        let tree = MenuTree::build(vec![root.clone(), middle.clone(), leaf.clone()]);

        let chain = ancestor_chain(&tree, &leaf).unwrap();
        assert_eq!(chain, vec![leaf.id, middle.id, root.id]);
    }

    #[test]
    fn test_cycle_is_detected() {
        let menu_id = Uuid::new_v4();
        let mut a = literal(menu_id, None, "A", "/a/", 0);
        let mut b = literal(menu_id, None, "B", "/b/", 1);
        a.parent_id = Some(b.id);
        b.parent_id = Some(a.id);
        let tree = MenuTree::build(vec![a.clone(), b]);

        match ancestor_chain(&tree, &a) {
            Err(MenuError::CyclicParent { item_id }) => assert_eq!(item_id, a.id),
            other => panic!("expected CyclicParent, got {:?}", other),
        }
    }

    #[test]
    fn test_self_parent_is_a_cycle() {
        let menu_id = Uuid::new_v4();
        let mut looped = MenuItem::new(
            menu_id,
            None,
            "Loop".to_string(),
            UrlTarget::Literal("/loop/".to_string()),
            0,
        )
        .unwrap();
        looped.parent_id = Some(looped.id);
        let tree = MenuTree::build(vec![looped.clone()]);
        let hrefs = resolve_hrefs(&tree, &routes()).unwrap();

        let result = resolve_active(&tree, &hrefs, "/loop/");
        assert!(matches!(result, Err(MenuError::CyclicParent { .. })));
    }

    #[test]
    fn test_chain_stops_at_orphan() {
        let menu_id = Uuid::new_v4();
        let missing = literal(menu_id, None, "Missing", "/missing/", 0);
        let orphan = literal(menu_id, Some(&missing), "Orphan", "/orphan/", 0);
        let child = literal(menu_id, Some(&orphan), "Child", "/orphan/child/", 0);
        let tree = MenuTree::build(vec![orphan.clone(), child.clone()]);

        let chain = ancestor_chain(&tree, &child).unwrap();
        assert_eq!(chain, vec![child.id, orphan.id]);
    }
}
