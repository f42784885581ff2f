//! Expanded set: which items render their child list open.

use std::collections::HashSet;

use uuid::Uuid;

use crate::services::{ActivePath, MenuTree};

/// Ancestor chain of the active item (itself included) plus its direct
/// children. Grandchildren stay collapsed. Empty when nothing is active.
pub fn compute_expanded(tree: &MenuTree, active: &ActivePath) -> HashSet<Uuid> {
    let Some(active_id) = active.active_id else {
        return HashSet::new();
    };

    active
        .ancestors
        .iter()
        .copied()
        .chain(tree.children(&active_id).map(|child| child.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::active_path::{resolve_active, resolve_hrefs};
    use crate::services::test_support::{literal, routes, MainMenu};

    fn expanded_for(tree: &MenuTree, request_path: &str) -> HashSet<Uuid> {
        let hrefs = resolve_hrefs(tree, &routes()).unwrap();
        let active = resolve_active(tree, &hrefs, request_path).unwrap();
        compute_expanded(tree, &active)
    }

    #[test]
    fn test_leaf_expands_its_ancestors() {
        let main = MainMenu::new();
        let tree = MenuTree::build(main.fetched());

        let expanded = expanded_for(&tree, "/foo/bar/");
        assert_eq!(expanded, HashSet::from([main.services.id, main.web.id]));
    }

    #[test]
    fn test_active_parent_expands_direct_children() {
        let main = MainMenu::new();
        let tree = MenuTree::build(main.fetched());

        let expanded = expanded_for(&tree, "/services/");
        assert_eq!(
            expanded,
            HashSet::from([main.services.id, main.web.id, main.mobile.id])
        );
    }

    #[test]
    fn test_nothing_active_expands_nothing() {
        let main = MainMenu::new();
        let tree = MenuTree::build(main.fetched());

        assert!(expanded_for(&tree, "/elsewhere/").is_empty());
        assert!(compute_expanded(&tree, &ActivePath::default()).is_empty());
    }

    #[test]
    fn test_first_level_only() {
        let menu_id = Uuid::new_v4();
        let root = literal(menu_id, None, "Root", "/r/", 0);
        let child = literal(menu_id, Some(&root), "Child", "/r/c/", 0);
        let grandchild = literal(menu_id, Some(&child), "Grandchild", "/r/c/g/", 0);
        let tree = MenuTree::build(vec![root.clone(), child.clone(), grandchild.clone()]);

        let expanded = expanded_for(&tree, "/r/");
        assert!(expanded.contains(&root.id));
        assert!(expanded.contains(&child.id));
        assert!(!expanded.contains(&grandchild.id));
    }

    #[test]
    fn test_deep_leaf_excludes_other_branches() {
        let menu_id = Uuid::new_v4();
        let root = literal(menu_id, None, "Root", "/r/", 0);
        let other_root = literal(menu_id, None, "Other", "/o/", 1);
        let parent = literal(menu_id, Some(&root), "Parent", "/r/p/", 0);
        let sibling_branch = literal(menu_id, Some(&root), "Sibling", "/r/s/", 1);
        let leaf = literal(menu_id, Some(&parent), "Leaf", "/r/p/l/", 0);
        let leaf_child = literal(menu_id, Some(&leaf), "LeafChild", "/r/p/l/c/", 0);
        let tree = MenuTree::build(vec![
            root.clone(),
            parent.clone(),
            leaf.clone(),
            leaf_child.clone(),
            sibling_branch.clone(),
            other_root.clone(),
        ]);

        let expanded = expanded_for(&tree, "/r/p/l/");
        assert_eq!(
            expanded,
            HashSet::from([root.id, parent.id, leaf.id, leaf_child.id])
        );
        assert!(!expanded.contains(&sibling_branch.id));
        assert!(!expanded.contains(&other_root.id));
    }
}
