// ============================================================================
// Menu Core - Tree Builder
// File: crates/menu-core/src/services/tree_builder.rs
// Description: Flat ordered item list -> roots + children lookup
// ============================================================================
//! Builds the per-render menu tree.
//!
//! Items are stored once in fetch order; the children lookup and the id
//! index only hold positions into that list, so the fetched records are
//! never mutated and nothing outlives the render.

use std::collections::HashMap;

use tracing::warn;
use uuid::Uuid;

use crate::domain::MenuItem;

#[derive(Debug, Clone, Default)]
pub struct MenuTree {
    items: Vec<MenuItem>,
    index: HashMap<Uuid, usize>,
    /// Parent id (`None` for roots) -> child positions in sibling order.
    children: HashMap<Option<Uuid>, Vec<usize>>,
}

impl MenuTree {
    /// Single pass over `items`, which must already be filtered to one menu
    /// and ordered by `order`: each bucket inherits that order, so no
    /// sorting happens here.
    pub fn build(items: Vec<MenuItem>) -> Self {
        let mut index = HashMap::with_capacity(items.len());
        let mut children: HashMap<Option<Uuid>, Vec<usize>> = HashMap::new();

        for (position, item) in items.iter().enumerate() {
            index.insert(item.id, position);
            children.entry(item.parent_id).or_default().push(position);
        }

        let tree = Self { items, index, children };
        for orphan in tree.orphans() {
            warn!(
                "Menu item {} references parent {:?} outside the fetched menu",
                orphan.id, orphan.parent_id
            );
        }
        tree
    }

    /// Items in fetch order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&MenuItem> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.index.contains_key(id)
    }

    /// Items without a parent, in sibling order.
    pub fn roots(&self) -> impl Iterator<Item = &MenuItem> + '_ {
        self.children_of(None)
    }

    /// Children recorded under `parent`; empty when there are none.
    pub fn children_of(&self, parent: Option<Uuid>) -> impl Iterator<Item = &MenuItem> + '_ {
        self.children
            .get(&parent)
            .into_iter()
            .flatten()
            .map(move |&position| &self.items[position])
    }

    /// Direct children of the item `id`.
    pub fn children(&self, id: &Uuid) -> impl Iterator<Item = &MenuItem> + '_ {
        self.children_of(Some(*id))
    }

    pub fn has_children(&self, id: &Uuid) -> bool {
        self.children.contains_key(&Some(*id))
    }

    /// Parent of `item`, if it is part of this tree.
    pub fn parent_of(&self, item: &MenuItem) -> Option<&MenuItem> {
        item.parent_id.and_then(|parent_id| self.get(&parent_id))
    }

    /// Items whose parent is not part of the fetched set. They sit in a
    /// bucket no root can reach, so a renderer walking from the roots
    /// never shows them or their descendants.
    pub fn orphans(&self) -> impl Iterator<Item = &MenuItem> + '_ {
        self.items.iter().filter(move |item| {
            item.parent_id
                .is_some_and(|parent_id| !self.index.contains_key(&parent_id))
        })
    }

    /// The children lookup as item references, keyed by parent id.
    pub fn children_map(&self) -> HashMap<Option<Uuid>, Vec<&MenuItem>> {
        self.children
            .iter()
            .map(|(parent, positions)| {
                (*parent, positions.iter().map(|&p| &self.items[p]).collect())
            })
            .collect()
    }
}
