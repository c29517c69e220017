//! Nested hierarchy: id -> subtree, in insertion order

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use termtree::Tree as TermTree;

/// A level of a hierarchy: every id at this level mapped to its own children.
///
/// A leaf is an empty `Tree`. The structure owns its ids and holds no
/// reference back to the records it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tree {
    children: IndexMap<String, Tree>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `subtree` under `id`. An existing id keeps its position and
    /// takes the new subtree.
    pub fn insert(&mut self, id: impl Into<String>, subtree: Tree) -> Option<Tree> {
        self.children.insert(id.into(), subtree)
    }

    /// Builder-style insert, mostly useful for literals in tests and docs.
    pub fn with(mut self, id: impl Into<String>, subtree: Tree) -> Self {
        self.insert(id, subtree);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Tree> {
        self.children.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.children.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Tree> {
        self.children.iter()
    }

    /// Depth-first lookup of the subtree below `id`, at any level.
    pub fn find(&self, id: &str) -> Option<&Tree> {
        if let Some(subtree) = self.children.get(id) {
            return Some(subtree);
        }
        self.children.values().find_map(|child| child.find(id))
    }

    /// Total number of nodes across all levels.
    pub fn node_count(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.node_count())
            .sum()
    }

    /// Number of levels; an empty tree has depth 0.
    pub fn depth(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.depth())
            .max()
            .unwrap_or(0)
    }

    /// Ids whose subtree is empty, depth-first in insertion order.
    pub fn leaf_ids(&self) -> Vec<String> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves(&self, leaves: &mut Vec<String>) {
        for (id, child) in &self.children {
            if child.is_leaf() {
                leaves.push(id.clone());
            } else {
                child.collect_leaves(leaves);
            }
        }
    }

    /// Every path from a top-level id down to a leaf.
    pub fn branches(&self) -> Vec<Vec<String>> {
        let mut branches = Vec::new();
        let mut path = Vec::new();
        self.collect_branches(&mut path, &mut branches);
        branches
    }

    fn collect_branches(&self, path: &mut Vec<String>, branches: &mut Vec<Vec<String>>) {
        for (id, child) in &self.children {
            path.push(id.clone());
            if child.is_leaf() {
                branches.push(path.clone());
            } else {
                child.collect_branches(path, branches);
            }
            path.pop();
        }
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = (&'a String, &'a Tree);
    type IntoIter = indexmap::map::Iter<'a, String, Tree>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

/// Conversion into a printable `termtree` rendering.
pub trait TreeNodeConvert {
    fn to_tree_string(&self, label: &str) -> TermTree<String>;
}

impl TreeNodeConvert for Tree {
    fn to_tree_string(&self, label: &str) -> TermTree<String> {
        let leaves: Vec<_> = self
            .children
            .iter()
            .map(|(id, child)| child.to_tree_string(id))
            .collect();

        TermTree::new(label.to_string()).with_leaves(leaves)
    }
}
