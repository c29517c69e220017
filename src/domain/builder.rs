//! Tree builder for turning flat parent-link records into a nested hierarchy.

use std::collections::{HashMap, HashSet};
use std::slice;

use tracing::{instrument, trace};

use crate::domain::entities::{HierarchyRecord, RecordSet};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::tree::Tree;

/// Constructs nested trees from a borrowed set of records.
///
/// The record set is read, never modified. Children of a parent are indexed
/// once, in input order, so every level of the build sees the same grouping a
/// linear `parent == root` filter would produce.
pub struct TreeBuilder<'a> {
    records: &'a [HierarchyRecord],
    root_records: Vec<&'a HierarchyRecord>,
    relationship_cache: HashMap<&'a str, Vec<&'a HierarchyRecord>>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(records: &'a [HierarchyRecord]) -> Self {
        let mut root_records = Vec::new();
        let mut relationship_cache: HashMap<&'a str, Vec<&'a HierarchyRecord>> = HashMap::new();
        for record in records {
            match record.parent.as_deref() {
                Some(parent) => relationship_cache.entry(parent).or_default().push(record),
                None => root_records.push(record),
            }
        }
        Self {
            records,
            root_records,
            relationship_cache,
        }
    }

    pub fn from_set(set: &'a RecordSet) -> Self {
        Self::new(set.records())
    }

    /// Build the tree of every record whose parent equals `root_parent`.
    ///
    /// `None` selects records carrying the root sentinel. Ordering at each
    /// level follows input order. Duplicate ids collapse into one entry: the
    /// first position is kept and the last subtree wins.
    ///
    /// # Errors
    /// [`DomainError::CycleDetected`] as soon as an id reappears on the path
    /// from `root_parent` down to the node being built.
    #[instrument(level = "debug", skip(self), fields(records = self.records.len()))]
    pub fn build(&self, root_parent: Option<&str>) -> DomainResult<Tree> {
        let mut on_path: HashSet<&str> = root_parent.into_iter().collect();
        let mut stack = vec![Level::new(None, self.children_of(root_parent))];

        while let Some(level) = stack.last_mut() {
            match level.pending.next() {
                Some(record) => {
                    let depth = stack.len();
                    if on_path.contains(record.id.as_str()) || depth > self.records.len() {
                        return Err(DomainError::CycleDetected {
                            id: record.id.clone(),
                            depth,
                        });
                    }
                    trace!(id = %record.id, depth, "building subtree");
                    on_path.insert(record.id.as_str());
                    let children = self.children_of(Some(record.id.as_str()));
                    stack.push(Level::new(Some(*record), children));
                }
                None => {
                    let Some(done) = stack.pop() else { break };
                    let Some(record) = done.record else {
                        return Ok(done.tree);
                    };
                    on_path.remove(record.id.as_str());
                    if let Some(parent) = stack.last_mut() {
                        parent.tree.insert(record.id.clone(), done.tree);
                    }
                }
            }
        }
        Ok(Tree::new())
    }

    fn children_of(&self, parent: Option<&str>) -> &[&'a HierarchyRecord] {
        match parent {
            None => &self.root_records,
            Some(id) => self
                .relationship_cache
                .get(id)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
        }
    }
}

/// One partially built level: the record it belongs to (`None` at the top),
/// the children not yet visited and the subtrees finished so far.
struct Level<'s, 'a> {
    record: Option<&'a HierarchyRecord>,
    pending: slice::Iter<'s, &'a HierarchyRecord>,
    tree: Tree,
}

impl<'s, 'a> Level<'s, 'a> {
    fn new(record: Option<&'a HierarchyRecord>, children: &'s [&'a HierarchyRecord]) -> Self {
        Self {
            record,
            pending: children.iter(),
            tree: Tree::new(),
        }
    }
}

/// Build the tree below `root_parent` from `records`.
pub fn build_tree(records: &[HierarchyRecord], root_parent: Option<&str>) -> DomainResult<Tree> {
    TreeBuilder::new(records).build(root_parent)
}
