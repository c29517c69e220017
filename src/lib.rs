//! Flat parent-link records to nested hierarchies, and currying for
//! fixed-arity functions.
//!
//! - [`domain::build_tree`] / [`domain::TreeBuilder`]: group `{id, parent}`
//!   records into an insertion-ordered [`domain::Tree`].
//! - [`domain::curry`]: wrap a fixed-arity function so arguments can arrive
//!   over several calls; every partial is an independent value.
//!
//! ```
//! use lineage::domain::{build_tree, HierarchyRecord, Tree};
//!
//! let records = vec![
//!     HierarchyRecord::root("a"),
//!     HierarchyRecord::child("b", "a"),
//!     HierarchyRecord::child("c", "a"),
//!     HierarchyRecord::child("d", "b"),
//! ];
//! let tree = build_tree(&records, None).unwrap();
//!
//! let expected = Tree::new().with(
//!     "a",
//!     Tree::new()
//!         .with("b", Tree::new().with("d", Tree::new()))
//!         .with("c", Tree::new()),
//! );
//! assert_eq!(tree, expected);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
