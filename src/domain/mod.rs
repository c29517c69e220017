//! Domain layer: hierarchy records, trees, and currying
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod curry;
pub mod entities;
pub mod error;
pub mod tree;

pub use builder::{build_tree, TreeBuilder};
pub use curry::{curry, Application, Curried, CurryTarget, Nary, Variadic};
pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use tree::{Tree, TreeNodeConvert};
