//! Domain layer: binary trees and their traversal
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod error;
pub mod node;
pub mod render;
pub mod traversal;

pub use arena::{ArenaNode, TreeArena};
pub use error::{DomainError, DomainResult};
pub use node::{parse_level_order, Side, TreeNode};
pub use render::TreeDisplay;
pub use traversal::{inorder_recursive, inorder_traversal, inorder_traversal_bounded, InorderIter};
