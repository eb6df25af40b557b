//! Iterative in-order traversal of binary trees.
//!
//! The core is [`domain::inorder_traversal`], which walks a tree with an
//! explicit stack instead of recursion. Around it sit level-order tree
//! construction, an arena-backed tree, termtree rendering, layered settings
//! and a small CLI.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{inorder_traversal, TreeNode};
