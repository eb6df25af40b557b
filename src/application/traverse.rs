//! Traversal use case: level-order text in, in-order report out

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{
    inorder_recursive, inorder_traversal, inorder_traversal_bounded, parse_level_order, TreeArena,
    TreeNode,
};

/// Deepest tree checked against the recursive traversal; deeper trees are
/// checked against the arena traversal, which keeps its own index stack.
pub const MAX_RECURSIVE_VERIFY_DEPTH: usize = 4_096;

/// Reference values for verification, never recursing past the depth limit.
fn reference_values(root: Option<&TreeNode>, height: usize) -> Vec<i32> {
    if height <= MAX_RECURSIVE_VERIFY_DEPTH {
        inorder_recursive(root)
    } else {
        debug!(height, "too deep for recursive reference, using arena traversal");
        TreeArena::from_tree(root).inorder()
    }
}

/// Outcome of traversing one tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalReport {
    /// Node values in in-order sequence
    pub values: Vec<i32>,
    pub node_count: usize,
    /// 0 for the empty tree
    pub height: usize,
}

/// Runs traversals according to the effective [`Settings`].
#[derive(Debug, Clone)]
pub struct TraversalService {
    settings: Settings,
}

impl TraversalService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Parse level-order input and build the tree.
    #[instrument(level = "debug", skip(self))]
    pub fn parse(&self, input: &str) -> ApplicationResult<Option<Box<TreeNode>>> {
        let slots = parse_level_order(input)?;
        Ok(TreeNode::from_level_order(&slots)?)
    }

    /// Read level-order input from a file.
    pub fn read_file(&self, path: &Path) -> ApplicationResult<String> {
        fs::read_to_string(path).with_path_context("read tree", path)
    }

    /// Traverse an already built tree.
    ///
    /// Uses the fixed-capacity engine when a capacity is configured, the
    /// growable one otherwise.
    #[instrument(level = "debug", skip(self, root))]
    pub fn traverse(&self, root: Option<&TreeNode>) -> ApplicationResult<TraversalReport> {
        let values = match self.settings.capacity {
            Some(capacity) => inorder_traversal_bounded(root, capacity)?,
            None => inorder_traversal(root),
        };

        let height = root.map_or(0, TreeNode::height);

        if self.settings.verify {
            let expected = reference_values(root, height);
            if expected != values {
                warn!(height, "iterative traversal disagrees with reference traversal");
                return Err(ApplicationError::VerificationFailed {
                    expected,
                    actual: values,
                });
            }
            debug!("verified against reference traversal");
        }

        let report = TraversalReport {
            node_count: root.map_or(0, TreeNode::node_count),
            height,
            values,
        };
        info!(
            nodes = report.node_count,
            height = report.height,
            "traversal complete"
        );
        Ok(report)
    }

    /// Parse and traverse in one step.
    pub fn run(&self, input: &str) -> ApplicationResult<TraversalReport> {
        let root = self.parse(input)?;
        self.traverse(root.as_deref())
    }
}
