//! Explicit-stack in-order traversal
//!
//! All traversals here borrow the tree immutably. The auxiliary stack and the
//! result are owned by the call and released on every return path.

use std::iter::FusedIterator;

use tracing::{debug, instrument, trace};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::TreeNode;

/// Returns the node values of the tree in in-order sequence.
///
/// A cursor walks down left children, pushing every node it passes onto an
/// auxiliary stack. When the cursor runs out, the top of the stack is popped,
/// its value emitted, and the cursor moves to that node's right child. The
/// loop ends once the cursor is absent and the stack is empty.
///
/// Each node is pushed and popped exactly once: O(n) work, O(h) stack.
///
/// # Examples
/// ```
/// use inorder::domain::{inorder_traversal, TreeNode};
///
/// let root = TreeNode::new(2)
///     .with_left(TreeNode::new(1))
///     .with_right(TreeNode::new(3));
/// assert_eq!(inorder_traversal(Some(&root)), vec![1, 2, 3]);
/// assert!(inorder_traversal(None).is_empty());
/// ```
#[instrument(level = "debug", skip(root))]
pub fn inorder_traversal(root: Option<&TreeNode>) -> Vec<i32> {
    let mut result = Vec::new();
    let mut stack: Vec<&TreeNode> = Vec::new();
    let mut current = root;

    while current.is_some() || !stack.is_empty() {
        while let Some(node) = current {
            stack.push(node);
            current = node.left.as_deref();
        }

        if let Some(node) = stack.pop() {
            result.push(node.value);
            current = node.right.as_deref();
        }
    }

    debug!(visited = result.len(), "inorder traversal complete");
    result
}

/// Upper bound on what the bounded traversal reserves before it starts.
const INITIAL_RESERVE: usize = 128;

/// In-order traversal into buffers of fixed `capacity`.
///
/// The result and the auxiliary stack never hold more than `capacity`
/// entries. Exceeding the bound returns `CapacityExceeded` before anything
/// is written past it; no partial result is returned. The capacity is a
/// limit, not an allocation: only `min(capacity, INITIAL_RESERVE)` slots are
/// reserved up front.
#[instrument(level = "debug", skip(root))]
pub fn inorder_traversal_bounded(
    root: Option<&TreeNode>,
    capacity: usize,
) -> DomainResult<Vec<i32>> {
    let mut result = Vec::new();
    result.try_reserve_exact(capacity.min(INITIAL_RESERVE))?;
    let mut stack: Vec<&TreeNode> = Vec::new();
    let mut current = root;

    while current.is_some() || !stack.is_empty() {
        while let Some(node) = current {
            if stack.len() == capacity {
                debug!(capacity, "auxiliary stack full");
                return Err(DomainError::CapacityExceeded { capacity });
            }
            stack.push(node);
            current = node.left.as_deref();
        }

        if let Some(node) = stack.pop() {
            if result.len() == capacity {
                debug!(capacity, "result buffer full");
                return Err(DomainError::CapacityExceeded { capacity });
            }
            result.push(node.value);
            current = node.right.as_deref();
        }
    }

    Ok(result)
}

/// Recursive in-order traversal, the textbook formulation.
///
/// Call depth grows with tree height. Kept as a reference to check the
/// iterative versions against.
pub fn inorder_recursive(root: Option<&TreeNode>) -> Vec<i32> {
    fn visit(node: Option<&TreeNode>, out: &mut Vec<i32>) {
        if let Some(node) = node {
            visit(node.left.as_deref(), out);
            out.push(node.value);
            visit(node.right.as_deref(), out);
        }
    }

    let mut out = Vec::new();
    visit(root, &mut out);
    out
}

/// Lazy in-order iterator over the nodes of a tree.
///
/// Runs the same cursor/stack loop as [`inorder_traversal`], stopping after
/// each visit.
#[derive(Debug, Clone)]
pub struct InorderIter<'a> {
    stack: Vec<&'a TreeNode>,
    current: Option<&'a TreeNode>,
}

impl<'a> InorderIter<'a> {
    pub fn new(root: Option<&'a TreeNode>) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a> Iterator for InorderIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }

        let node = self.stack.pop()?;
        trace!(value = node.value, "visit");
        self.current = node.right.as_deref();
        Some(node)
    }
}

impl FusedIterator for InorderIter<'_> {}

impl TreeNode {
    pub fn iter_inorder(&self) -> InorderIter<'_> {
        InorderIter::new(Some(self))
    }

    pub fn values_inorder(&self) -> Vec<i32> {
        inorder_traversal(Some(self))
    }
}
