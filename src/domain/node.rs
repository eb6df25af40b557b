//! Owned binary tree and level-order construction

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};

/// Which child slot of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A node of a binary tree which owns its children.
///
/// Absent children are `None`; ownership through `Box` keeps the tree
/// finite and acyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub value: i32,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, left: TreeNode) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    pub fn with_right(mut self, right: TreeNode) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    pub fn child(&self, side: Side) -> Option<&TreeNode> {
        match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of nodes in the subtree rooted here.
    #[instrument(level = "trace", skip(self))]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }

        count
    }

    /// Height of the subtree rooted here, a single node has height 1.
    #[instrument(level = "trace", skip(self))]
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 1)]; // (node, depth)

        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }

        max_depth
    }

    /// Builds a tree from level-order slots (`None` = absent child).
    ///
    /// The first slot is the root. Every present node, taken in queue order,
    /// consumes the next two slots as its left and right child. Trailing
    /// absent slots may be omitted. An empty slice or a leading `None`
    /// yields the empty tree.
    ///
    /// # Examples
    /// ```
    /// use inorder::domain::TreeNode;
    ///
    /// let root = TreeNode::from_level_order(&[Some(1), None, Some(2), Some(3)])
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(root.value, 1);
    /// assert!(root.left.is_none());
    /// assert_eq!(root.right.as_ref().unwrap().left.as_ref().unwrap().value, 3);
    /// ```
    #[instrument(level = "debug")]
    pub fn from_level_order(slots: &[Option<i32>]) -> DomainResult<Option<Box<TreeNode>>> {
        let mut slots = slots.iter().copied();
        let mut root = match slots.next().flatten() {
            Some(value) => Box::new(TreeNode::new(value)),
            None => {
                let rest = slots.filter(Option::is_some).count();
                if rest > 0 {
                    return Err(DomainError::DanglingValues { count: rest });
                }
                return Ok(None);
            }
        };

        {
            let mut queue: VecDeque<&mut TreeNode> = VecDeque::new();
            queue.push_back(&mut root);

            while let Some(node) = queue.pop_front() {
                let Some(left_slot) = slots.next() else { break };
                node.left = left_slot.map(|value| Box::new(TreeNode::new(value)));
                let right_slot = slots.next().flatten();
                node.right = right_slot.map(|value| Box::new(TreeNode::new(value)));

                let TreeNode { left, right, .. } = node;
                queue.extend(left.as_deref_mut());
                queue.extend(right.as_deref_mut());
            }
        }

        let dangling = slots.filter(Option::is_some).count();
        if dangling > 0 {
            return Err(DomainError::DanglingValues { count: dangling });
        }

        debug!(nodes = root.node_count(), "built tree from level order");
        Ok(Some(root))
    }

    /// Level-order slots of this tree, trailing absent slots trimmed.
    pub fn to_level_order(&self) -> Vec<Option<i32>> {
        let mut slots = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(Some(self));

        while let Some(slot) = queue.pop_front() {
            match slot {
                Some(node) => {
                    slots.push(Some(node.value));
                    queue.push_back(node.left.as_deref());
                    queue.push_back(node.right.as_deref());
                }
                None => slots.push(None),
            }
        }

        while let Some(None) = slots.last() {
            slots.pop();
        }
        slots
    }
}

// Boxed children would otherwise drop recursively, one frame per level.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Parses level-order notation such as `[1,null,2,3]`.
#[instrument(level = "debug")]
pub fn parse_level_order(input: &str) -> DomainResult<Vec<Option<i32>>> {
    serde_json::from_str(input.trim()).map_err(|e| DomainError::InvalidLevelOrder {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    //    1
    //     \
    //      2
    //     /
    //    3
    #[test]
    fn test_from_level_order_with_null_slot() {
        let root = TreeNode::from_level_order(&[Some(1), None, Some(2), Some(3)])
            .unwrap()
            .unwrap();
        let expected = TreeNode::new(1).with_right(TreeNode::new(2).with_left(TreeNode::new(3)));
        assert_eq!(*root, expected);
    }

    #[test]
    fn test_from_level_order_empty() {
        assert_eq!(TreeNode::from_level_order(&[]).unwrap(), None);
        assert_eq!(TreeNode::from_level_order(&[None]).unwrap(), None);
    }

    #[test]
    fn test_from_level_order_dangling_values() {
        let result = TreeNode::from_level_order(&[None, Some(1)]);
        assert_eq!(result, Err(DomainError::DanglingValues { count: 1 }));

        // both slots of 1 are absent, nothing is left to adopt 4
        let result = TreeNode::from_level_order(&[Some(1), None, None, Some(4)]);
        assert_eq!(result, Err(DomainError::DanglingValues { count: 1 }));
    }

    #[test]
    fn test_level_order_round_trip_trims_trailing_nulls() {
        let slots = vec![Some(5), Some(3), Some(8), None, Some(4)];
        let root = TreeNode::from_level_order(&slots).unwrap().unwrap();
        assert_eq!(root.to_level_order(), slots);
    }

    #[test]
    fn test_len_and_height() {
        let root = TreeNode::new(3).with_left(TreeNode::new(2).with_left(TreeNode::new(1)));
        assert_eq!(root.node_count(), 3);
        assert_eq!(root.height(), 3);
        assert!(!root.is_leaf());
        assert_eq!(TreeNode::new(9).height(), 1);
    }

    #[test]
    fn test_parse_level_order() {
        assert_eq!(
            parse_level_order(" [1, null, 2, 3] ").unwrap(),
            vec![Some(1), None, Some(2), Some(3)]
        );
        assert_eq!(parse_level_order("[]").unwrap(), vec![]);
        assert!(matches!(
            parse_level_order("[1, x]"),
            Err(DomainError::InvalidLevelOrder { .. })
        ));
    }
}
