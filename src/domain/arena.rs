use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{Side, TreeNode};

/// Binary tree node stored in a [`TreeArena`].
#[derive(Debug)]
pub struct ArenaNode {
    pub value: i32,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    pub left: Option<Index>,
    pub right: Option<Index>,
}

impl ArenaNode {
    pub fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Arena-based binary tree.
///
/// Uses generational arena for memory-safe node handles and O(1) lookups.
/// Nodes can only be attached to a free child slot of an existing node, so the
/// structure stays an acyclic binary tree.
#[derive(Debug)]
pub struct TreeArena {
    arena: Arena<ArenaNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_root(&mut self, value: i32) -> DomainResult<Index> {
        if self.root.is_some() {
            return Err(DomainError::RootOccupied);
        }
        let idx = self.arena.insert(ArenaNode {
            value,
            parent: None,
            left: None,
            right: None,
        });
        self.root = Some(idx);
        Ok(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_child(&mut self, parent: Index, side: Side, value: i32) -> DomainResult<Index> {
        let slot = self
            .arena
            .get(parent)
            .ok_or(DomainError::UnknownNode)?
            .child(side);
        if slot.is_some() {
            return Err(DomainError::SlotOccupied { side });
        }

        let idx = self.arena.insert(ArenaNode {
            value,
            parent: Some(parent),
            left: None,
            right: None,
        });
        let parent_node = self.arena.get_mut(parent).ok_or(DomainError::UnknownNode)?;
        match side {
            Side::Left => parent_node.left = Some(idx),
            Side::Right => parent_node.right = Some(idx),
        }
        Ok(idx)
    }

    pub fn get_node(&self, idx: Index) -> Option<&ArenaNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree, 0 when empty. Iterative, like `TreeNode::height`.
    #[instrument(level = "trace", skip(self))]
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Index, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();

        while let Some((idx, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some(node) = self.get_node(idx) {
                for child in [node.left, node.right].into_iter().flatten() {
                    stack.push((child, depth + 1));
                }
            }
        }

        max_depth
    }

    /// Copies an owned tree into a new arena, preserving shape.
    #[instrument(level = "debug", skip(root))]
    pub fn from_tree(root: Option<&TreeNode>) -> Self {
        let mut tree = Self::new();
        let Some(root) = root else { return tree };

        let root_idx = tree.arena.insert(ArenaNode {
            value: root.value,
            parent: None,
            left: None,
            right: None,
        });
        tree.root = Some(root_idx);

        let mut stack = vec![(root, root_idx)];
        while let Some((node, idx)) = stack.pop() {
            for side in [Side::Left, Side::Right] {
                if let Some(child) = node.child(side) {
                    // parent exists and slot is empty: insert cannot fail
                    if let Ok(child_idx) = tree.insert_child(idx, side, child.value) {
                        stack.push((child, child_idx));
                    }
                }
            }
        }

        tree
    }

    /// Values in in-order sequence, using an explicit stack of indices.
    #[instrument(level = "debug", skip(self))]
    pub fn inorder(&self) -> Vec<i32> {
        self.iter_inorder().map(|(_, node)| node.value).collect()
    }

    pub fn iter_inorder(&self) -> ArenaInorderIter<'_> {
        ArenaInorderIter {
            arena: self,
            stack: Vec::new(),
            current: self.root,
        }
    }
}

pub struct ArenaInorderIter<'a> {
    arena: &'a TreeArena,
    stack: Vec<Index>,
    current: Option<Index>,
}

impl<'a> Iterator for ArenaInorderIter<'a> {
    type Item = (Index, &'a ArenaNode);

    #[instrument(level = "trace", skip(self))]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.current {
            self.stack.push(idx);
            self.current = self.arena.get_node(idx).and_then(|node| node.left);
        }

        let idx = self.stack.pop()?;
        let node = self.arena.get_node(idx)?;
        self.current = node.right;
        Some((idx, node))
    }
}
