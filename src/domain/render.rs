/*
Rendering is a separate trait so both tree representations share one entry
point for termtree output. Left child first, then right; an absent child
beside a present sibling shows as EMPTY_CHILD so the sides stay readable.

termtree nests one Tree per level and drops recursively, so rendering is
refused above MAX_RENDER_DEPTH; the height check itself is iterative.
 */
use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::TreeArena;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::TreeNode;

pub const EMPTY_CHILD: &str = "∅";

/// Deepest tree that will be rendered.
pub const MAX_RENDER_DEPTH: usize = 512;

fn check_depth(height: usize) -> DomainResult<()> {
    if height > MAX_RENDER_DEPTH {
        return Err(DomainError::TooDeepToRender {
            height,
            limit: MAX_RENDER_DEPTH,
        });
    }
    Ok(())
}

pub trait TreeDisplay {
    fn to_tree_string(&self) -> DomainResult<Tree<String>>;
}

impl TreeDisplay for TreeNode {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> DomainResult<Tree<String>> {
        fn build_tree(node: &TreeNode) -> Tree<String> {
            let root = Tree::new(node.value.to_string());
            if node.is_leaf() {
                return root;
            }
            let leaves = [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .map(|child| match child {
                    Some(c) => build_tree(c),
                    None => Tree::new(EMPTY_CHILD.to_string()),
                });
            root.with_leaves(leaves)
        }

        check_depth(self.height())?;
        Ok(build_tree(self))
    }
}

impl TreeDisplay for Option<&TreeNode> {
    fn to_tree_string(&self) -> DomainResult<Tree<String>> {
        match self {
            Some(node) => node.to_tree_string(),
            None => Ok(Tree::new("Empty tree".to_string())),
        }
    }
}

impl TreeDisplay for TreeArena {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> DomainResult<Tree<String>> {
        fn build_tree(arena: &TreeArena, node_idx: Index) -> Tree<String> {
            let Some(node) = arena.get_node(node_idx) else {
                return Tree::new(EMPTY_CHILD.to_string());
            };
            let tree = Tree::new(node.value.to_string());
            if node.left.is_none() && node.right.is_none() {
                return tree;
            }
            let leaves = [node.left, node.right].into_iter().map(|child| match child {
                Some(idx) => build_tree(arena, idx),
                None => Tree::new(EMPTY_CHILD.to_string()),
            });
            tree.with_leaves(leaves)
        }

        check_depth(self.height())?;
        Ok(match self.root() {
            Some(root_idx) => build_tree(self, root_idx),
            None => Tree::new("Empty tree".to_string()),
        })
    }
}
