use inorder::domain::{
    inorder_recursive, inorder_traversal, inorder_traversal_bounded, DomainError, InorderIter,
    TreeArena, TreeNode,
};
use inorder::util::testing;
use proptest::prelude::*;
use rstest::rstest;

fn build(slots: &[Option<i32>]) -> Option<Box<TreeNode>> {
    TreeNode::from_level_order(slots).expect("valid level order")
}

/// Arbitrary tree shapes with arbitrary values, possibly empty.
fn arb_tree() -> impl Strategy<Value = Option<Box<TreeNode>>> {
    let leaf = Just(None::<Box<TreeNode>>);
    leaf.prop_recursive(10, 128, 2, |inner| {
        (any::<i32>(), inner.clone(), inner).prop_map(|(value, left, right)| {
            Some(Box::new(TreeNode { value, left, right }))
        })
    })
}

// ============================================================
// Concrete scenarios
// ============================================================

//    1
//     \
//      2
//     /
//    3
#[rstest]
#[case::root_right_then_left("[1,null,2,3]", vec![1, 3, 2])]
#[case::single_node("[5]", vec![5])]
#[case::empty("[]", vec![])]
#[case::balanced("[2,1,3]", vec![1, 2, 3])]
#[case::left_skewed_chain("[3,2,null,1]", vec![1, 2, 3])]
#[case::right_skewed_chain("[1,null,2,null,3]", vec![1, 2, 3])]
#[case::full_two_levels("[4,2,6,1,3,5,7]", vec![1, 2, 3, 4, 5, 6, 7])]
fn given_level_order_when_traversed_then_left_node_right(
    #[case] input: &str,
    #[case] expected: Vec<i32>,
) {
    testing::init_test_setup();
    let slots = inorder::domain::parse_level_order(input).unwrap();
    let root = build(&slots);

    assert_eq!(inorder_traversal(root.as_deref()), expected);
}

#[test]
fn given_same_tree_when_traversed_twice_then_identical_and_unchanged() {
    let root = build(&[Some(1), None, Some(2), Some(3)]).unwrap();
    let snapshot = root.clone();

    let first = inorder_traversal(Some(&root));
    let second = inorder_traversal(Some(&root));

    assert_eq!(first, second);
    assert_eq!(root, snapshot);
}

#[test]
fn given_negative_and_duplicate_values_when_traversed_then_kept_verbatim() {
    let root = TreeNode::new(0)
        .with_left(TreeNode::new(-7).with_right(TreeNode::new(0)))
        .with_right(TreeNode::new(i32::MIN));

    assert_eq!(inorder_traversal(Some(&root)), vec![-7, 0, 0, i32::MIN]);
}

#[test]
fn given_very_deep_chain_when_traversed_then_no_recursion_needed() {
    const DEPTH: i32 = 200_000;
    let mut root = TreeNode::new(0);
    for value in 1..DEPTH {
        root = TreeNode::new(value).with_left(root);
    }

    let values = inorder_traversal(Some(&root));

    assert_eq!(values.len(), DEPTH as usize);
    assert_eq!(values.first(), Some(&0));
    assert_eq!(values.last(), Some(&(DEPTH - 1)));
    assert!(values.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(root.height(), DEPTH as usize);
}

#[test]
fn given_capacity_below_node_count_when_bounded_then_fails_without_partial_result() {
    let root = build(&[Some(4), Some(2), Some(6), Some(1), Some(3), Some(5), Some(7)]).unwrap();

    for capacity in 0..7 {
        assert_eq!(
            inorder_traversal_bounded(Some(&root), capacity),
            Err(DomainError::CapacityExceeded { capacity })
        );
    }
    assert_eq!(
        inorder_traversal_bounded(Some(&root), 7).unwrap(),
        vec![1, 2, 3, 4, 5, 6, 7]
    );
}

// ============================================================
// Properties
// ============================================================

proptest! {
    #[test]
    fn iterative_matches_recursive(root in arb_tree()) {
        prop_assert_eq!(inorder_traversal(root.as_deref()), inorder_recursive(root.as_deref()));
    }

    #[test]
    fn output_length_equals_node_count(root in arb_tree()) {
        let expected = root.as_deref().map_or(0, TreeNode::node_count);
        prop_assert_eq!(inorder_traversal(root.as_deref()).len(), expected);
    }

    #[test]
    fn lazy_and_arena_traversals_agree(root in arb_tree()) {
        let eager = inorder_traversal(root.as_deref());
        let lazy: Vec<i32> = InorderIter::new(root.as_deref()).map(|n| n.value).collect();
        let arena = TreeArena::from_tree(root.as_deref()).inorder();
        prop_assert_eq!(&eager, &lazy);
        prop_assert_eq!(&eager, &arena);
    }

    #[test]
    fn bounded_succeeds_iff_capacity_covers_tree(root in arb_tree(), slack in 0usize..4) {
        let n = root.as_deref().map_or(0, TreeNode::node_count);
        let expected = inorder_traversal(root.as_deref());

        prop_assert_eq!(inorder_traversal_bounded(root.as_deref(), n + slack), Ok(expected));
        if n > 0 {
            prop_assert_eq!(
                inorder_traversal_bounded(root.as_deref(), n - 1),
                Err(DomainError::CapacityExceeded { capacity: n - 1 })
            );
        }
    }

    #[test]
    fn level_order_round_trip_preserves_traversal(root in arb_tree()) {
        let slots = root.as_deref().map(TreeNode::to_level_order).unwrap_or_default();
        let rebuilt = build(&slots);
        prop_assert_eq!(inorder_traversal(rebuilt.as_deref()), inorder_traversal(root.as_deref()));
    }
}
