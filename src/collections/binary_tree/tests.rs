#![cfg(test)]

use super::*;

#[test]
fn contains_every_inserted_value_over_permutations() {
    let permutations = [
        [4, 2, 6, 1, 3, 5, 7],
        [1, 2, 3, 4, 5, 6, 7],
        [7, 6, 5, 4, 3, 2, 1],
        [7, 3, 1, 5, 6, 2, 4],
    ];

    for values in permutations {
        let tree: BinarySearchTree<i32> = values.into_iter().collect();

        for value in values {
            assert!(tree.contains(&value), "{value} was inserted but not found.");
        }
        assert!(!tree.contains(&0));
        assert!(!tree.contains(&8));

        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&7));
        assert_eq!(tree.size(), 7);
        assert!(
            (3..=7).contains(&tree.depth()),
            "Depth must lie between ceil(log2(size + 1)) and size, got {}.",
            tree.depth()
        );
    }
}

#[test]
fn shape_follows_insertion_order() {
    let balanced: BinarySearchTree<i32> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
    assert_eq!(balanced.depth(), 3);

    let degenerate: BinarySearchTree<i32> = (1..=7).collect();
    assert_eq!(degenerate.depth(), 7, "Sorted insertion must produce a chain.");
}

#[test]
fn duplicate_insert_changes_nothing() {
    let mut tree = BinarySearchTree::new();
    assert!(tree.insert(2));
    assert!(tree.insert(1));
    assert!(tree.insert(3));

    assert!(!tree.insert(2));
    assert!(!tree.insert(3));
    assert_eq!(tree.size(), 3);
    assert_eq!(tree.depth(), 2);
}

#[test]
fn remove_min_splices_right_subtree_into_parent_link() {
    // 1 is the minimum and carries a right child, the case the splice exists for.
    let mut tree: BinarySearchTree<i32> = [5, 1, 3, 7].into_iter().collect();

    assert_eq!(tree.remove_min(), Some(1));
    assert!(tree.contains(&3), "The removed minimum's right subtree must survive.");
    assert_eq!(tree.size(), 3);
    assert_eq!(tree.min(), Some(&3));
}

#[test]
fn remove_max_splices_left_subtree_into_parent_link() {
    let mut tree: BinarySearchTree<i32> = [5, 9, 7, 3].into_iter().collect();

    assert_eq!(tree.remove_max(), Some(9));
    assert!(tree.contains(&7), "The removed maximum's left subtree must survive.");
    assert_eq!(tree.size(), 3);
    assert_eq!(tree.max(), Some(&7));
}

#[test]
fn remove_extrema_handles_the_root() {
    let mut tree: BinarySearchTree<i32> = [2, 3].into_iter().collect();

    assert_eq!(tree.remove_min(), Some(2), "The root itself can be the minimum.");
    assert_eq!(tree.remove_min(), Some(3));
    assert_eq!(tree.remove_min(), None);
    assert!(tree.is_empty());

    let mut tree: BinarySearchTree<i32> = [2, 1].into_iter().collect();
    assert_eq!(tree.remove_max(), Some(2), "The root itself can be the maximum.");
    assert_eq!(tree.remove_max(), Some(1));
    assert_eq!(tree.remove_max(), None);
}

#[test]
fn value_removal_reports_unsupported() {
    let mut tree: BinarySearchTree<i32> = [2, 1, 3].into_iter().collect();

    let err = tree.remove(&1).unwrap_err();
    assert_eq!(err.operation, "BinarySearchTree::remove");
    assert_eq!(tree.size(), 3, "The rejected removal must not touch the tree.");
}

#[test]
fn empty_tree_queries() {
    let tree: BinarySearchTree<i32> = BinarySearchTree::new();

    assert!(tree.is_empty());
    assert_eq!(tree.min(), None);
    assert_eq!(tree.max(), None);
    assert_eq!(tree.min_or_default(), 0);
    assert_eq!(tree.max_or_default(), 0);
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.depth(), 0);
    assert_eq!(tree.to_string(), "");
}

#[test]
fn single_seeds_the_root() {
    let tree = BinarySearchTree::single(4);

    assert_eq!(tree.size(), 1);
    assert_eq!(tree.depth(), 1);
    assert_eq!(tree.min(), Some(&4));
    assert_eq!(tree.max(), Some(&4));
}

#[test]
fn iteration_yields_ascending_order() {
    let tree: BinarySearchTree<i32> = [3, 1, 4, 1, 5, 9, 2, 6].into_iter().collect();

    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 9]);
    // The walk restarts from the least value each time.
    assert_eq!(tree.iter().count(), 7);

    assert_eq!(tree.into_iter().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 9]);
}

#[test]
fn display_dumps_structure_with_null_markers() {
    assert_eq!(BinarySearchTree::single(1).to_string(), "[ NULL 1 NULL ]");

    let tree: BinarySearchTree<i32> = [2, 1, 3].into_iter().collect();
    assert_eq!(tree.to_string(), "[ [ NULL 1 NULL ] 2 [ NULL 3 NULL ] ]");
}
