// =====================================================================
// File: index/tests.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Data Structures Project
// Date: Sept. 21, 2025 - Reworked Oct. 19, 2026
//
// Description:
//   Unit tests for the B-tree implementation (`BTreeNode` and `BTree`).
//   Covers construction, insert, remove, level snapshots and the
//   individual rebalancing paths on hand-built trees.
//
// Notes:
//   * Only compiled when running `cargo test`.
//   * Hand-built trees use t = 2 so every node holds 1..=3 keys.
// =====================================================================


/// Shared builders for hand-made trees.
#[cfg(test)]
mod fixtures {
    use crate::{BTree, BTreeNode};

    pub fn leaf(keys: &[i32]) -> Box<BTreeNode<i32>> {
        let mut node = BTreeNode::new(true);
        node.keys.extend_from_slice(keys);
        Box::new(node)
    }

    pub fn internal(keys: &[i32], children: Vec<Box<BTreeNode<i32>>>) -> Box<BTreeNode<i32>> {
        let mut node = BTreeNode::new(false);
        node.keys.extend_from_slice(keys);
        node.children = children;
        Box::new(node)
    }

    /// Wraps a hand-built root into a degree-2 tree.
    pub fn tree_of(root: Box<BTreeNode<i32>>) -> BTree<i32> {
        let len = root.subtree_len();
        let tree = BTree { t: 2, root: Some(root), len };
        tree.validate().expect("fixture must be a valid tree");
        tree
    }
}


// =================================================================
// Unit tests cover basic node structure and lookups
// =================================================================
#[cfg(test)]
mod node_tests {
    use super::fixtures::{internal, leaf};
    use crate::BTreeNode;

    #[test]
    fn test_new_leaf_node() {
        let node: BTreeNode<i32> = BTreeNode::new(true);
        assert!(node.keys.is_empty());
        assert!(node.children.is_empty());
        assert!(node.is_leaf);
    }

    #[test]
    fn test_new_internal_node() {
        let node: BTreeNode<i32> = BTreeNode::new(false);
        assert!(!node.is_leaf);
    }

    #[test]
    fn find_key_and_upper_bound_around_duplicates() {
        let node = leaf(&[10, 20, 20, 30]);
        assert_eq!(node.find_key(&20), 1);
        assert_eq!(node.upper_bound(&20), 3);
        assert_eq!(node.find_key(&25), 3);
        assert_eq!(node.upper_bound(&25), 3);
        assert_eq!(node.find_key(&40), 4);
    }

    #[test]
    // Tests how contains performs recursively - not using insert to build
    fn contains_descends_into_children() {
        let root = internal(&[10], vec![leaf(&[1, 5]), leaf(&[12])]);

        assert!(root.contains(&1));
        assert!(root.contains(&10));
        assert!(root.contains(&12));
        assert!(!root.contains(&11));
    }

    #[test]
    fn first_and_last_key_follow_the_edges() {
        let left = internal(&[3], vec![leaf(&[1]), leaf(&[4])]);
        let right = internal(&[15], vec![leaf(&[12]), leaf(&[17, 18])]);
        let root = internal(&[10], vec![left, right]);

        assert_eq!(root.first_key(), Some(&1));
        assert_eq!(root.last_key(), Some(&18));
        assert_eq!(root.subtree_len(), 8);
    }

    #[test]
    fn collect_levels_groups_by_depth() {
        let root = internal(&[10], vec![leaf(&[1, 5]), leaf(&[12])]);
        let mut levels = Vec::new();
        root.collect_levels(0, &mut levels);

        assert_eq!(levels, vec![vec![vec![10]], vec![vec![1, 5], vec![12]]]);
    }
}


// =================================================================
// Unit tests cover construction and insertion
// =================================================================
#[cfg(test)]
mod insertion_tests {
    use crate::{BTree, BTreeError};

    #[test]
    fn test_new_tree_is_empty() {
        let tree: BTree<i32> = BTree::new(2).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert!(tree.root().is_none());
        assert!(tree.levels().is_empty());
    }

    #[test]
    fn degree_below_two_is_rejected() {
        assert!(matches!(BTree::<i32>::new(1), Err(BTreeError::InvalidDegree(1))));
        assert!(matches!(BTree::<i32>::new(0), Err(BTreeError::InvalidDegree(0))));
    }

    #[test]
    fn first_insert_creates_leaf_root() {
        let mut tree = BTree::new(2).unwrap();
        tree.insert(42);

        let root = tree.root().unwrap();
        assert!(root.is_leaf);
        assert_eq!(root.keys, vec![42]);
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn classic_degree_two_split_sequence() {
        let mut tree = BTree::new(2).unwrap();
        for key in [10, 20, 5] {
            tree.insert(key);
        }
        assert_eq!(tree.levels(), vec![vec![vec![5, 10, 20]]]);

        // Root is full: inserting 6 splits it and promotes 10
        tree.insert(6);
        assert_eq!(tree.levels(), vec![vec![vec![10]], vec![vec![5, 6], vec![20]]]);

        for key in [12, 30, 7] {
            tree.insert(key);
        }
        assert_eq!(
            tree.levels(),
            vec![vec![vec![10]], vec![vec![5, 6, 7], vec![12, 20, 30]]]
        );

        // Child [12, 20, 30] is full: inserting 17 splits it and promotes 20
        tree.insert(17);
        assert_eq!(
            tree.levels(),
            vec![vec![vec![10, 20]], vec![vec![5, 6, 7], vec![12, 17], vec![30]]]
        );
        assert_eq!(tree.keys(), vec![5, 6, 7, 10, 12, 17, 20, 30]);
        tree.validate().unwrap();
    }

    #[test]
    fn promoted_median_routes_larger_key_right() {
        let mut tree = BTree::new(2).unwrap();
        tree.extend([1, 2, 3]);
        // Root split promotes 2; 4 must land in the right half
        tree.insert(4);
        assert_eq!(tree.levels(), vec![vec![vec![2]], vec![vec![1], vec![3, 4]]]);
    }

    #[test]
    fn cascading_splits_grow_height() {
        let mut tree = BTree::new(2).unwrap();
        for key in 0..64 {
            tree.insert(key);
            tree.validate().unwrap();
        }
        assert_eq!(tree.len(), 64);
        assert!(tree.height() >= 3);
        assert_eq!(tree.keys(), (0..64).collect::<Vec<_>>());
    }

    #[test]
    fn larger_degree_keeps_nodes_wide() {
        let mut tree = BTree::new(4).unwrap();
        tree.extend((0..7).rev());
        // 2t - 1 = 7 keys fit in one leaf
        assert_eq!(tree.height(), 1);

        tree.insert(7);
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.levels()[0], vec![vec![3]]);
        tree.validate().unwrap();
    }

    #[test]
    fn duplicates_are_kept_as_separate_entries() {
        let mut tree = BTree::new(2).unwrap();
        for _ in 0..7 {
            tree.insert(5);
        }
        tree.insert(1);
        tree.insert(9);

        assert_eq!(tree.len(), 9);
        assert_eq!(tree.keys(), vec![1, 5, 5, 5, 5, 5, 5, 5, 9]);
        tree.validate().unwrap();
    }

    #[test]
    fn text_keys_sort_lexicographically() {
        let mut tree = BTree::new(2).unwrap();
        for key in ["dog", "cat", "apple", "10", "9"] {
            tree.insert(key.to_string());
        }
        assert_eq!(tree.keys(), vec!["10", "9", "apple", "cat", "dog"]);
    }

    #[test]
    fn clear_keeps_degree() {
        let mut tree = BTree::new(3).unwrap();
        tree.extend(0..20);
        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.min_degree(), 3);
        tree.validate().unwrap();
    }
}


// =================================================================
// Unit tests for each removal path on hand-built trees
// =================================================================
#[cfg(test)]
mod removal_path_tests {
    use super::fixtures::{internal, leaf, tree_of};

    #[test]
    fn remove_from_leaf_root() {
        let mut tree = tree_of(leaf(&[1, 2, 3]));
        tree.remove(&2).unwrap();
        assert_eq!(tree.levels(), vec![vec![vec![1, 3]]]);
    }

    #[test]
    fn internal_key_replaced_by_predecessor() {
        let mut tree = tree_of(internal(&[10], vec![leaf(&[3, 5]), leaf(&[20])]));
        tree.remove(&10).unwrap();

        assert_eq!(tree.levels(), vec![vec![vec![5]], vec![vec![3], vec![20]]]);
        tree.validate().unwrap();
    }

    #[test]
    fn internal_key_replaced_by_successor() {
        let mut tree = tree_of(internal(&[10], vec![leaf(&[3]), leaf(&[20, 25])]));
        tree.remove(&10).unwrap();

        assert_eq!(tree.levels(), vec![vec![vec![20]], vec![vec![3], vec![25]]]);
        tree.validate().unwrap();
    }

    #[test]
    fn internal_key_with_minimal_children_merges_and_root_shrinks() {
        let mut tree = tree_of(internal(&[10], vec![leaf(&[3]), leaf(&[20])]));
        tree.remove(&10).unwrap();

        assert_eq!(tree.levels(), vec![vec![vec![3, 20]]]);
        assert_eq!(tree.height(), 1);
        tree.validate().unwrap();
    }

    #[test]
    fn fill_borrows_from_left_sibling() {
        let mut tree = tree_of(internal(&[10], vec![leaf(&[3, 5]), leaf(&[20])]));
        tree.remove(&20).unwrap();

        assert_eq!(tree.levels(), vec![vec![vec![5]], vec![vec![3], vec![10]]]);
        tree.validate().unwrap();
    }

    #[test]
    fn fill_borrows_from_right_sibling() {
        let mut tree = tree_of(internal(&[10], vec![leaf(&[3]), leaf(&[20, 25])]));
        tree.remove(&3).unwrap();

        assert_eq!(tree.levels(), vec![vec![vec![20]], vec![vec![10], vec![25]]]);
        tree.validate().unwrap();
    }

    #[test]
    fn internal_borrow_from_right_moves_child_pointer() {
        let left = internal(&[10], vec![leaf(&[5]), leaf(&[15])]);
        let right = internal(&[30, 40], vec![leaf(&[25]), leaf(&[35]), leaf(&[45])]);
        let mut tree = tree_of(internal(&[20], vec![left, right]));

        tree.remove(&5).unwrap();

        assert_eq!(
            tree.levels(),
            vec![
                vec![vec![30]],
                vec![vec![20], vec![40]],
                vec![vec![10, 15], vec![25], vec![35], vec![45]],
            ]
        );
        tree.validate().unwrap();
    }

    #[test]
    fn internal_borrow_from_left_moves_child_pointer() {
        let left = internal(&[10, 20], vec![leaf(&[5]), leaf(&[15]), leaf(&[25])]);
        let right = internal(&[40], vec![leaf(&[35]), leaf(&[45])]);
        let mut tree = tree_of(internal(&[30], vec![left, right]));

        tree.remove(&45).unwrap();

        assert_eq!(
            tree.levels(),
            vec![
                vec![vec![20]],
                vec![vec![10], vec![30]],
                vec![vec![5], vec![15], vec![25], vec![35, 40]],
            ]
        );
        tree.validate().unwrap();
    }

    #[test]
    fn rightmost_descent_after_leftward_merge() {
        // Key sits past the last separator and both children are minimal,
        // so fill folds the last child into its left sibling.
        let mut tree = tree_of(internal(&[10], vec![leaf(&[3]), leaf(&[20])]));
        tree.remove(&20).unwrap();

        assert_eq!(tree.levels(), vec![vec![vec![3, 10]]]);
        tree.validate().unwrap();
    }

    #[test]
    fn rightmost_descent_after_leftward_merge_on_every_level() {
        let left = internal(&[10], vec![leaf(&[5]), leaf(&[15])]);
        let right = internal(&[30], vec![leaf(&[25]), leaf(&[35])]);
        let mut tree = tree_of(internal(&[20], vec![left, right]));

        tree.remove(&35).unwrap();

        assert_eq!(
            tree.levels(),
            vec![vec![vec![10, 20]], vec![vec![5], vec![15], vec![25, 30]]]
        );
        assert_eq!(tree.len(), 6);
        tree.validate().unwrap();
    }

    #[test]
    fn missing_key_leaves_structure_untouched() {
        // Descending towards 17 would otherwise merge the minimal children
        let left = internal(&[10], vec![leaf(&[5]), leaf(&[15])]);
        let right = internal(&[30], vec![leaf(&[25]), leaf(&[35])]);
        let mut tree = tree_of(internal(&[20], vec![left, right]));
        let before = tree.levels();

        assert!(matches!(tree.remove(&17), Err(crate::BTreeError::NotFound)));
        assert_eq!(tree.levels(), before);
        assert_eq!(tree.len(), 7);
    }
}


// =================================================================
// Unit tests for removal driven through the public API
// =================================================================
#[cfg(test)]
mod removal_tests {
    use crate::{BTree, BTreeError};

    /// Helper to make a tree with degree 2 and some inserts
    fn sample_tree() -> BTree<String> {
        let mut tree = BTree::new(2).unwrap();
        for key in ["dog", "cat", "dinosaur", "bird", "frog", "elephant", "fox"] {
            tree.insert(key.to_string());
        }
        tree
    }

    #[test]
    fn remove_on_empty_tree_fails() {
        let mut tree: BTree<i32> = BTree::new(2).unwrap();
        assert!(matches!(tree.remove(&1), Err(BTreeError::EmptyTree)));
        assert!(tree.is_empty());
    }

    #[test]
    fn remove_missing_key_fails_without_change() {
        let mut tree = sample_tree();
        let before = tree.levels();

        assert!(matches!(tree.remove(&"unicorn".to_string()), Err(BTreeError::NotFound)));
        assert_eq!(tree.levels(), before);
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn insert_then_remove_restores_keys() {
        let mut tree = sample_tree();
        let before = tree.keys();

        tree.insert("goat".to_string());
        tree.remove(&"goat".to_string()).unwrap();

        assert_eq!(tree.keys(), before);
        tree.validate().unwrap();
    }

    #[test]
    fn remove_until_empty() {
        let mut tree = sample_tree();
        let keys = ["bird", "cat", "dinosaur", "dog", "elephant", "fox", "frog"];
        for key in keys {
            let key = key.to_string();
            assert!(tree.contains(&key), "missing before remove: {key}");
            tree.remove(&key).unwrap();
            assert!(!tree.contains(&key), "still present after remove: {key}");
            tree.validate().unwrap();
        }
        // Root should now be gone
        assert!(tree.root().is_none());
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn drain_in_several_orders() {
        let orders: Vec<Vec<i32>> = vec![
            (0..200).collect(),
            (0..200).rev().collect(),
            (0..200).map(|i| (i * 7) % 200).collect(),
        ];

        for degree in [2, 3, 5] {
            for order in &orders {
                let mut tree = BTree::new(degree).unwrap();
                tree.extend(0..200);

                for key in order {
                    tree.remove(key).unwrap();
                    tree.validate().unwrap();
                }
                assert!(tree.is_empty(), "degree {degree} not drained");
            }
        }
    }

    #[test]
    fn absent_keys_between_present_ones_report_not_found() {
        let mut tree = BTree::new(2).unwrap();
        tree.extend((0..100).map(|i| i * 2));

        for odd in (1..200).step_by(2) {
            assert!(matches!(tree.remove(&odd), Err(BTreeError::NotFound)));
        }
        assert_eq!(tree.len(), 100);
        tree.validate().unwrap();
    }

    #[test]
    fn duplicates_removed_one_at_a_time() {
        let mut tree = BTree::new(2).unwrap();
        tree.extend([4, 4, 4, 4, 4, 2, 6]);

        for remaining in (0..5).rev() {
            tree.remove(&4).unwrap();
            tree.validate().unwrap();
            assert_eq!(tree.keys().iter().filter(|k| **k == 4).count(), remaining);
        }
        assert!(matches!(tree.remove(&4), Err(BTreeError::NotFound)));
        assert_eq!(tree.keys(), vec![2, 6]);
    }
}
