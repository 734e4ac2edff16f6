// =====================================================================
// File: index/tree.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Data Structures Project
// Date: Sept 21, 2025 - Reworked Oct. 19, 2026
//
// Description:
//   Implements the B-tree (`BTree`) that manages insertion, removal,
//   and level-order enumeration over `BTreeNode` structures.
//
// Features:
//   - `insert`: Adds a key; duplicates are kept as separate entries.
//   - `remove`: Removes one occurrence of a key, rebalancing on the
//     way down so no node ever drops below t-1 keys.
//   - `levels`: Breadth-first snapshot of every node's keys by depth.
//   - Split/borrow/merge helpers: Maintain balance during inserts and
//     removals.
//
// Notes:
//   * Relies on `node.rs` for the `BTreeNode` definition.
//   * The minimum degree `t` determines the branching factor: every
//     node holds at most 2t-1 keys and every non-root node at least t-1.
//   * Internal helpers are associated functions taking the node and `t`
//     so the recursion never holds a borrow of the whole tree.
// =====================================================================
use tracing::{debug, trace};

use super::BTreeNode;
use crate::error::{BTreeError, Result};

/// B-tree handle. Owns the root node and the minimum degree shared by
/// every node below it.
#[derive(Debug, Clone)]
pub struct BTree<K> {
    pub(crate) t: usize,
    pub(crate) root: Option<Box<BTreeNode<K>>>,
    pub(crate) len: usize,
}


// BTree Referencing:
// https://build-your-own.org/database/
// https://www.geeksforgeeks.org/dsa/introduction-of-b-tree-2/
impl<K: Ord + Clone> BTree<K> {
    /// Create a new empty B-tree with minimum degree `t`.
    ///
    /// # Errors
    /// [`BTreeError::InvalidDegree`] when `t < 2`. No node is allocated
    /// in that case.
    ///
    /// # Example
    /// ```
    /// use btreelab::{BTree, BTreeError};
    ///
    /// let tree: BTree<i32> = BTree::new(3).unwrap();
    /// assert_eq!(tree.max_keys(), 5);
    /// assert!(matches!(BTree::<i32>::new(1), Err(BTreeError::InvalidDegree(1))));
    /// ```
    pub fn new(t: usize) -> Result<Self> {
        if t < 2 {
            return Err(BTreeError::InvalidDegree(t));
        }
        Ok(Self { t, root: None, len: 0 })
    }

    /// The minimum degree this tree was built with.
    pub fn min_degree(&self) -> usize {
        self.t
    }

    /// Capacity of a single node: `2t - 1` keys.
    pub fn max_keys(&self) -> usize {
        2 * self.t - 1
    }

    /// Number of stored keys, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Read-only access to the root node, `None` when the tree is empty.
    pub fn root(&self) -> Option<&BTreeNode<K>> {
        self.root.as_deref()
    }

    /// Number of node levels: 0 for an empty tree, 1 for a lone leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut current_node = self.root.as_deref();
        while let Some(node) = current_node {
            height += 1;
            current_node = node.children.first().map(|child| child.as_ref());
        }
        height
    }

    /// Search for a key in the B-tree.
    ///
    /// Runs in **O(t log n)**: one `find_key` per level on the way down.
    pub fn contains(&self, key: &K) -> bool {
        self.root.as_ref().is_some_and(|root| root.contains(key))
    }

    /// All keys in non-decreasing order (in-order traversal).
    pub fn keys(&self) -> Vec<K> {
        let mut out = Vec::with_capacity(self.len);
        if let Some(root) = &self.root {
            root.collect_keys(&mut out);
        }
        out
    }

    /// Drops every node, leaving an empty tree with the same degree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Breadth-first snapshot of the tree.
    ///
    /// The outer index is the depth; each level lists, left to right, the
    /// keys of every node at that depth. An empty tree yields no levels.
    ///
    /// # Example
    /// ```
    /// use btreelab::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// for key in [10, 20, 5, 6] {
    ///     tree.insert(key);
    /// }
    /// assert_eq!(tree.levels(), vec![vec![vec![10]], vec![vec![5, 6], vec![20]]]);
    /// ```
    pub fn levels(&self) -> Vec<Vec<Vec<K>>> {
        let mut levels = Vec::new();
        if let Some(root) = &self.root {
            root.collect_levels(0, &mut levels);
        }
        levels
    }

    /// Insert a key into the B-tree.
    ///
    /// - An empty tree gets a leaf root holding just `key`.
    /// - If the root node is full, the tree grows in height by splitting the
    ///   root before descending.
    /// - Otherwise the key is placed by `insert_non_full` from the root.
    ///
    /// Every full node met on the way down is split before it is entered,
    /// so the insert is a single downward pass. Duplicates are kept; a new
    /// key lands after the equal keys already in its leaf.
    ///
    /// # Example
    /// ```
    /// use btreelab::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// for key in ["dog", "cat", "fish", "cat"] {
    ///     tree.insert(key.to_string());
    /// }
    /// assert_eq!(tree.len(), 4);
    /// assert_eq!(tree.keys(), vec!["cat", "cat", "dog", "fish"]);
    /// ```
    pub fn insert(&mut self, key: K) {
        let t = self.t;
        self.len += 1;

        match self.root.take() {
            None => {
                let mut leaf = Box::new(BTreeNode::new(true));
                leaf.keys.push(key);
                self.root = Some(leaf);
            }
            Some(old_root) if old_root.keys.len() == 2 * t - 1 => {
                // Create a new root and hang the old root under it
                let mut new_root = Box::new(BTreeNode::new(false));
                new_root.children.push(old_root);

                // Split old root (now child 0 of new_root)
                Self::split_child(&mut new_root, t, 0);

                // Choose which half to descend into
                let idx = if new_root.keys[0] < key { 1 } else { 0 };
                Self::insert_non_full(&mut new_root.children[idx], t, key);

                self.root = Some(new_root);
                debug!(height = self.height(), "root split, tree grew");
            }
            Some(mut root) => {
                Self::insert_non_full(&mut root, t, key);
                self.root = Some(root);
            }
        }
    }

    /// Removes one occurrence of `key` from the B-tree.
    ///
    /// This follows the standard top-down B-tree deletion algorithm:
    /// - If the key is in a leaf node, it is removed directly.
    /// - If the key is in an internal node it is replaced with its
    ///   predecessor or successor, or the two children around it are
    ///   merged, and the removal continues below.
    /// - Before descending into a child holding only t-1 keys, that child
    ///   borrows from a sibling or is merged with one.
    ///
    /// If the root ends up without keys, its single child becomes the new
    /// root (or the tree becomes empty when the root was a leaf).
    ///
    /// # Errors
    /// - [`BTreeError::EmptyTree`] when the tree has no root.
    /// - [`BTreeError::NotFound`] when `key` is not stored. The key is
    ///   looked up before any rebalancing, so the tree is left untouched.
    ///
    /// # Example
    /// ```
    /// use btreelab::{BTree, BTreeError};
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// assert!(matches!(tree.remove(&7), Err(BTreeError::EmptyTree)));
    ///
    /// tree.insert(7);
    /// assert!(matches!(tree.remove(&8), Err(BTreeError::NotFound)));
    /// tree.remove(&7).unwrap();
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<()> {
        let t = self.t;

        let Some(root) = self.root.as_mut() else {
            debug!("remove called on an empty tree");
            return Err(BTreeError::EmptyTree);
        };
        if !root.contains(key) {
            debug!("remove called with a key that is not stored");
            return Err(BTreeError::NotFound);
        }

        let outcome = Self::remove_from(root, t, key);

        // If the root has no keys left - shrink height
        self.shrink_root();

        outcome?;
        self.len -= 1;
        Ok(())
    }


    // =========================
    // Root management
    // =========================

    /// Replaces a keyless root by its only child, or by nothing if the
    /// root was a leaf.
    fn shrink_root(&mut self) {
        if !self.root.as_ref().is_some_and(|root| root.keys.is_empty()) {
            return;
        }
        if let Some(mut old_root) = self.root.take() {
            self.root = if old_root.is_leaf {
                None
            } else {
                old_root.children.pop()
            };
            debug!(height = self.height(), "root emptied, tree shrank");
        }
    }


    // =========================
    // Insertion helpers
    // =========================

    /// Inserts `key` into the subtree rooted at `node`.
    ///
    /// # Arguments
    /// * `node` - Subtree root. Must hold fewer than `2t - 1` keys.
    /// * `t`    - Minimum degree of the tree.
    /// * `key`  - The key to insert.
    ///
    /// # Behavior
    /// - **Leaf node**: the key is placed after every stored key that is
    ///   not greater than it.
    /// - **Internal node**: pick the first child whose separator is greater
    ///   than `key`. A full child is split first; if the promoted median is
    ///   smaller than `key`, descend into the new right half instead.
    fn insert_non_full(node: &mut BTreeNode<K>, t: usize, key: K) {
        let mut idx = node.upper_bound(&key);

        // Base case - leaf insert
        if node.is_leaf {
            node.keys.insert(idx, key);
            return;
        }

        // Recurse case (inside node): Check index child is not full
        if node.children[idx].keys.len() == 2 * t - 1 {
            Self::split_child(node, t, idx);

            // After split decide which child to descend into
            if node.keys[idx] < key {
                idx += 1;
            }
        }
        Self::insert_non_full(&mut node.children[idx], t, key);
    }


    /// Split the full child `node.children[i]` during insertion.
    ///
    /// # Behavior
    /// - The left child keeps the first `t - 1` keys (and `t` children).
    /// - The new right child receives the last `t - 1` keys (and `t` children).
    /// - The median key moves up into the parent at position `i`, and the
    ///   new right child is linked at `i + 1`.
    fn split_child(node: &mut BTreeNode<K>, t: usize, i: usize) {
        // We are here because child node is full
        let full_child = &mut node.children[i];
        debug_assert_eq!(full_child.keys.len(), 2 * t - 1);
        let mut right = Box::new(BTreeNode::new(full_child.is_leaf));

        // Upper half starts at the median
        let mut upper = full_child.keys.split_off(t - 1);
        let middle = upper.remove(0);
        right.keys = upper;

        // If internal, split children too: left keeps [0..t), right takes [t..]
        if !full_child.is_leaf {
            right.children = full_child.children.split_off(t);
        }
        trace!(child = i, leaf = right.is_leaf, "split full child");

        // Insert middle into parent and link new right child
        node.keys.insert(i, middle);
        node.children.insert(i + 1, right);
    }


    // =========================
    // Deletion helpers
    // =========================

    /// Recursive deletion state machine for the subtree rooted at `node`.
    ///
    /// # Behavior
    /// 1. **Key found in this node**
    ///    - Leaf: remove it directly.
    ///    - Internal: see `remove_from_non_leaf`.
    ///
    /// 2. **Key not found in this node**
    ///    - Leaf: the key is not in the tree, [`BTreeError::NotFound`].
    ///    - Internal: make sure the child about to be entered holds at
    ///      least `t` keys, then recurse into it. When the key belongs past
    ///      the last separator and the fill merged that last child into its
    ///      left sibling, the merged node now sits at `idx - 1`.
    fn remove_from(node: &mut BTreeNode<K>, t: usize, key: &K) -> Result<()> {
        let idx = node.find_key(key);

        // First case - key is in this node
        if idx < node.keys.len() && node.keys[idx] == *key {
            return if node.is_leaf {
                Self::remove_from_leaf(node, idx);
                Ok(())
            } else {
                Self::remove_from_non_leaf(node, t, idx)
            };
        }

        // Next case - reached a leaf without finding it
        if node.is_leaf {
            return Err(BTreeError::NotFound);
        }

        // Key would live in the rightmost subtree
        let flag = idx == node.keys.len();

        if node.children[idx].keys.len() < t {
            Self::fill(node, t, idx);
        }

        // Keys shrank by one only if the last child was merged leftward
        if flag && idx > node.keys.len() {
            Self::remove_from(&mut node.children[idx - 1], t, key)
        } else {
            Self::remove_from(&mut node.children[idx], t, key)
        }
    }


    fn remove_from_leaf(node: &mut BTreeNode<K>, idx: usize) {
        node.keys.remove(idx);
    }


    /// Removes `node.keys[idx]` from an internal node.
    ///
    /// * Left child has at least `t` keys: replace with the predecessor and
    ///   remove the predecessor from the left subtree.
    /// * Else right child has at least `t` keys: replace with the successor
    ///   and remove it from the right subtree.
    /// * Else merge both children around the key and remove the key from
    ///   the merged child.
    fn remove_from_non_leaf(node: &mut BTreeNode<K>, t: usize, idx: usize) -> Result<()> {
        if node.children[idx].keys.len() >= t {
            // Replace with predecessor
            let pred = Self::get_pred(node, idx)?;
            node.keys[idx] = pred.clone();
            Self::remove_from(&mut node.children[idx], t, &pred)

        } else if node.children[idx + 1].keys.len() >= t {
            // Replace with successor
            let succ = Self::get_succ(node, idx)?;
            node.keys[idx] = succ.clone();
            Self::remove_from(&mut node.children[idx + 1], t, &succ)

        } else {
            // Merge children[idx] + key + children[idx+1], then recurse
            let key = node.keys[idx].clone();
            Self::merge(node, idx);
            Self::remove_from(&mut node.children[idx], t, &key)
        }
    }


    /// Largest key in the subtree left of `node.keys[idx]`.
    fn get_pred(node: &BTreeNode<K>, idx: usize) -> Result<K> {
        node.children[idx]
            .last_key()
            .cloned()
            .ok_or_else(|| BTreeError::Corrupted("predecessor subtree has an empty leaf".into()))
    }


    /// Smallest key in the subtree right of `node.keys[idx]`.
    fn get_succ(node: &BTreeNode<K>, idx: usize) -> Result<K> {
        node.children[idx + 1]
            .first_key()
            .cloned()
            .ok_or_else(|| BTreeError::Corrupted("successor subtree has an empty leaf".into()))
    }


    /// Gives `node.children[idx]`, which holds `t - 1` keys, one more key.
    ///
    /// # Behavior
    /// * Borrow through the parent from the left sibling if it can spare a key.
    /// * Else borrow from the right sibling.
    /// * If neither sibling can donate, merge the child with one of them:
    ///   with its right sibling when there is one, otherwise fold it into
    ///   its left sibling.
    fn fill(node: &mut BTreeNode<K>, t: usize, idx: usize) {
        // Try to borrow from left sibling
        if idx > 0 && node.children[idx - 1].keys.len() >= t {
            Self::borrow_from_prev(node, idx);
        }
        // Else try to borrow from right sibling
        else if idx < node.keys.len() && node.children[idx + 1].keys.len() >= t {
            Self::borrow_from_next(node, idx);
        }
        // Else merge with a sibling
        else if idx < node.keys.len() {
            Self::merge(node, idx);
        } else {
            Self::merge(node, idx - 1);
        }
    }


    /// Borrows a key from the left sibling of `node.children[idx]`.
    ///
    /// - The separator `node.keys[idx - 1]` moves down to the front of the
    ///   child.
    /// - The left sibling's last key moves up to replace the separator.
    /// - If the nodes are internal, the left sibling's last child moves to
    ///   the front of the child's children.
    fn borrow_from_prev(node: &mut BTreeNode<K>, idx: usize) {
        // Child idx borrows one key from child idx-1 via parent
        let (left_slice, right_slice) = node.children.split_at_mut(idx);
        let left = &mut left_slice[idx - 1];
        let child = &mut right_slice[0];

        let Some(left_last) = left.keys.pop() else {
            return;
        };
        let separator = std::mem::replace(&mut node.keys[idx - 1], left_last);
        child.keys.insert(0, separator);

        // If internal, move a child pointer
        if !left.is_leaf {
            if let Some(moved) = left.children.pop() {
                child.children.insert(0, moved);
            }
        }
        trace!(child = idx, "borrowed from left sibling");
    }


    /// Borrows a key from the right sibling of `node.children[idx]`.
    ///
    /// Mirror image of `borrow_from_prev`: the
    /// separator `node.keys[idx]` moves down to the end of the child and the
    /// right sibling's first key (and first child) moves over.
    fn borrow_from_next(node: &mut BTreeNode<K>, idx: usize) {
        // Child idx borrows one key from child idx+1 via parent
        let (left_slice, right_slice) = node.children.split_at_mut(idx + 1);
        let child = &mut left_slice[idx];
        let right = &mut right_slice[0];

        if right.keys.is_empty() {
            return;
        }
        let right_first = right.keys.remove(0);
        let separator = std::mem::replace(&mut node.keys[idx], right_first);
        child.keys.push(separator);

        // If internal, move a child pointer
        if !right.is_leaf {
            let moved = right.children.remove(0);
            child.children.push(moved);
        }
        trace!(child = idx, "borrowed from right sibling");
    }


    /// Merge `node.children[idx]`, the separating parent key,
    /// and `node.children[idx+1]` into a single child at `idx`.
    /// The right sibling is dropped.
    fn merge(node: &mut BTreeNode<K>, idx: usize) {
        let mut right = node.children.remove(idx + 1);
        let separator = node.keys.remove(idx);
        let left = &mut node.children[idx];

        // Bring parent key down and append right child's keys
        left.keys.push(separator);
        left.keys.append(&mut right.keys);

        // If internal, also merge child pointers
        if !left.is_leaf {
            left.children.append(&mut right.children);
        }
        trace!(child = idx, keys = left.keys.len(), "merged siblings");
    }
}


impl<K: Ord + Clone> Extend<K> for BTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
