// =====================================================================
// File: index/node.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Data Structures Project
// Date: Sept 21, 2025 - Reworked Oct 19, 2026
//
// Description:
//   Defines the core B-tree node structure (`BTreeNode`). Each node
//   maintains:
//
//   - `keys`    : Ordered keys stored within the node.
//   - `children`: Owned child nodes (empty if this node is a leaf).
//   - `is_leaf` : Boolean flag indicating whether the node is a leaf.
//
// Notes:
//   * This file contains only the node representation and read-only
//     helpers. Restructuring (split, borrow, merge) lives in `tree.rs`
//     because it needs the tree's minimum degree.
// =====================================================================


// BTree Referencing:
// https://build-your-own.org/database/
// https://www.geeksforgeeks.org/dsa/introduction-of-b-tree-2/
/// Basic Foundational BTree Node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BTreeNode<K> {
    pub keys: Vec<K>,
    /// Box allows Rust to recursivley move through values and nodes - Heap
    pub children: Vec<Box<BTreeNode<K>>>,
    pub is_leaf: bool,
}


impl<K: Ord> BTreeNode<K> {
    /// Creates a new empty B-tree node.
    ///
    /// # Arguments
    ///
    /// * `is_leaf` - A boolean flag indicating whether this node
    ///   is a leaf (has no children) or an internal node (may have children).
    ///
    /// # Example
    /// ```
    /// use btreelab::BTreeNode;
    /// let leaf: BTreeNode<u32> = BTreeNode::new(true);
    /// assert!(leaf.keys.is_empty());
    /// assert!(leaf.is_leaf);
    /// ```
    pub fn new(is_leaf: bool) -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
            is_leaf,
        }
    }

    /// Number of keys currently held by this node.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the index of the first key that is >= `key`.
    /// If all stored keys are less than `key`, returns the length of the vector
    /// (i.e., the "end" position).
    ///
    /// # Example
    /// ```
    /// use btreelab::BTreeNode;
    ///
    /// let mut node = BTreeNode::new(true);
    /// node.keys.extend([10, 20, 20, 30]);
    ///
    /// assert_eq!(node.find_key(&5), 0);
    /// assert_eq!(node.find_key(&20), 1);
    /// assert_eq!(node.find_key(&35), 4);
    /// ```
    pub fn find_key(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k < key)
    }

    /// Returns the index just past every key that is <= `key`.
    ///
    /// Insertion uses this position so a duplicate lands after the
    /// equal keys already stored, and an internal node descends into
    /// the first child whose separator is strictly greater than `key`.
    pub fn upper_bound(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k <= key)
    }

    /// True if `key` is stored somewhere in this subtree.
    pub fn contains(&self, key: &K) -> bool {
        let mut current_node = self;
        loop {
            let idx = current_node.find_key(key);
            if idx < current_node.keys.len() && current_node.keys[idx] == *key {
                return true;
            }
            if current_node.is_leaf {
                return false;
            }
            current_node = &current_node.children[idx];
        }
    }

    /// Smallest key of this subtree. Descends left until reaching a leaf.
    pub fn first_key(&self) -> Option<&K> {
        let mut current_node = self;
        while !current_node.is_leaf {
            current_node = &current_node.children[0];
        }
        current_node.keys.first()
    }

    /// Largest key of this subtree. Descends right until reaching a leaf.
    pub fn last_key(&self) -> Option<&K> {
        let mut current_node = self;
        while !current_node.is_leaf {
            let last = current_node.children.len() - 1;
            current_node = &current_node.children[last];
        }
        current_node.keys.last()
    }

    /// Number of keys stored in this whole subtree.
    pub fn subtree_len(&self) -> usize {
        self.keys.len()
            + self
                .children
                .iter()
                .map(|child| child.subtree_len())
                .sum::<usize>()
    }
}

impl<K: Ord + Clone> BTreeNode<K> {
    /// Collects all keys stored in this subtree and appends them to the
    /// provided output vector in sorted (in-order) order.
    ///
    /// - If the node is a leaf, it simply pushes all keys in their
    ///   stored order.
    /// - If the node is internal, it recursively visits each child,
    ///   pushing the key that separates the children between those visits.
    ///
    /// # Example
    /// ```
    /// use btreelab::BTreeNode;
    ///
    /// let mut node = BTreeNode::new(true);
    /// node.keys.extend(["a".to_string(), "b".to_string()]);
    ///
    /// let mut out = Vec::new();
    /// node.collect_keys(&mut out);
    ///
    /// assert_eq!(out, vec!["a".to_string(), "b".to_string()]);
    /// ```
    pub fn collect_keys(&self, out: &mut Vec<K>) {
        if self.is_leaf {
            out.extend(self.keys.iter().cloned());
        } else {
            // Internal node: in-order traversal
            for i in 0..self.keys.len() {
                // Left subtree
                self.children[i].collect_keys(out);

                // Key at index i
                out.push(self.keys[i].clone());
            }

            // Last child (rightmost subtree)
            self.children[self.keys.len()].collect_keys(out);
        }
    }

    /// Appends this subtree's key lists to `levels`, one entry per depth.
    ///
    /// `depth` is this node's depth. Nodes are visited parent first and
    /// children left to right, so every level ends up ordered left to right.
    pub fn collect_levels(&self, depth: usize, levels: &mut Vec<Vec<Vec<K>>>) {
        if depth == levels.len() {
            levels.push(Vec::new());
        }
        levels[depth].push(self.keys.clone());

        for child in &self.children {
            child.collect_levels(depth + 1, levels);
        }
    }
}
