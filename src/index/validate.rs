// =====================================================================
// File: index/validate.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Data Structures Project
// Date: Oct. 19, 2026
//
// Description:
//   Structural checker for `BTree`. Walks every node once and reports
//   the first broken invariant as `BTreeError::Corrupted`. Used by the
//   unit and property tests after each mutation.
// =====================================================================
use super::{BTree, BTreeNode};
use crate::error::{BTreeError, Result};

impl<K: Ord> BTree<K> {
    /// Checks every B-tree invariant.
    ///
    /// - Every non-root node holds between `t - 1` and `2t - 1` keys, the
    ///   root between 1 and `2t - 1`.
    /// - Every internal node with `k` keys has `k + 1` children; leaves
    ///   have none.
    /// - All leaves sit at the same depth.
    /// - Keys are non-decreasing inside a node and every subtree stays
    ///   within the separators around it.
    /// - The cached length matches the number of stored keys.
    ///
    /// # Example
    /// ```
    /// use btreelab::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// tree.extend(0..100);
    /// assert!(tree.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let Some(root) = &self.root else {
            if self.len != 0 {
                return Err(corrupted(format!("empty tree reports {} keys", self.len)));
            }
            return Ok(());
        };

        if root.keys.is_empty() {
            return Err(corrupted("root holds no keys".into()));
        }

        let mut leaf_depth = None;
        let bounds = Bounds { lower: None, upper: None };
        let counted = check_node(root, self.t, 0, bounds, &mut leaf_depth)?;

        if counted != self.len {
            return Err(corrupted(format!(
                "tree reports {} keys but holds {}",
                self.len, counted
            )));
        }
        Ok(())
    }
}


/// Separator keys enclosing a subtree (inclusive, open when `None`).
struct Bounds<'a, K> {
    lower: Option<&'a K>,
    upper: Option<&'a K>,
}


/// Validates `node` and its subtree, returning the number of keys in it.
fn check_node<'a, K: Ord>(
    node: &'a BTreeNode<K>,
    t: usize,
    depth: usize,
    bounds: Bounds<'a, K>,
    leaf_depth: &mut Option<usize>,
) -> Result<usize> {
    let count = node.keys.len();
    let min = if depth == 0 { 1 } else { t - 1 };
    let max = 2 * t - 1;
    if count < min || count > max {
        return Err(corrupted(format!(
            "node at depth {depth} holds {count} keys, expected {min}..={max}"
        )));
    }

    if !node.keys.windows(2).all(|w| w[0] <= w[1]) {
        return Err(corrupted(format!("keys out of order in node at depth {depth}")));
    }

    let below_lower = bounds.lower.is_some_and(|lower| node.keys[0] < *lower);
    let above_upper = bounds.upper.is_some_and(|upper| node.keys[count - 1] > *upper);
    if below_lower || above_upper {
        return Err(corrupted(format!(
            "node at depth {depth} has keys outside its separators"
        )));
    }

    if node.is_leaf {
        if !node.children.is_empty() {
            return Err(corrupted(format!("leaf at depth {depth} has children")));
        }
        match *leaf_depth {
            None => *leaf_depth = Some(depth),
            Some(expected) if expected != depth => {
                return Err(corrupted(format!(
                    "leaf at depth {depth}, other leaves at depth {expected}"
                )));
            }
            Some(_) => {}
        }
        return Ok(count);
    }

    if node.children.len() != count + 1 {
        return Err(corrupted(format!(
            "internal node at depth {depth} has {count} keys and {} children",
            node.children.len()
        )));
    }

    let mut total = count;
    for (i, child) in node.children.iter().enumerate() {
        let child_bounds = Bounds {
            lower: if i == 0 { bounds.lower } else { Some(&node.keys[i - 1]) },
            upper: if i < count { Some(&node.keys[i]) } else { bounds.upper },
        };
        total += check_node(child, t, depth + 1, child_bounds, leaf_depth)?;
    }
    Ok(total)
}


fn corrupted(message: String) -> BTreeError {
    BTreeError::Corrupted(message)
}
