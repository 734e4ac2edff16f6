// =====================================================================
// File: index/mod.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Data Structures Project
// Date: Sept 22, 2025 - Reworked Oct. 19, 2026
//
//! The `index` module contains the in-memory B-tree.
//!
//! Structure:
//! - `node.rs`     : Defines the [`BTreeNode`] structure and its read-only helpers.
//! - `tree.rs`     : Defines the [`BTree`] handle and its algorithms
//!   (insert, remove, level-order enumeration).
//! - `validate.rs` : Invariant checker used by the tests.
//! - `tests.rs`    : Unit tests for the B-tree (compiled only in test mode).
// =====================================================================

pub mod node;
pub mod tree;
mod validate;

pub use self::node::BTreeNode;
pub use self::tree::BTree;

#[cfg(test)]
pub mod tests;
