//! # btreelab
//! An in-memory B-tree of fixed minimum degree with an interactive console.
//!
//! ## Features
//! - Insertion with preemptive splitting (single downward pass)
//! - Removal with predecessor/successor replacement and borrow/merge
//!   rebalancing on the way down
//! - Root growth and shrinkage
//! - Level-order snapshot of the tree plus a text renderer for it
//! - Duplicate keys are kept as separate entries
//!
//! ## Usage
//! ```
//! use btreelab::{BTree, BTreeError};
//!
//! let mut tree = BTree::new(2)?;
//! for key in [10, 20, 5, 6, 12, 30, 7, 17] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.levels()[0], vec![vec![10, 20]]);
//!
//! tree.remove(&6)?;
//! assert!(matches!(tree.remove(&6), Err(BTreeError::NotFound)));
//! # Ok::<(), BTreeError>(())
//! ```
//!
//! The binary in `main.rs` wraps the same API in a menu loop
//! (see [`session`]).
// =====================================================================
// File: lib.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Data Structures Project
// Date: Sept 20, 2025 - Reworked Oct. 19, 2026
//
//   The console accepts these menu choices:
//
//     `1` / `insert`   -> Insert keys until `q`
//     `2` / `remove`   -> Remove keys until `q`
//     `3` / `display`  -> Print the tree level by level
//     `4` / `exit`     -> Terminate the program
// =====================================================================
pub mod error;
pub use error::{BTreeError, Result};

pub mod index;
pub use index::{BTree, BTreeNode};

pub mod render;
pub use render::render_levels;

pub mod config;
pub use config::{Config, KeyType};

pub mod logging;

pub mod session;
pub use session::{run_console, Session};
