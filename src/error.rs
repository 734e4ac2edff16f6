// =====================================================================
// File: error.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Data Structures Project
// Date: Oct. 19, 2026
//
// Description:
//   Error taxonomy shared by the B-tree core and the console session.
//   Every failure is recoverable and reported to the caller; a failed
//   remove leaves the tree exactly as it was.
// =====================================================================
use thiserror::Error;

/// Convenient Result alias so call sites can write `Result<T>`.
pub type Result<T> = std::result::Result<T, BTreeError>;

/// All failures the tree and its console front end can report.
#[derive(Debug, Error)]
pub enum BTreeError {
    /// Minimum degree below 2 was requested at construction.
    #[error("invalid degree {0}: a B-tree needs a minimum degree of at least 2")]
    InvalidDegree(usize),

    /// `remove` was called on a tree with no root.
    #[error("the tree is empty")]
    EmptyTree,

    /// `remove` was called with a key that is not stored anywhere.
    #[error("key not found")]
    NotFound,

    /// A structural check found a broken invariant.
    #[error("tree corrupted: {0}")]
    Corrupted(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The tracing subscriber could not be set up.
    #[error("logging setup failed: {0}")]
    Logging(String),
}
