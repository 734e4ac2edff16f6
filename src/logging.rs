// =====================================================================
// File: logging.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Data Structures Project
// Date: Oct. 19, 2026
//
// Description:
//   Sets up the tracing subscriber for the binary. Logs go to stderr so
//   stdout carries only the console transcript.
// =====================================================================
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{BTreeError, Result};

/// Installs a global `fmt` subscriber filtered by `level`.
///
/// `level` is any `EnvFilter` directive (`warn`, `btreelab=trace`, ...).
/// Fails if the directive does not parse or a subscriber is already set.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .map_err(|e| BTreeError::Logging(format!("invalid log level: {e}")))?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|_| BTreeError::Logging("logging already initialized".into()))
}
