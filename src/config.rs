// =====================================================================
// File: config.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Data Structures Project
// Date: Oct. 19, 2026
//
// Description:
//   Command-line configuration for the console. Every option can also
//   come from the environment so scripted runs need no flags.
//
//     --degree <t>        BTREELAB_DEGREE   minimum degree (prompted if absent)
//     --key-type <kind>   text | int        how key tokens are parsed
//     --log-level <dir>   BTREELAB_LOG      tracing filter, e.g. "debug"
// =====================================================================
use clap::{Parser, ValueEnum};

/// How key tokens typed at the console are parsed and ordered.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyType {
    /// Keys are strings in lexicographic order.
    Text,
    /// Keys are signed 64-bit integers in numeric order.
    Int,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "btreelab",
    version,
    about = "Interactive in-memory B-tree: insert, remove and display keys level by level"
)]
pub struct Config {
    #[arg(
        short,
        long,
        env = "BTREELAB_DEGREE",
        help = "Minimum degree t of the tree (>= 2); prompted for when omitted"
    )]
    pub degree: Option<usize>,

    #[arg(
        long,
        value_enum,
        default_value_t = KeyType::Text,
        help = "Parse keys as text or as integers"
    )]
    pub key_type: KeyType,

    #[arg(
        long,
        env = "BTREELAB_LOG",
        default_value = "warn",
        help = "Log filter directive written to stderr (e.g. info, btreelab=trace)"
    )]
    pub log_level: String,
}
