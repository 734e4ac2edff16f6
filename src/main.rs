// ============================================================
// File: main.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Data Structures Project
// Date: Sept 19, 2025 - Reworked Oct. 19, 2026
//
// Description:
//   Entry point for the B-tree console. Reads the configuration,
//   sets up logging, then hands stdin/stdout to the session loop:
//
//     1. Insert Element   -> keys until 'q'
//     2. Remove Element   -> keys until 'q'
//     3. Display Tree     -> level-order view
//     4. Exit             -> terminate the program
//
// Notes:
//   - Logs go to stderr (BTREELAB_LOG / --log-level).
//   - A degree below 2 given on the command line is rejected before
//     any tree is built.
// ============================================================
use std::io;
use std::process::ExitCode;

use btreelab::{logging, run_console, Config};
use clap::Parser;
use tracing::error;


/// Entry point for the B-tree console.
fn main() -> ExitCode {
    let config = Config::parse();

    if let Err(e) = logging::init_logging(&config.log_level) {
        eprintln!("ERROR: {e}");
        return ExitCode::FAILURE;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    // Hand off to the main menu loop
    match run_console(&config, &mut input, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "console session failed");
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}
