// =====================================================================
// File: session.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Project Part 2
// Date: Nov. 10, 2025 - Reworked Oct. 19, 2026
//
// Description:
// Defines the `Session` struct, which represents a running console
// context around a single B-tree, and the menu loop that drives it.
//
// Responsibilities:
// - Obtain a valid degree (flag, environment or prompt) before any
//   tree exists.
// - Translate menu choices and key tokens into calls on `BTree`.
// - Print results; never touch tree internals.
//
// The loop reads from any `BufRead` and writes to any `Write`, so the
// binary runs it on stdin/stdout and the tests on in-memory buffers.
// =====================================================================
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, info};

use crate::config::{Config, KeyType};
use crate::error::{BTreeError, Result};
use crate::index::BTree;
use crate::render::render_levels;

/// Result of handling a single menu choice.
///
/// - `Continue` means the loop should keep running.
/// - `Exit` means the loop should break out and terminate.
pub enum CommandResult {
    Continue,
    Exit,
}

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Insert,
    Remove,
    Display,
    Exit,
}

impl MenuChoice {
    /// Accepts the menu number or a case-insensitive command word.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "insert" => Some(Self::Insert),
            "2" | "remove" | "delete" => Some(Self::Remove),
            "3" | "display" | "show" => Some(Self::Display),
            "4" | "exit" | "quit" => Some(Self::Exit),
            _ => None,
        }
    }
}


/// Token that ends an insert or remove stream.
fn is_sentinel(token: &str) -> bool {
    token.eq_ignore_ascii_case("q")
}


/// Reads one line, `None` at end of input. The trailing newline is kept.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}


fn prompt<W: Write>(output: &mut W, text: &str) -> Result<()> {
    write!(output, "{text}")?;
    output.flush()?;
    Ok(())
}


/// Represents a single console session over one tree.
pub struct Session<K> {
    /// The tree every command operates on.
    pub tree: BTree<K>,
}


impl<K> Session<K>
where
    K: Ord + Clone + Display + FromStr,
{
    /// Creates a session around an empty tree of minimum degree `degree`.
    ///
    /// # Example
    /// ```
    /// use btreelab::Session;
    /// let session: Session<i64> = Session::new(2).unwrap();
    /// assert!(session.tree.is_empty());
    /// assert!(Session::<i64>::new(1).is_err());
    /// ```
    pub fn new(degree: usize) -> Result<Self> {
        Ok(Self {
            tree: BTree::new(degree)?,
        })
    }

    /// Prompts for a degree until one is accepted.
    ///
    /// Non-numeric input and degrees below 2 are reported and asked again.
    /// Returns `Ok(None)` if the input ends first.
    pub fn prompt_for_degree<R: BufRead, W: Write>(
        input: &mut R,
        output: &mut W,
    ) -> Result<Option<Self>> {
        loop {
            prompt(output, "Enter degree of B-Tree: ")?;
            let Some(line) = read_line(input)? else {
                return Ok(None);
            };

            let degree = match line.trim().parse::<usize>() {
                Ok(degree) => degree,
                Err(_) => {
                    writeln!(output, "ERROR: degree must be a whole number, got '{}'", line.trim())?;
                    continue;
                }
            };

            match Self::new(degree) {
                Ok(session) => return Ok(Some(session)),
                Err(e) => writeln!(output, "ERROR: {e}")?,
            }
        }
    }

    /// Menu loop: show the menu, read a choice, act on it.
    ///
    /// Ends on the exit choice or at end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            writeln!(output)?;
            writeln!(output, "Menu:")?;
            writeln!(output, "1. Insert Element")?;
            writeln!(output, "2. Remove Element")?;
            writeln!(output, "3. Display Tree")?;
            writeln!(output, "4. Exit")?;
            prompt(output, "Enter your choice: ")?;

            let Some(line) = read_line(input)? else {
                debug!("input ended at the menu");
                break;
            };

            match self.handle_choice(&line, input, output)? {
                CommandResult::Exit => break,
                CommandResult::Continue => (),
            }
        }
        Ok(())
    }

    /// Handles a single menu choice and returns whether the loop should
    /// continue or exit.
    fn handle_choice<R: BufRead, W: Write>(
        &mut self,
        line: &str,
        input: &mut R,
        output: &mut W,
    ) -> Result<CommandResult> {
        match MenuChoice::parse(line) {
            Some(MenuChoice::Insert) => self.insert_stream(input, output)?,
            Some(MenuChoice::Remove) => self.remove_stream(input, output)?,
            Some(MenuChoice::Display) => self.display(output)?,
            Some(MenuChoice::Exit) => {
                writeln!(output, "Exiting...")?;
                return Ok(CommandResult::Exit);
            }
            None => writeln!(output, "Invalid choice! Please try again.")?,
        }
        Ok(CommandResult::Continue)
    }

    /// Inserts every key token until the `q` sentinel or end of input.
    fn insert_stream<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            prompt(output, "Enter element to insert (or 'q' to quit): ")?;
            let Some(line) = read_line(input)? else {
                return Ok(());
            };

            for token in line.split_whitespace() {
                if is_sentinel(token) {
                    return Ok(());
                }
                match token.parse::<K>() {
                    Ok(key) => {
                        debug!(%key, "insert");
                        self.tree.insert(key);
                    }
                    Err(_) => writeln!(output, "ERROR: invalid key '{token}'")?,
                }
            }
        }
    }

    /// Removes every key token until the `q` sentinel or end of input.
    fn remove_stream<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            prompt(output, "Enter element to remove (or 'q' to quit): ")?;
            let Some(line) = read_line(input)? else {
                return Ok(());
            };

            for token in line.split_whitespace() {
                if is_sentinel(token) {
                    return Ok(());
                }
                let Ok(key) = token.parse::<K>() else {
                    writeln!(output, "ERROR: invalid key '{token}'")?;
                    continue;
                };

                match self.tree.remove(&key) {
                    Ok(()) => {
                        debug!(%key, "remove");
                    }
                    Err(BTreeError::NotFound) => {
                        writeln!(output, "The key {key} is not in the tree.")?
                    }
                    Err(BTreeError::EmptyTree) => writeln!(output, "The tree is empty")?,
                    Err(e) => return Err(e),
                }
            }
        }
    }

    /// Prints the level-order view of the tree.
    fn display<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output, "View of tree:")?;
        for line in render_levels(&self.tree.levels()) {
            writeln!(output, "{line}")?;
        }
        Ok(())
    }
}


/// Runs a full console session: settle the degree, then the menu loop.
///
/// A degree given in `config` is validated up front and an invalid one is
/// returned as [`BTreeError::InvalidDegree`]; without one the degree is
/// prompted for on `input`.
pub fn run_console<R: BufRead, W: Write>(config: &Config, input: &mut R, output: &mut W) -> Result<()> {
    match config.key_type {
        KeyType::Text => start::<String, R, W>(config.degree, input, output),
        KeyType::Int => start::<i64, R, W>(config.degree, input, output),
    }
}


fn start<K, R, W>(degree: Option<usize>, input: &mut R, output: &mut W) -> Result<()>
where
    K: Ord + Clone + Display + FromStr,
    R: BufRead,
    W: Write,
{
    let mut session = match degree {
        Some(degree) => Session::<K>::new(degree)?,
        None => match Session::<K>::prompt_for_degree(input, output)? {
            Some(session) => session,
            None => return Ok(()),
        },
    };

    info!(degree = session.tree.min_degree(), "session started");
    writeln!(
        output,
        "Max keys per node = 2 * degree - 1 = {}",
        session.tree.max_keys()
    )?;
    session.run(input, output)
}


// =====================================================================
// Unit Tests for Session
// =====================================================================
