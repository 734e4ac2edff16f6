// =====================================================================
// File: render.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Data Structures Project
// Date: Oct. 19, 2026
//
// Description:
//   Turns a level-order snapshot (see `BTree::levels`) into display
//   lines. Kept apart from the tree so the snapshot stays pure data and
//   the console only ever prints strings.
// =====================================================================
use std::fmt::Display;

/// Line printed in place of levels when the tree has no root.
pub const EMPTY_TREE_LINE: &str = "Tree is empty";

/// Renders one line per depth.
///
/// Each line reads `Level <d>: ` followed by every node's keys joined by
/// single spaces, each node closed with ` | `.
///
/// # Example
/// ```
/// use btreelab::render::render_levels;
///
/// let levels = vec![vec![vec![10]], vec![vec![5, 6], vec![20]]];
/// assert_eq!(
///     render_levels(&levels),
///     vec!["Level 0: 10 | ".to_string(), "Level 1: 5 6 | 20 | ".to_string()]
/// );
/// ```
pub fn render_levels<K: Display>(levels: &[Vec<Vec<K>>]) -> Vec<String> {
    if levels.is_empty() {
        return vec![EMPTY_TREE_LINE.to_string()];
    }

    levels
        .iter()
        .enumerate()
        .map(|(depth, nodes)| {
            let mut line = format!("Level {depth}: ");
            for keys in nodes {
                let joined: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
                line.push_str(&joined.join(" "));
                line.push_str(" | ");
            }
            line
        })
        .collect()
}
