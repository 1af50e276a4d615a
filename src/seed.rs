//! Board bootstrap: the built-in starter board and loading boards from JSON.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use std::collections::HashSet;
use std::path::Path;

use crate::doc::{Board, Column, Item};
use crate::error::SeedError;

/// Ids of the built-in columns.
pub const TODO: &str = "todo";
pub const IN_PROGRESS: &str = "in-progress";
pub const DONE: &str = "done";

/// The three-column starter board.
#[must_use]
pub fn default_board() -> Board {
    let columns = vec![
        Column::new(TODO, "Todo"),
        Column::new(IN_PROGRESS, "In progress"),
        Column::new(DONE, "Done"),
    ];
    let items = vec![
        Item::new("task1", DONE, "Project initiation and planning"),
        Item::new("task2", DONE, "Gather requirements from stakeholders"),
        Item::new("task3", DONE, "Create wireframes and mockups"),
        Item::new("task4", IN_PROGRESS, "Develop homepage layout"),
        Item::new("task5", IN_PROGRESS, "Design color scheme and typography"),
        Item::new("task6", TODO, "Implement user authentication"),
        Item::new("task7", TODO, "Build contact us page"),
        Item::new("task8", TODO, "Create product catalog"),
        Item::new("task9", TODO, "Develop about us page"),
        Item::new("task10", TODO, "Optimize website for mobile devices"),
        Item::new("task11", TODO, "Integrate payment gateway"),
        Item::new("task12", TODO, "Perform testing and bug fixing"),
        Item::new("task13", TODO, "Launch website and deploy to server"),
    ];
    Board::new(columns, items)
}

/// Check the board invariants: unique ids and no dangling column references.
///
/// # Errors
///
/// Returns the first violation found.
pub fn validate(board: &Board) -> Result<(), SeedError> {
    let mut columns = HashSet::new();
    for column in board.columns() {
        if !columns.insert(&column.id) {
            return Err(SeedError::DuplicateId { kind: "column", id: column.id.clone() });
        }
    }

    let mut items = HashSet::new();
    for item in board.items() {
        if !items.insert(&item.id) {
            return Err(SeedError::DuplicateId { kind: "item", id: item.id.clone() });
        }
        if !columns.contains(&item.column_id) {
            return Err(SeedError::UnknownColumn { item: item.id.clone(), column: item.column_id.clone() });
        }
    }
    Ok(())
}

/// Parse and validate a board from JSON text.
///
/// # Errors
///
/// Returns [`SeedError::Parse`] for invalid JSON and the [`validate`] errors
/// for invariant violations.
pub fn parse_board(json: &str) -> Result<Board, SeedError> {
    let board: Board = serde_json::from_str(json)?;
    validate(&board)?;
    Ok(board)
}

/// Read, parse and validate a board file.
///
/// # Errors
///
/// Returns [`SeedError::Io`] if the file cannot be read, otherwise as [`parse_board`].
pub fn load_board(path: &Path) -> Result<Board, SeedError> {
    let text = std::fs::read_to_string(path)?;
    parse_board(&text)
}
