//! Floating drag preview derived from the transient drag state.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use crate::doc::{Column, Item};
use crate::machine::{Active, BoardState};

/// What the preview layer should draw under the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay<'a> {
    /// A whole column, with its items in board order.
    Column { column: &'a Column, items: Vec<&'a Item> },
    /// A single card.
    Item(&'a Item),
}

/// Derive the preview for `state`, or `None` when no gesture is active.
#[must_use]
pub fn project(state: &BoardState) -> Option<Overlay<'_>> {
    match &state.active {
        Active::Idle => None,
        Active::Column(column) => Some(Overlay::Column { column, items: state.board.items_in(&column.id) }),
        Active::Item(item) => Some(Overlay::Item(item)),
    }
}
