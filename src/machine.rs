//! Drag state machine: transient gesture state and the pure transition function.
//!
//! A gesture runs `Idle -> Column | Item -> Idle`. Item moves are applied
//! live on every drag-over so cards follow the pointer across columns;
//! column reordering is resolved once at drag-end.
//!
//! [`transition`] never mutates its input. It returns the next state together
//! with an [`Outcome`] describing what happened, which keeps the machine
//! testable without a host event loop.

#[cfg(test)]
#[path = "machine_test.rs"]
mod machine_test;

use serde::{Deserialize, Serialize};

use crate::doc::{Board, Column, Id, Item};
use crate::error::DragError;
use crate::moves::{insert_before, swap_position};
use crate::payload::{DragData, DragKind, Draggable, draggable_data};

/// The entity currently being dragged, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Active {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A column is being dragged.
    Column(Column),
    /// An item card is being dragged.
    Item(Item),
}

impl Active {
    #[must_use]
    pub fn column(&self) -> Option<&Column> {
        match self {
            Self::Column(c) => Some(c),
            _ => None,
        }
    }

    #[must_use]
    pub fn item(&self) -> Option<&Item> {
        match self {
            Self::Item(i) => Some(i),
            _ => None,
        }
    }
}

/// Everything a renderer reads between events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    pub board: Board,
    pub active: Active,
}

impl BoardState {
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self { board, active: Active::Idle }
    }

    /// Whether a gesture is currently in flight.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        !matches!(self.active, Active::Idle)
    }
}

/// One drag lifecycle event from the gesture provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum DragEvent {
    Start {
        source: Draggable,
    },
    Over {
        source: Draggable,
        #[serde(default)]
        target: Option<Draggable>,
    },
    End {
        source: Draggable,
        #[serde(default)]
        target: Option<Draggable>,
    },
    /// Gesture aborted; equivalent to an end with no drop target.
    Cancel {
        source: Draggable,
    },
}

/// Why an event was accepted without effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    NoTarget,
    SelfTarget,
    /// Drag-over with a non-item source; columns reorder on drop.
    NotAnItem,
}

/// Result of one transition.
#[derive(Debug)]
pub enum Outcome {
    /// A gesture began for the given kind.
    Started(DragKind),
    /// The item sequence was replaced.
    ItemsReplaced,
    /// The column sequence was replaced.
    ColumnsReplaced,
    /// The gesture finished with no structural change.
    Ended,
    Skipped(Skip),
    Rejected(DragError),
}

/// Next state and what produced it.
#[derive(Debug)]
pub struct Transition {
    pub state: BoardState,
    pub outcome: Outcome,
}

impl Transition {
    fn unchanged(state: &BoardState, outcome: Outcome) -> Self {
        Self { state: state.clone(), outcome }
    }
}

/// Apply `event` to `state`.
#[must_use]
pub fn transition(state: &BoardState, event: &DragEvent) -> Transition {
    match event {
        DragEvent::Start { source } => drag_start(state, source),
        DragEvent::Over { source, target } => drag_over(state, source, target.as_ref()),
        DragEvent::End { source, target } => drag_end(state, source, target.as_ref()),
        DragEvent::Cancel { source } => drag_end(state, source, None),
    }
}

fn drag_start(state: &BoardState, source: &Draggable) -> Transition {
    let data = match draggable_data(source) {
        Ok(data) => data,
        Err(e) => return Transition::unchanged(state, Outcome::Rejected(e.into())),
    };

    let kind = data.kind();
    let active = match data {
        DragData::Column { column } => Active::Column(column),
        DragData::Item { item } => Active::Item(item),
    };
    Transition {
        state: BoardState { board: state.board.clone(), active },
        outcome: Outcome::Started(kind),
    }
}

fn drag_over(state: &BoardState, source: &Draggable, target: Option<&Draggable>) -> Transition {
    let Some(target) = target else {
        return Transition::unchanged(state, Outcome::Skipped(Skip::NoTarget));
    };
    if source.id == target.id {
        return Transition::unchanged(state, Outcome::Skipped(Skip::SelfTarget));
    }
    let (source_data, target_data) = match (draggable_data(source), draggable_data(target)) {
        (Ok(s), Ok(t)) => (s, t),
        (Err(e), _) | (_, Err(e)) => {
            return Transition::unchanged(state, Outcome::Rejected(e.into()));
        }
    };
    if source_data.kind() != DragKind::Item {
        return Transition::unchanged(state, Outcome::Skipped(Skip::NotAnItem));
    }

    let replaced = match target_data {
        DragData::Item { .. } => item_over_item(&state.board, &source.id, &target.id),
        DragData::Column { .. } => item_over_column(&state.board, &source.id, &target.id),
    };

    match replaced {
        Ok(items) => {
            let board = state.board.with_items(items);
            let active = follow_active(&state.active, &board);
            Transition { state: BoardState { board, active }, outcome: Outcome::ItemsReplaced }
        }
        Err(e) => Transition::unchanged(state, Outcome::Rejected(e)),
    }
}

/// Keep the active item in step with its latest value on the board.
fn follow_active(active: &Active, board: &Board) -> Active {
    match active {
        Active::Item(item) => board.item(&item.id).cloned().map_or_else(|| active.clone(), Active::Item),
        other => other.clone(),
    }
}

/// Reorder within a column, or migrate across and land before the target.
fn item_over_item(board: &Board, source_id: &Id, target_id: &Id) -> Result<Vec<Item>, DragError> {
    let from = board
        .item_position(source_id)
        .ok_or_else(|| DragError::DanglingReference { id: source_id.clone() })?;
    let to = board
        .item_position(target_id)
        .ok_or_else(|| DragError::DanglingReference { id: target_id.clone() })?;

    let items = board.items();
    let (moving, over) = (&items[from], &items[to]);

    if moving.column_id == over.column_id {
        return swap_position(items, from, to).map_err(|_| DragError::DanglingReference { id: source_id.clone() });
    }

    let mut staged = items.to_vec();
    staged[from] = moving.in_column(&over.column_id);
    insert_before(&staged, from, to).map_err(|_| DragError::DanglingReference { id: source_id.clone() })
}

/// Reassign the item's column, keeping its position in the global order.
fn item_over_column(board: &Board, source_id: &Id, column_id: &Id) -> Result<Vec<Item>, DragError> {
    if board.column(column_id).is_none() {
        return Err(DragError::DanglingReference { id: column_id.clone() });
    }
    let at = board
        .item_position(source_id)
        .ok_or_else(|| DragError::DanglingReference { id: source_id.clone() })?;

    Ok(board
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| if i == at { item.in_column(column_id) } else { item.clone() })
        .collect())
}

fn drag_end(state: &BoardState, source: &Draggable, target: Option<&Draggable>) -> Transition {
    let idle = BoardState { board: state.board.clone(), active: Active::Idle };
    let ended = |outcome| Transition { state: idle.clone(), outcome };

    let Some(target) = target else {
        return ended(Outcome::Ended);
    };
    let data = match draggable_data(source) {
        Ok(data) => data,
        Err(e) => return ended(Outcome::Rejected(e.into())),
    };
    if source.id == target.id || data.kind() != DragKind::Column {
        return ended(Outcome::Ended);
    }

    let board = &state.board;
    let Some(from) = board.column_position(&source.id) else {
        return ended(Outcome::Rejected(DragError::DanglingReference { id: source.id.clone() }));
    };
    let Some(to) = board.column_position(&target.id) else {
        return ended(Outcome::Rejected(DragError::DanglingReference { id: target.id.clone() }));
    };

    match swap_position(board.columns(), from, to) {
        Ok(columns) => Transition {
            state: BoardState { board: board.with_columns(columns), active: Active::Idle },
            outcome: Outcome::ColumnsReplaced,
        },
        Err(_) => ended(Outcome::Rejected(DragError::DanglingReference { id: source.id.clone() })),
    }
}
