use tracing::{debug, trace, warn};

use crate::doc::Board;
use crate::error::ErrorCode;
use crate::machine::{Active, BoardState, DragEvent, Outcome, transition};
use crate::overlay::{Overlay, project};
use crate::payload::Draggable;
use crate::seed;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from drag handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The column sequence was replaced.
    ColumnsChanged,
    /// The item sequence was replaced.
    ItemsChanged,
    /// The floating preview appeared, disappeared, or changed.
    OverlayChanged,
    RenderNeeded,
}

/// Owns the board and the in-flight gesture, and feeds host events through
/// the state machine.
#[derive(Debug, Default)]
pub struct BoardEngine {
    state: BoardState,
}

impl BoardEngine {
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self { state: BoardState::new(board) }
    }

    /// Engine hydrated with [`seed::default_board`].
    #[must_use]
    pub fn with_default_board() -> Self {
        Self::new(seed::default_board())
    }

    /// Replace the board wholesale. Any gesture in progress is dropped.
    pub fn load(&mut self, board: Board) {
        debug!(columns = board.columns().len(), items = board.items().len(), "board loaded");
        self.state = BoardState::new(board);
    }

    // --- Input events ---

    pub fn on_drag_start(&mut self, source: Draggable) -> Vec<Action> {
        self.dispatch(&DragEvent::Start { source })
    }

    pub fn on_drag_over(&mut self, source: Draggable, target: Option<Draggable>) -> Vec<Action> {
        self.dispatch(&DragEvent::Over { source, target })
    }

    pub fn on_drag_end(&mut self, source: Draggable, target: Option<Draggable>) -> Vec<Action> {
        self.dispatch(&DragEvent::End { source, target })
    }

    pub fn on_drag_cancel(&mut self, source: Draggable) -> Vec<Action> {
        self.dispatch(&DragEvent::Cancel { source })
    }

    /// Apply one event and report what happened.
    pub fn apply(&mut self, event: &DragEvent) -> Outcome {
        let next = transition(&self.state, event);
        log_outcome(&next.outcome);
        self.state = next.state;
        next.outcome
    }

    fn dispatch(&mut self, event: &DragEvent) -> Vec<Action> {
        let before = self.state.active.clone();
        let outcome = self.apply(event);

        let mut actions = Vec::new();
        match outcome {
            Outcome::ItemsReplaced => actions.push(Action::ItemsChanged),
            Outcome::ColumnsReplaced => actions.push(Action::ColumnsChanged),
            Outcome::Started(_) | Outcome::Ended | Outcome::Skipped(_) | Outcome::Rejected(_) => {}
        }
        if self.state.active != before {
            actions.push(Action::OverlayChanged);
        }
        if !actions.is_empty() {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[must_use]
    pub fn active(&self) -> &Active {
        &self.state.active
    }

    #[must_use]
    pub fn overlay(&self) -> Option<Overlay<'_>> {
        project(&self.state)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }
}

fn log_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Rejected(e) => warn!(code = e.error_code(), error = %e, "drag event rejected"),
        Outcome::Skipped(reason) => trace!(?reason, "drag event skipped"),
        Outcome::Started(kind) => debug!(?kind, "drag started"),
        Outcome::ItemsReplaced => debug!("items reordered"),
        Outcome::ColumnsReplaced => debug!("columns reordered"),
        Outcome::Ended => debug!("drag ended"),
    }
}
