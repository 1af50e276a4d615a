//! Ordered-move primitives over positional sequences.
//!
//! Both moves are pure: the input slice is never modified and a freshly
//! allocated sequence is returned. Callers resolve ids to positions first.

#[cfg(test)]
#[path = "moves_test.rs"]
mod moves_test;

use crate::error::MoveError;

fn check(len: usize, index: usize) -> Result<(), MoveError> {
    if index < len { Ok(()) } else { Err(MoveError::OutOfBounds { index, len }) }
}

/// Remove the element at `from` and reinsert it at `to` of the shortened sequence.
///
/// With `from == to` the result equals the input.
///
/// # Errors
///
/// Returns [`MoveError::OutOfBounds`] if either index is not a valid position.
pub fn swap_position<T: Clone>(seq: &[T], from: usize, to: usize) -> Result<Vec<T>, MoveError> {
    check(seq.len(), from)?;
    check(seq.len(), to)?;

    let mut out = seq.to_vec();
    if from != to {
        let moved = out.remove(from);
        out.insert(to, moved);
    }
    Ok(out)
}

/// Remove the element at `from` and place it immediately before the element
/// that was at `to`.
///
/// Moving forward, removal shifts the target down by one, so the insertion
/// point is `to - 1`. With `from == to` the result equals the input.
///
/// # Errors
///
/// Returns [`MoveError::OutOfBounds`] if either index is not a valid position.
pub fn insert_before<T: Clone>(seq: &[T], from: usize, to: usize) -> Result<Vec<T>, MoveError> {
    check(seq.len(), from)?;
    check(seq.len(), to)?;

    let mut out = seq.to_vec();
    if from != to {
        let moved = out.remove(from);
        let at = if from < to { to - 1 } else { to };
        out.insert(at, moved);
    }
    Ok(out)
}
