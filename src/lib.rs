//! Drag-and-drop reordering engine for a column-based task board.
//!
//! The host UI forwards raw drag lifecycle events (start, over, end) for
//! column headers and item cards. The engine validates the attached payloads,
//! reorders the two ordered collections, and exposes the resulting snapshot
//! plus a floating-preview descriptor for the renderer. Rendering itself is
//! the host's job.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Host-facing [`engine::BoardEngine`] and the [`engine::Action`]s it emits |
//! | [`machine`] | Gesture state machine and the pure [`machine::transition`] |
//! | [`payload`] | Drag descriptors and the draggable-data guard |
//! | [`moves`] | Positional move primitives |
//! | [`overlay`] | Floating drag preview projection |
//! | [`doc`] | Columns, items, and the board snapshot |
//! | [`seed`] | Starter board and JSON board loading |
//! | [`config`] | Replay tool configuration |
//! | [`error`] | Error types and codes |

pub mod config;
pub mod doc;
pub mod engine;
pub mod error;
pub mod machine;
pub mod moves;
pub mod overlay;
pub mod payload;
pub mod seed;
