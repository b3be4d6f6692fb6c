//! The sequenced animation state machine.

/// Cursor and ping-pong traversal over the glyph states.
pub mod chain;
/// Per-glyph progress.
pub mod state;
