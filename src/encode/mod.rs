//! Frame sinks.
//!
//! Sinks consume rendered frames in tick order and are used by
//! `OfflineSession::render_range`.

/// PNG image-sequence output.
pub mod png;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
