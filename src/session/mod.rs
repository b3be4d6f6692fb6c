//! Drivers that turn a stage into frames.

/// Real-time playback on a `calloop` event loop.
pub mod live;
/// Deterministic tick-indexed rendering.
pub mod offline;
