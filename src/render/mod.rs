//! Drawing surfaces and the glyph renderer.

/// Frame read-back types.
pub mod backend;
/// The canvas-like drawing trait.
pub mod context;
/// `vello_cpu` raster surface.
pub mod cpu;
/// Glyph geometry and drawing.
pub mod glyph;
/// Op-recording surface for inspection and tests.
pub mod recording;
