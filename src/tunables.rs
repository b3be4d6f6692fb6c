//! Compile-time animation and drawing constants.

use std::time::Duration;

/// Number of glyphs stacked on the canvas.
pub const GLYPH_COUNT: usize = 5;

/// Progress added to the active glyph per tick (50 ticks per half-cycle).
pub const SCALE_GAP: f64 = 0.02;

/// Interval between ticks.
pub const DELAY: Duration = Duration::from_millis(20);

/// `min(W, H) / STROKE_FACTOR` is the stroke width.
pub const STROKE_FACTOR: f64 = 90.0;

/// Row height divided by `SIZE_FACTOR` is the arc radius.
pub const SIZE_FACTOR: f64 = 2.9;

/// Glyph stroke color.
pub const FORE_COLOR: &str = "#FF5722";

/// Background fill color.
pub const BACK_COLOR: &str = "#BDBDBD";
