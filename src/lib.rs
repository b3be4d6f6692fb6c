//! Boomerang half-circles: a stack of glyphs that swing out and back one at a time.
//!
//! Each glyph is two half-arcs. A glyph's progress runs from `0` to `1` (or back) over one
//! half-cycle, during which each arc translates sideways and spins through a half-sine
//! envelope. A [`GlyphChain`] runs one glyph at a time, walking head to tail and then back.
//!
//! - Build a [`Stage`] over a [`Context2D`] surface ([`CpuContext`] rasterizes with
//!   `vello_cpu`, [`RecordingContext`] records draw ops)
//! - Drive it deterministically with an [`OfflineSession`], or in real time with a
//!   [`LivePlayer`] whose [`Ticker`] runs on a `calloop` event loop
//! - Stream frames into a [`FrameSink`] such as [`PngSequenceSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Glyph progress and the chain state machine.
pub mod animation;
/// Stage options.
pub mod config;
/// Frame sinks.
pub mod encode;
/// Drawing surfaces and the glyph renderer.
pub mod render;
/// Offline and live drivers.
pub mod session;
/// The stage: surface, chain and per-tick work.
pub mod stage;
/// Periodic driver.
pub mod ticker;
/// Compile-time constants.
pub mod tunables;

pub use crate::foundation::color::{Palette, parse_hex};
pub use crate::foundation::core::{
    Affine, Canvas, Fps, Point, Rect, Rgba8Premul, TickIndex, TickRange, Vec2,
};
pub use crate::foundation::error::{BoomerangError, BoomerangResult};
pub use crate::foundation::math::{divide_scale, max_scale, sinify};

pub use crate::animation::chain::{
    ChainSnapshot, ChainUpdate, Completion, GlyphChain, GlyphSnapshot, Traversal,
};
pub use crate::animation::state::{GlyphState, StateUpdate};
pub use crate::config::StageOpts;
pub use crate::encode::png::{PngSequenceSink, write_png};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::render::backend::FrameRGBA;
pub use crate::render::context::{Context2D, LineCap};
pub use crate::render::cpu::CpuContext;
pub use crate::render::glyph::{GlyphLayout, draw_glyph};
pub use crate::render::recording::{DrawOp, RecordingContext};
pub use crate::session::live::LivePlayer;
pub use crate::session::offline::{OfflineSession, RenderStats};
pub use crate::stage::Stage;
pub use crate::ticker::Ticker;
