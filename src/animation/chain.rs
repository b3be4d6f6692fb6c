use crate::animation::state::{GlyphState, StateUpdate};
use crate::render::context::Context2D;
use crate::render::glyph::{GlyphLayout, draw_glyph};
use crate::tunables::GLYPH_COUNT;

/// Which way the cursor walks through the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Traversal {
    /// Towards the tail (`+1`).
    Forward,
    /// Towards the head (`-1`).
    Backward,
}

impl Traversal {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// A glyph finished its half-cycle during [`GlyphChain::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Completion {
    /// Index of the glyph that completed.
    pub glyph: usize,
    /// Cursor after the completion was handled.
    pub cursor: usize,
    /// Traversal direction after the completion was handled.
    pub direction: Traversal,
    /// `true` when the completed glyph sat at an end of the chain and the direction flipped.
    pub reversed: bool,
}

/// Result of one chain update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum ChainUpdate {
    /// The cursor glyph is at rest.
    Idle,
    /// The cursor glyph moved.
    Progressing,
    /// The cursor glyph completed and the cursor was moved or the direction flipped.
    Completed(Completion),
}

/// Serializable copy of one glyph's progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GlyphSnapshot {
    /// Position in the chain.
    pub index: usize,
    /// Current progress.
    pub scale: f64,
    /// `-1`, `0` or `+1`.
    pub dir: i8,
    /// Last settled progress.
    pub prev_scale: f64,
}

/// Serializable copy of the whole chain.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ChainSnapshot {
    /// Active glyph index.
    pub cursor: usize,
    /// Traversal direction.
    pub direction: Traversal,
    /// Every glyph, head to tail.
    pub glyphs: Vec<GlyphSnapshot>,
}

/// Ordered glyph states with a cursor that ping-pongs between head and tail.
///
/// Only the glyph under the cursor is ever updated. When it completes, the cursor steps to
/// the neighbor in the current direction; at either end the direction flips instead and the
/// cursor stays put, so the end glyph is the next one to run (backwards).
#[derive(Clone, Debug)]
pub struct GlyphChain {
    states: Vec<GlyphState>,
    cursor: usize,
    direction: Traversal,
}

impl Default for GlyphChain {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphChain {
    /// [`GLYPH_COUNT`] resting glyphs, cursor at the head, walking forward.
    pub fn new() -> Self {
        Self {
            states: vec![GlyphState::new(); GLYPH_COUNT],
            cursor: 0,
            direction: Traversal::Forward,
        }
    }

    /// Number of glyphs.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`; a chain holds [`GLYPH_COUNT`] glyphs.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Index of the active glyph.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current traversal direction.
    pub fn direction(&self) -> Traversal {
        self.direction
    }

    /// State of glyph `i`, if in range.
    pub fn state(&self, i: usize) -> Option<&GlyphState> {
        self.states.get(i)
    }

    /// All states, head to tail.
    pub fn states(&self) -> &[GlyphState] {
        &self.states
    }

    /// Previous neighbor of `i`; `None` at the head.
    pub fn prev(&self, i: usize) -> Option<usize> {
        if i == 0 || i >= self.states.len() {
            None
        } else {
            Some(i - 1)
        }
    }

    /// Next neighbor of `i`; `None` at the tail.
    pub fn next(&self, i: usize) -> Option<usize> {
        if i + 1 < self.states.len() {
            Some(i + 1)
        } else {
            None
        }
    }

    /// Draw every glyph, head to tail.
    pub fn draw(&self, ctx: &mut dyn Context2D, layout: &GlyphLayout) {
        for (i, st) in self.states.iter().enumerate() {
            draw_glyph(ctx, layout, i, st.scale());
        }
    }

    /// Advance the glyph under the cursor by one tick.
    pub fn update(&mut self) -> ChainUpdate {
        let glyph = self.cursor;
        match self.states[glyph].update() {
            StateUpdate::Idle => ChainUpdate::Idle,
            StateUpdate::Progressing => ChainUpdate::Progressing,
            StateUpdate::Completed => {
                let neighbor = match self.direction {
                    Traversal::Forward => self.next(glyph),
                    Traversal::Backward => self.prev(glyph),
                };
                let reversed = match neighbor {
                    Some(n) => {
                        self.cursor = n;
                        false
                    }
                    None => {
                        self.direction = self.direction.flipped();
                        true
                    }
                };
                tracing::debug!(
                    glyph,
                    cursor = self.cursor,
                    reversed,
                    scale = self.states[glyph].scale(),
                    "glyph half-cycle complete"
                );
                ChainUpdate::Completed(Completion {
                    glyph,
                    cursor: self.cursor,
                    direction: self.direction,
                    reversed,
                })
            }
        }
    }

    /// Start the glyph under the cursor; `false` if it is already running.
    pub fn start_updating(&mut self) -> bool {
        self.states[self.cursor].start_updating()
    }

    /// Copy the chain state for inspection.
    pub fn snapshot(&self) -> ChainSnapshot {
        ChainSnapshot {
            cursor: self.cursor,
            direction: self.direction,
            glyphs: self
                .states
                .iter()
                .enumerate()
                .map(|(index, st)| GlyphSnapshot {
                    index,
                    scale: st.scale(),
                    dir: st.dir(),
                    prev_scale: st.prev_scale(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/chain.rs"]
mod tests;
