use crate::tunables::SCALE_GAP;

// Absorbs accumulated rounding so a half-cycle always lands on the 50th step.
const COMPLETION_EPSILON: f64 = 1e-9;

/// Result of advancing a [`GlyphState`] by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum StateUpdate {
    /// The glyph is at rest; nothing changed.
    Idle,
    /// Progress moved but the half-cycle is not done.
    Progressing,
    /// Progress reached its target endpoint and the glyph came to rest.
    Completed,
}

/// Progress of a single glyph.
///
/// At rest, `scale == prev_scale` and both are `0.0` or `1.0`. While animating, `scale` moves
/// from `prev_scale` towards `prev_scale + dir` by [`SCALE_GAP`] per update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphState {
    scale: f64,
    dir: i8,
    prev_scale: f64,
}

impl Default for GlyphState {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphState {
    /// A glyph resting at `0.0`.
    pub fn new() -> Self {
        Self {
            scale: 0.0,
            dir: 0,
            prev_scale: 0.0,
        }
    }

    /// Current progress.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// `-1`, `0` (idle) or `+1`.
    pub fn dir(&self) -> i8 {
        self.dir
    }

    /// Last settled progress.
    pub fn prev_scale(&self) -> f64 {
        self.prev_scale
    }

    /// `true` when no half-cycle is in flight.
    pub fn is_idle(&self) -> bool {
        self.dir == 0
    }

    /// Advance by one step in the current direction.
    pub fn update(&mut self) -> StateUpdate {
        if self.dir == 0 {
            return StateUpdate::Idle;
        }
        let dir = f64::from(self.dir);
        self.scale += SCALE_GAP * dir;
        if (self.scale - self.prev_scale).abs() >= 1.0 - COMPLETION_EPSILON {
            self.scale = self.prev_scale + dir;
            self.dir = 0;
            self.prev_scale = self.scale;
            return StateUpdate::Completed;
        }
        StateUpdate::Progressing
    }

    /// Begin a half-cycle away from the settled endpoint.
    ///
    /// Returns `false` without side effects when a half-cycle is already running.
    pub fn start_updating(&mut self) -> bool {
        if self.dir != 0 {
            return false;
        }
        self.dir = if self.prev_scale == 0.0 { 1 } else { -1 };
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/state.rs"]
mod tests;
