use crate::animation::chain::ChainUpdate;
use crate::config::StageOpts;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, TickIndex, TickRange};
use crate::foundation::error::BoomerangResult;
use crate::render::backend::FrameRGBA;
use crate::render::cpu::CpuContext;
use crate::stage::Stage;
use crate::tunables::DELAY;

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames pushed to the sink.
    pub frames: u64,
    /// Glyph half-cycles completed while advancing through the range.
    pub completions: u64,
}

/// Deterministic, clock-free rendering of the animation.
///
/// The session starts the sweep on construction (as if tapped on load); the frame for
/// [`TickIndex`] `n` is the canvas after `n` ticks. Seeking backwards replays from tick 0.
#[derive(Debug)]
pub struct OfflineSession {
    opts: StageOpts,
    stage: Stage<CpuContext>,
    completions: u64,
}

impl OfflineSession {
    /// Build a session and render tick 0.
    pub fn new(opts: StageOpts) -> BoomerangResult<Self> {
        Ok(Self {
            opts,
            stage: Self::fresh_stage(opts)?,
            completions: 0,
        })
    }

    fn fresh_stage(opts: StageOpts) -> BoomerangResult<Stage<CpuContext>> {
        let mut stage = Stage::cpu(opts)?;
        stage.handle_tap();
        stage.render()?;
        Ok(stage)
    }

    /// Frame rate of the tick clock.
    pub fn fps(&self) -> BoomerangResult<Fps> {
        Fps::from_interval(DELAY)
    }

    /// Current tick.
    pub fn tick(&self) -> TickIndex {
        TickIndex(self.stage.ticks())
    }

    /// The underlying stage.
    pub fn stage(&self) -> &Stage<CpuContext> {
        &self.stage
    }

    /// Completions seen since tick 0.
    pub fn completions(&self) -> u64 {
        self.completions
    }

    /// Advance (or replay) until the stage sits at `target`.
    pub fn seek(&mut self, target: TickIndex) -> BoomerangResult<()> {
        if target.0 < self.stage.ticks() {
            self.stage = Self::fresh_stage(self.opts)?;
            self.completions = 0;
        }
        while self.stage.ticks() < target.0 {
            if let ChainUpdate::Completed(_) = self.stage.tick()? {
                self.completions += 1;
            }
        }
        Ok(())
    }

    /// Render the frame at `t`.
    pub fn render_tick(&mut self, t: TickIndex) -> BoomerangResult<FrameRGBA> {
        self.seek(t)?;
        Ok(self.stage.context().frame())
    }

    /// Render every tick of `range` into `sink`.
    #[tracing::instrument(
        skip(self, sink),
        fields(start = range.start.0, ticks = range.len_ticks())
    )]
    pub fn render_range(
        &mut self,
        range: TickRange,
        sink: &mut dyn FrameSink,
    ) -> BoomerangResult<RenderStats> {
        let canvas = self.opts.canvas;
        sink.begin(SinkConfig {
            width: canvas.width,
            height: canvas.height,
            fps: self.fps()?,
        })?;

        self.seek(range.start)?;
        let completions_before = self.completions;
        let mut frames = 0u64;
        for t in range.start.0..range.end.0 {
            self.seek(TickIndex(t))?;
            sink.push_frame(TickIndex(t), &self.stage.context().frame())?;
            frames += 1;
        }
        sink.end()?;

        let stats = RenderStats {
            frames,
            completions: self.completions - completions_before,
        };
        tracing::info!(frames = stats.frames, completions = stats.completions, "range rendered");
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/offline.rs"]
mod tests;
