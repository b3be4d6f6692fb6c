use crate::config::StageOpts;
use crate::foundation::error::{BoomerangError, BoomerangResult};
use crate::render::backend::FrameRGBA;
use crate::render::cpu::CpuContext;
use crate::stage::Stage;
use crate::ticker::Ticker;
use calloop::EventLoop;
use std::time::Duration;

/// Real-time playback: a stage ticked by a [`Ticker`] on a `calloop` event loop.
///
/// All work happens on the thread that calls [`LivePlayer::dispatch`]; a tick's update and
/// redraw run inside one timer callback.
pub struct LivePlayer {
    // Declared first so the timer source is removed before the loop goes away.
    ticker: Ticker<'static, Stage<CpuContext>>,
    event_loop: EventLoop<'static, Stage<CpuContext>>,
    stage: Stage<CpuContext>,
}

impl LivePlayer {
    /// Create the stage and event loop and draw the first frame.
    pub fn new(opts: StageOpts) -> BoomerangResult<Self> {
        let mut stage = Stage::cpu(opts)?;
        stage.render()?;
        let event_loop = EventLoop::try_new()
            .map_err(|e| BoomerangError::ticker(format!("create event loop: {e}")))?;
        let ticker = Ticker::new(event_loop.handle());
        Ok(Self {
            ticker,
            event_loop,
            stage,
        })
    }

    /// Start trigger: start the cursor glyph and the ticker.
    ///
    /// Returns `false` if the ticker was already running.
    pub fn start(&mut self) -> BoomerangResult<bool> {
        self.stage.handle_tap();
        self.ticker.start(|stage: &mut Stage<CpuContext>| {
            if let Err(e) = stage.tick() {
                tracing::error!(error = %e, tick = stage.ticks(), "tick failed");
            }
        })
    }

    /// Stop ticking; the canvas keeps its last frame.
    pub fn stop(&mut self) -> bool {
        self.ticker.stop()
    }

    /// `true` while the ticker is scheduled.
    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Wait up to `timeout` for due ticks and run them.
    pub fn dispatch(&mut self, timeout: Option<Duration>) -> BoomerangResult<()> {
        self.event_loop
            .dispatch(timeout, &mut self.stage)
            .map_err(|e| BoomerangError::ticker(format!("dispatch: {e}")))
    }

    /// Start if needed, run until `n` more ticks have happened, then stop.
    pub fn run_for_ticks(&mut self, n: u64) -> BoomerangResult<()> {
        let target = self.stage.ticks() + n;
        self.start()?;
        let delay = self.ticker.delay();
        while self.stage.ticks() < target {
            self.dispatch(Some(delay))?;
        }
        self.stop();
        Ok(())
    }

    /// The stage being driven.
    pub fn stage(&self) -> &Stage<CpuContext> {
        &self.stage
    }

    /// Copy of the canvas as last presented.
    pub fn frame(&self) -> FrameRGBA {
        self.stage.context().frame()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/live.rs"]
mod tests;
