use crate::foundation::error::{BoomerangError, BoomerangResult};
use crate::tunables::DELAY;
use calloop::timer::{TimeoutAction, Timer};
use calloop::{LoopHandle, RegistrationToken};
use std::time::Duration;

/// Periodic callback driver on a `calloop` event loop.
///
/// At most one timer series is registered at a time. Each firing re-arms the timer relative to
/// when it fired, so late ticks are not caught up. Dropping the ticker stops it.
pub struct Ticker<'l, D> {
    handle: LoopHandle<'l, D>,
    delay: Duration,
    token: Option<RegistrationToken>,
}

impl<'l, D> Ticker<'l, D> {
    /// Ticker firing every [`DELAY`].
    pub fn new(handle: LoopHandle<'l, D>) -> Self {
        Self::with_delay(handle, DELAY)
    }

    /// Ticker firing every `delay`.
    pub fn with_delay(handle: LoopHandle<'l, D>, delay: Duration) -> Self {
        Self {
            handle,
            delay,
            token: None,
        }
    }

    /// Interval between firings.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// `true` while a timer series is registered.
    pub fn is_running(&self) -> bool {
        self.token.is_some()
    }

    /// Schedule `cb` every [`Ticker::delay`].
    ///
    /// Returns `Ok(false)` and leaves the existing series alone if already running.
    pub fn start<F>(&mut self, mut cb: F) -> BoomerangResult<bool>
    where
        F: FnMut(&mut D) + 'l,
    {
        if self.token.is_some() {
            return Ok(false);
        }
        let delay = self.delay;
        let token = self
            .handle
            .insert_source(Timer::from_duration(delay), move |_deadline, _, data| {
                cb(data);
                TimeoutAction::ToDuration(delay)
            })
            .map_err(|e| BoomerangError::ticker(format!("register timer: {}", e.error)))?;
        self.token = Some(token);
        tracing::info!(delay_ms = delay.as_millis() as u64, "ticker started");
        Ok(true)
    }

    /// Cancel the timer series. Returns `false` if it was not running.
    pub fn stop(&mut self) -> bool {
        match self.token.take() {
            Some(token) => {
                self.handle.remove(token);
                tracing::info!("ticker stopped");
                true
            }
            None => false,
        }
    }
}

impl<D> Drop for Ticker<'_, D> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "../tests/unit/ticker.rs"]
mod tests;
