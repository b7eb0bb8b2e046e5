//! Frame scheduler: owns the single outstanding frame request and the
//! timestamp of the previous tick.
//!
//! At most one frame request is ever pending. Starting an already running
//! scheduler and stopping an idle one are both no-ops, so the card can
//! call [`FrameScheduler::start`] and [`FrameScheduler::stop`] from every
//! state change without double-scheduling or leaking requests.

use web_time::{Duration, Instant};

use crate::host::{CardHost, FrameToken};

/// Per-display-frame loop with cancellation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameScheduler {
    pending: Option<FrameToken>,
    last_tick: Option<Instant>,
}

impl FrameScheduler {
    /// Idle scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the loop is live (a frame request is outstanding).
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// The outstanding frame request, if any.
    #[must_use]
    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    /// Begin the loop: stamp the start time and request the first frame.
    pub fn start<H: CardHost>(&mut self, host: &mut H) {
        if self.pending.is_some() {
            return;
        }
        self.last_tick = Some(host.now());
        self.pending = Some(host.request_frame());
        log::debug!("frame loop started");
    }

    /// Cancel the outstanding request and forget the previous tick.
    pub fn stop<H: CardHost>(&mut self, host: &mut H) {
        if let Some(token) = self.pending.take() {
            host.cancel_frame(token);
            log::debug!("frame loop stopped");
        }
        self.last_tick = None;
    }

    /// Consume a delivered frame.
    ///
    /// Returns the time since the previous tick when `token` is the
    /// outstanding request, `None` for stale or foreign tokens. A
    /// matching request is consumed; call
    /// [`request_next`](Self::request_next) to keep the loop alive.
    pub fn accept(&mut self, token: FrameToken, now: Instant) -> Option<Duration> {
        if self.pending != Some(token) {
            log::trace!("ignoring stale frame {}", token.raw());
            return None;
        }
        self.pending = None;
        let dt = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_tick = Some(now);
        Some(dt)
    }

    /// Request the next frame after a tick.
    ///
    /// No-op when a request is already outstanding.
    pub fn request_next<H: CardHost>(&mut self, host: &mut H) {
        if self.pending.is_none() {
            self.pending = Some(host.request_frame());
        }
    }
}
