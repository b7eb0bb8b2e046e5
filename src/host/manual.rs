//! Deterministic host driven by a fake clock.
//!
//! Records every outstanding frame request, timer and listener so tests
//! can assert that nothing leaks, and steps the card frame by frame.

use web_time::{Duration, Instant};

use super::{CardHost, FrameToken, ListenerId, TimerToken};
use crate::card::ProfileCard;
use crate::input::{Bounds, ListenerScope};

/// One 60 Hz display frame.
pub const FRAME_60HZ: Duration = Duration::from_nanos(16_666_667);

/// In-memory [`CardHost`] with a manually advanced clock.
#[derive(Debug, Clone)]
pub struct ManualHost {
    origin: Instant,
    elapsed: Duration,
    next_id: u64,
    frames: Vec<FrameToken>,
    timers: Vec<(TimerToken, Duration)>,
    listeners: Vec<(ListenerId, ListenerScope)>,
    bounds: Option<Bounds>,
    frame_requests: u64,
}

impl ManualHost {
    /// Host at time zero with no measured card.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Duration::ZERO,
            next_id: 1,
            frames: Vec::new(),
            timers: Vec::new(),
            listeners: Vec::new(),
            bounds: None,
            frame_requests: 0,
        }
    }

    /// Host whose card is laid out at `bounds`.
    #[must_use]
    pub fn with_bounds(bounds: Bounds) -> Self {
        Self {
            bounds: Some(bounds),
            ..Self::new()
        }
    }

    /// Change (or clear) the measured card box.
    pub fn set_bounds(&mut self, bounds: Option<Bounds>) {
        self.bounds = bounds;
    }

    /// Fake time elapsed since construction.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Outstanding frame requests.
    #[must_use]
    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Outstanding timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Attached listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Whether a listener is attached at `scope`.
    #[must_use]
    pub fn has_listener(&self, scope: ListenerScope) -> bool {
        self.listeners.iter().any(|(_, s)| *s == scope)
    }

    /// Frame requests issued over the host's lifetime.
    #[must_use]
    pub fn total_frame_requests(&self) -> u64 {
        self.frame_requests
    }

    /// Move the clock forward without firing anything.
    pub fn advance_clock(&mut self, by: Duration) {
        self.elapsed += by;
    }

    /// Remove and return timers whose deadline has passed, earliest first.
    pub fn take_due_timers(&mut self) -> Vec<TimerToken> {
        let now = self.elapsed;
        let mut due: Vec<(TimerToken, Duration)> = Vec::new();
        self.timers.retain(|&(token, deadline)| {
            if deadline <= now {
                due.push((token, deadline));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(token, deadline)| (deadline, token));
        due.into_iter().map(|(token, _)| token).collect()
    }

    /// Remove and return every outstanding frame request.
    pub fn take_frames(&mut self) -> Vec<FrameToken> {
        std::mem::take(&mut self.frames)
    }

    fn next_raw(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for ManualHost {
    fn default() -> Self {
        Self::new()
    }
}

impl CardHost for ManualHost {
    fn now(&self) -> Instant {
        self.origin + self.elapsed
    }

    fn request_frame(&mut self) -> FrameToken {
        let token = FrameToken::new(self.next_raw());
        self.frames.push(token);
        self.frame_requests += 1;
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.frames.retain(|&t| t != token);
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerToken {
        let token = TimerToken::new(self.next_raw());
        self.timers.push((token, self.elapsed + delay));
        token
    }

    fn clear_timeout(&mut self, token: TimerToken) {
        self.timers.retain(|&(t, _)| t != token);
    }

    fn attach_pointer_listener(&mut self, scope: ListenerScope) -> ListenerId {
        let id = ListenerId::new(self.next_raw());
        self.listeners.push((id, scope));
        id
    }

    fn detach_pointer_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|&(l, _)| l != id);
    }

    fn card_bounds(&self) -> Option<Bounds> {
        self.bounds
    }
}

/// Advance the clock by `by`, then fire due timers followed by the
/// frame callbacks that were pending when the frame began.
pub fn step(card: &mut ProfileCard<ManualHost>, by: Duration) {
    card.host_mut().advance_clock(by);
    let now = card.host().now();
    for timer in card.host_mut().take_due_timers() {
        card.on_timeout(timer);
    }
    for frame in card.host_mut().take_frames() {
        card.on_frame(frame, now);
    }
}

/// Run whole frames of `frame` length until at least `total` has passed.
pub fn run_for(
    card: &mut ProfileCard<ManualHost>,
    total: Duration,
    frame: Duration,
) {
    if frame.is_zero() {
        return;
    }
    let mut run = Duration::ZERO;
    while run < total {
        step(card, frame);
        run += frame;
    }
}
