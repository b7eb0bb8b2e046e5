//! The card instance: sole owner of all orientation and tilt state.
//!
//! A [`ProfileCard`] is mounted onto a [`CardHost`], reacts to
//! [`CardEvent`](crate::input::CardEvent)s between frames, and recomputes
//! its tilt once per frame while the back face is settled. Everything is
//! single-threaded: listener callbacks and frame ticks never overlap, and
//! state changed by a listener is picked up at the start of the next tick.
//!
//! Method groups live in submodules:
//!
//! - `events` - activation, hover and pointer handling
//! - `lifecycle` - loop and wide-scope listener start/stop, unmount
//! - `tick` - the per-frame recomputation

mod events;
mod lifecycle;
mod tick;

#[cfg(test)]
mod tests;

use glam::Vec2;

use crate::compositor::{self, CardView, Presentation};
use crate::flip::{Face, FlipPhase, FlipState};
use crate::host::{CardHost, ListenerId};
use crate::input::{DeviceProfile, PointerBridge, Source};
use crate::options::Options;
use crate::scheduler::FrameScheduler;
use crate::tilt::{IdleTrajectory, Tilt, TiltSmoother, HIGHLIGHT_CENTER};

/// Interactive profile card driven by a host.
pub struct ProfileCard<H: CardHost> {
    host: H,
    options: Options,
    device: DeviceProfile,
    mounted: bool,

    flip: FlipState,
    hovered: bool,

    tilt: Tilt,
    target: Tilt,
    highlight: Vec2,
    /// Idle time in seconds; advances only while the idle source drives.
    auto_clock: f32,
    source: Source,

    scheduler: FrameScheduler,
    viewport_listener: Option<ListenerId>,

    trajectory: IdleTrajectory,
    smoother: TiltSmoother,
    bridge: PointerBridge,
}

impl<H: CardHost> ProfileCard<H> {
    /// Mount a card on `host`.
    ///
    /// The card starts on `options.flip.start_face` (the back face by
    /// default) with neutral tilt, and immediately starts its frame loop
    /// and viewport listener if that face needs them. Out-of-range tilt
    /// options are repaired with [`TiltOptions::sanitized`](crate::options::TiltOptions::sanitized).
    pub fn mount(host: H, device: DeviceProfile, mut options: Options) -> Self {
        let tilt = options.tilt.sanitized();
        if tilt != options.tilt {
            log::warn!("tilt options out of range, using {tilt:?}");
        }
        options.tilt = tilt;
        let mut card = Self {
            host,
            device,
            mounted: true,
            flip: FlipState::new(options.flip.start_face),
            hovered: false,
            tilt: Tilt::NEUTRAL,
            target: Tilt::NEUTRAL,
            highlight: HIGHLIGHT_CENTER,
            auto_clock: 0.0,
            source: Source::None,
            scheduler: FrameScheduler::new(),
            viewport_listener: None,
            trajectory: IdleTrajectory::new(&options.tilt, &options.idle),
            smoother: TiltSmoother::new(&options.tilt),
            bridge: PointerBridge::new(options.tilt.max_tilt),
            options,
        };
        log::debug!(
            "card mounted on {:?} face (touch: {})",
            card.flip.face(),
            card.device.is_touch_capable
        );
        card.sync_activity();
        card
    }

    /// Mount with default options.
    pub fn mount_default(host: H, device: DeviceProfile) -> Self {
        Self::mount(host, device, Options::default())
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// The host the card is mounted on.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Device profile fixed at mount.
    #[must_use]
    pub fn device(&self) -> DeviceProfile {
        self.device
    }

    /// Whether the card is still mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Target face.
    #[must_use]
    pub fn face(&self) -> Face {
        self.flip.face()
    }

    /// Orientation phase, including in-flight flips.
    #[must_use]
    pub fn phase(&self) -> FlipPhase {
        self.flip.phase()
    }

    /// Whether the flip transition lock is held.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.flip.is_locked()
    }

    /// Whether the pointer is over the card.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Current rendered tilt.
    #[must_use]
    pub fn tilt(&self) -> Tilt {
        self.tilt
    }

    /// Tilt the pointer path is approaching.
    #[must_use]
    pub fn target_tilt(&self) -> Tilt {
        self.target
    }

    /// Normalized highlight position.
    #[must_use]
    pub fn highlight(&self) -> Vec2 {
        self.highlight
    }

    /// Accumulated idle time in seconds.
    #[must_use]
    pub fn auto_clock(&self) -> f32 {
        self.auto_clock
    }

    /// Source chosen by the most recent tick (or forced by a flip).
    #[must_use]
    pub fn source(&self) -> Source {
        self.source
    }

    /// Whether a frame request is outstanding.
    #[must_use]
    pub fn is_loop_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Whether the viewport-wide pointer listener is attached.
    #[must_use]
    pub fn has_viewport_listener(&self) -> bool {
        self.viewport_listener.is_some()
    }

    /// Presentation parameters for the current state.
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        compositor::compose(&CardView {
            face: self.flip.face(),
            locked: self.flip.is_locked(),
            hovered: self.hovered,
            tilt: self.tilt,
            highlight: self.highlight,
            hover_rotation: self.options.tilt.hover_rotation,
        })
    }

    /// Change the reduced-motion preference; applies from the next tick.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if self.options.motion.reduced_motion != reduced {
            log::debug!("reduced motion set to {reduced}");
        }
        self.options.motion.reduced_motion = reduced;
    }

    /// Force tilt, target, highlight and idle clock back to neutral.
    fn neutralize(&mut self) {
        self.highlight = HIGHLIGHT_CENTER;
        self.tilt = Tilt::NEUTRAL;
        self.target = Tilt::NEUTRAL;
        self.auto_clock = 0.0;
        self.source = Source::None;
    }
}

impl<H: CardHost> std::fmt::Debug for ProfileCard<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileCard")
            .field("mounted", &self.mounted)
            .field("phase", &self.flip.phase())
            .field("hovered", &self.hovered)
            .field("source", &self.source)
            .field("tilt", &self.tilt)
            .field("target", &self.target)
            .field("loop_running", &self.scheduler.is_running())
            .finish_non_exhaustive()
    }
}
