//! Per-frame recomputation for ProfileCard.

use web_time::{Duration, Instant};

use super::ProfileCard;
use crate::host::{CardHost, FrameToken};
use crate::input::{classify, ClassifierInput, Source};

impl<H: CardHost> ProfileCard<H> {
    /// Frame callback from the host.
    ///
    /// Stale tokens (from a cancelled request) are ignored. Otherwise the
    /// card ticks once with the elapsed time since the previous tick and,
    /// if the loop is still needed, requests the next frame.
    pub fn on_frame(&mut self, token: FrameToken, now: Instant) {
        if !self.mounted {
            log::trace!("frame {} after unmount", token.raw());
            return;
        }
        let Some(dt) = self.scheduler.accept(token, now) else {
            return;
        };
        self.tick(dt);
        if self.needs_loop() {
            self.scheduler.request_next(&mut self.host);
        }
    }

    /// Classify, then move the tilt, with one delta-time sample.
    pub(crate) fn tick(&mut self, dt: Duration) {
        self.source = classify(&ClassifierInput {
            face: self.flip.face(),
            locked: self.flip.is_locked(),
            device: self.device,
            hovered: self.hovered,
            reduced_motion: self.options.motion.reduced_motion,
        });

        match self.source {
            Source::None => self.neutralize(),
            Source::Idle => {
                self.auto_clock += dt.as_secs_f32();
                self.tilt = self.trajectory.sample(self.auto_clock);
                self.highlight = self.trajectory.highlight_for(self.tilt);
            }
            Source::Pointer => {
                let dt_ms = dt.as_secs_f32() * 1000.0;
                self.tilt = self.smoother.step(self.tilt, self.target, dt_ms);
            }
        }
    }
}
