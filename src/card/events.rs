//! Event handling for ProfileCard.

use glam::Vec2;

use super::ProfileCard;
use crate::flip::Face;
use crate::host::{CardHost, TimerToken};
use crate::input::{CardEvent, ListenerScope};
use crate::tilt::{Tilt, HIGHLIGHT_CENTER};

impl<H: CardHost> ProfileCard<H> {
    /// Dispatch one inbound event. Unmounted cards ignore everything.
    pub fn handle_event(&mut self, event: CardEvent) {
        if !self.mounted {
            return;
        }
        match event {
            CardEvent::Activate => self.activate(),
            CardEvent::PointerEntered => self.hovered = true,
            CardEvent::PointerLeft => self.pointer_left(),
            CardEvent::PointerMoved { x, y, scope } => {
                self.pointer_moved(Vec2::new(x, y), scope);
            }
        }
    }

    /// Click or tap: toggle the face and hold the transition lock for the
    /// flip duration, measured from this activation.
    ///
    /// Any pending lock-clear from an earlier activation is cancelled, so
    /// the lock clears once, after the most recent activation.
    pub fn activate(&mut self) {
        if !self.mounted {
            return;
        }
        let timer = self.host.set_timeout(self.options.flip_duration());
        if let Some(superseded) = self.flip.activate(timer) {
            self.host.clear_timeout(superseded);
        }
        self.neutralize();
        self.sync_activity();
        log::debug!(
            "flip #{} toward {:?} face",
            self.flip.activations(),
            self.flip.face()
        );
    }

    /// Timer callback from the host.
    ///
    /// Releases the flip lock when `token` is the pending lock-clear timer;
    /// stale timers are ignored.
    pub fn on_timeout(&mut self, token: TimerToken) {
        if !self.mounted {
            log::trace!("timer {} after unmount", token.raw());
            return;
        }
        if self.flip.complete(token) {
            log::debug!("flip settled on {:?} face", self.flip.face());
            self.sync_activity();
        } else {
            log::trace!("ignoring stale timer {}", token.raw());
        }
    }

    fn pointer_left(&mut self) {
        self.hovered = false;
        if self.flip.face() == Face::Front {
            self.highlight = HIGHLIGHT_CENTER;
            self.tilt = Tilt::NEUTRAL;
            self.target = Tilt::NEUTRAL;
        }
    }

    fn pointer_moved(&mut self, position: Vec2, scope: ListenerScope) {
        match scope {
            ListenerScope::Surface => self.surface_moved(position),
            ListenerScope::Viewport => self.viewport_moved(position),
        }
    }

    /// Front-face highlight: a direct overwrite from the card's own box,
    /// no interpolation and no frame loop.
    fn surface_moved(&mut self, position: Vec2) {
        if self.flip.face() != Face::Front || !self.hovered {
            return;
        }
        self.highlight = match self.host.card_bounds() {
            Some(bounds) => self.bridge.highlight(position, &bounds),
            None => HIGHLIGHT_CENTER,
        };
    }

    /// Back-face tracking: only while the viewport listener is attached,
    /// which already implies back face, no lock, and a pointer device.
    fn viewport_moved(&mut self, position: Vec2) {
        if self.viewport_listener.is_none() {
            return;
        }
        let signal = self.bridge.map(position, self.host.card_bounds());
        self.target = signal.target_tilt;
        self.highlight = signal.highlight;
    }
}
