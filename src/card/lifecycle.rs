//! Loop and listener management for ProfileCard.

use super::ProfileCard;
use crate::flip::Face;
use crate::host::CardHost;
use crate::input::ListenerScope;

impl<H: CardHost> ProfileCard<H> {
    /// Whether the per-frame loop should be running: mounted, back face
    /// up, and no flip in flight.
    pub(crate) fn needs_loop(&self) -> bool {
        self.mounted && self.flip.face() == Face::Back && !self.flip.is_locked()
    }

    /// Whether viewport-wide pointer tracking should be attached. Touch
    /// devices never track, so they never attach.
    pub(crate) fn needs_viewport_listener(&self) -> bool {
        self.needs_loop() && !self.device.is_touch_capable
    }

    /// Bring the frame loop and viewport listener in line with the
    /// current state. Safe to call after any state change.
    pub(crate) fn sync_activity(&mut self) {
        if self.needs_loop() {
            self.scheduler.start(&mut self.host);
        } else {
            self.scheduler.stop(&mut self.host);
        }

        match (self.needs_viewport_listener(), self.viewport_listener) {
            (true, None) => {
                let id = self
                    .host
                    .attach_pointer_listener(ListenerScope::Viewport);
                self.viewport_listener = Some(id);
                log::debug!("viewport pointer listener attached");
            }
            (false, Some(id)) => {
                self.host.detach_pointer_listener(id);
                self.viewport_listener = None;
                log::debug!("viewport pointer listener detached");
            }
            _ => {}
        }
    }

    /// Tear the card down: cancel the frame loop, the pending lock timer
    /// and the viewport listener. Later events and callbacks are no-ops.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        if let Some(timer) = self.flip.take_lock_timer() {
            self.host.clear_timeout(timer);
        }
        self.sync_activity();
        log::debug!("card unmounted");
    }
}
