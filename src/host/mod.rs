//! The boundary between the card and whatever runs it.
//!
//! The card never touches a DOM or an event loop directly. It asks its
//! [`CardHost`] for frame callbacks, one-shot timers and pointer
//! listeners, and the host calls back into
//! [`ProfileCard::on_frame`](crate::ProfileCard::on_frame) and
//! [`ProfileCard::on_timeout`](crate::ProfileCard::on_timeout) with the
//! tokens it handed out.

pub mod manual;

pub use manual::ManualHost;
use web_time::{Duration, Instant};

use crate::input::{Bounds, ListenerScope};

/// Handle for an outstanding per-display-frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameToken(u64);

/// Handle for an outstanding one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

/// Handle for an attached pointer listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

macro_rules! impl_token {
    ($($ty:ident),*) => {$(
        impl $ty {
            /// Wrap a host-assigned id.
            #[must_use]
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// The host-assigned id.
            #[must_use]
            pub const fn raw(self) -> u64 {
                self.0
            }
        }
    )*};
}

impl_token!(FrameToken, TimerToken, ListenerId);

/// Effects the card needs from its environment.
///
/// Every request returns a token; cancelling an unknown or already-fired
/// token must be a silent no-op.
pub trait CardHost {
    /// Current time on the host clock.
    fn now(&self) -> Instant;

    /// Ask for one callback on the next display frame.
    fn request_frame(&mut self) -> FrameToken;

    /// Withdraw a frame request.
    fn cancel_frame(&mut self, token: FrameToken);

    /// Ask for one callback after `delay`.
    fn set_timeout(&mut self, delay: Duration) -> TimerToken;

    /// Withdraw a timer.
    fn clear_timeout(&mut self, token: TimerToken);

    /// Start forwarding pointer moves observed at `scope`.
    fn attach_pointer_listener(&mut self, scope: ListenerScope) -> ListenerId;

    /// Stop forwarding pointer moves for a listener.
    fn detach_pointer_listener(&mut self, id: ListenerId);

    /// The card's measured bounding box, if it has been laid out.
    fn card_bounds(&self) -> Option<Bounds>;
}
