use crate::flip::Face;
use crate::input::DeviceProfile;

/// The currently authoritative driver of the back-face tilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// Tilt is forced neutral.
    None,
    /// Autonomous idle trajectory.
    Idle,
    /// Smoothed pointer tracking.
    Pointer,
}

/// Everything the classifier looks at, sampled at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierInput {
    /// Target face.
    pub face: Face,
    /// Whether the flip transition lock is held.
    pub locked: bool,
    /// Device capabilities.
    pub device: DeviceProfile,
    /// Whether the pointer is over the card.
    pub hovered: bool,
    /// Reduced-motion preference: disables the idle trajectory.
    pub reduced_motion: bool,
}

/// Pick the motion source for this frame.
///
/// The lock and the front face always win with [`Source::None`]. On the
/// back face a touch device, or a pointer device without hover, runs the
/// idle trajectory; a hovering pointer takes over tracking.
#[must_use]
pub fn classify(input: &ClassifierInput) -> Source {
    if input.locked || input.face == Face::Front {
        return Source::None;
    }
    if input.device.is_touch_capable || !input.hovered {
        if input.reduced_motion {
            Source::None
        } else {
            Source::Idle
        }
    } else {
        Source::Pointer
    }
}
