//! Tilt model: bounded two-axis orientation, the autonomous idle
//! trajectory, and exponential pointer smoothing.
//!
//! Everything here is pure math over [`Tilt`] values; the card decides
//! which path runs on a given frame.

mod idle;
mod smoothing;

pub use idle::IdleTrajectory;
pub use smoothing::TiltSmoother;

use glam::Vec2;

/// Centre of the normalized `[0, 100]` highlight space.
pub const HIGHLIGHT_CENTER: Vec2 = Vec2::new(50.0, 50.0);

/// Two rotation angles in degrees.
///
/// `x` is the rotation about the horizontal axis (driven by vertical
/// pointer motion), `y` the rotation about the vertical axis (driven by
/// horizontal pointer motion).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    /// Rotation about the X axis, in degrees.
    pub x: f32,
    /// Rotation about the Y axis, in degrees.
    pub y: f32,
}

impl Tilt {
    /// Neutral orientation.
    pub const NEUTRAL: Self = Self { x: 0.0, y: 0.0 };

    /// Tilt from raw angles, without clamping.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clamp both axes to `[-|max_tilt|, |max_tilt|]`.
    ///
    /// NaN components collapse to zero so a bad sample can never escape
    /// the bounds. A non-finite bound clamps to zero.
    #[must_use]
    pub fn clamped(self, max_tilt: f32) -> Self {
        Self {
            x: clamp_axis(self.x, max_tilt),
            y: clamp_axis(self.y, max_tilt),
        }
    }

    /// Whether both axes are exactly zero.
    #[must_use]
    pub fn is_neutral(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Largest absolute difference between the two tilts on either axis.
    #[must_use]
    pub fn max_abs_diff(self, other: Self) -> f32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Sum of absolute angles, used for highlight intensity.
    #[must_use]
    pub fn magnitude_l1(self) -> f32 {
        self.x.abs() + self.y.abs()
    }
}

#[inline]
fn clamp_axis(value: f32, max_tilt: f32) -> f32 {
    let bound = sanitize_bound(max_tilt);
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-bound, bound)
    }
}

/// A tilt bound usable as a clamp range: finite and non-negative.
#[inline]
#[must_use]
pub fn sanitize_bound(max_tilt: f32) -> f32 {
    if max_tilt.is_finite() {
        max_tilt.abs()
    } else {
        0.0
    }
}

/// Linear interpolation between two scalars.
#[inline]
#[must_use]
pub fn lerp(start: f32, end: f32, factor: f32) -> f32 {
    start + (end - start) * factor
}

/// Clamp a highlight position into `[0, 100]` on both axes.
#[inline]
#[must_use]
pub fn clamp_percent(position: Vec2) -> Vec2 {
    position.clamp(Vec2::ZERO, Vec2::splat(100.0))
}
