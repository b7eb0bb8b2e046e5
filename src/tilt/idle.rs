//! Autonomous figure-eight trajectory for the unattended back face.

use glam::Vec2;

use super::{clamp_percent, Tilt, HIGHLIGHT_CENTER};
use crate::options::{IdleOptions, TiltOptions};

/// Deterministic sine trajectory sampled by accumulated idle time.
///
/// The output is written straight to the current tilt: the curve is
/// already smooth, and smoothing it again would blur the figure-eight.
#[derive(Debug, Clone, PartialEq)]
pub struct IdleTrajectory {
    max_tilt: f32,
    speed_x: f32,
    speed_y: f32,
    amplitude_x: f32,
    amplitude_y: f32,
    highlight_range: f32,
}

impl IdleTrajectory {
    /// Build a trajectory from tilt bounds and idle shape options.
    #[must_use]
    pub fn new(tilt: &TiltOptions, idle: &IdleOptions) -> Self {
        Self {
            max_tilt: tilt.max_tilt,
            speed_x: idle.speed_x,
            speed_y: idle.speed_y,
            amplitude_x: idle.amplitude_x,
            amplitude_y: idle.amplitude_y,
            highlight_range: idle.highlight_range,
        }
    }

    /// Tilt at `t` seconds of idle time.
    #[must_use]
    pub fn sample(&self, t: f32) -> Tilt {
        Tilt::new(
            (t * self.speed_x).sin() * self.max_tilt * self.amplitude_x,
            (t * self.speed_y).sin() * self.max_tilt * self.amplitude_y,
        )
        .clamped(self.max_tilt)
    }

    /// Highlight position implied by an idle tilt.
    ///
    /// Y rotation moves the light horizontally and X rotation vertically,
    /// up to `highlight_range` percent away from centre.
    #[must_use]
    pub fn highlight_for(&self, tilt: Tilt) -> Vec2 {
        if self.max_tilt.is_nan() || self.max_tilt <= 0.0 {
            return HIGHLIGHT_CENTER;
        }
        let offset = Vec2::new(tilt.y, tilt.x) / self.max_tilt
            * self.highlight_range;
        clamp_percent(HIGHLIGHT_CENTER + offset)
    }

    /// Period of the X-axis sinusoid in seconds.
    #[must_use]
    pub fn period_x(&self) -> f32 {
        std::f32::consts::TAU / self.speed_x
    }

    /// Period of the Y-axis sinusoid in seconds.
    #[must_use]
    pub fn period_y(&self) -> f32 {
        std::f32::consts::TAU / self.speed_y
    }
}

impl Default for IdleTrajectory {
    fn default() -> Self {
        Self::new(&TiltOptions::default(), &IdleOptions::default())
    }
}
