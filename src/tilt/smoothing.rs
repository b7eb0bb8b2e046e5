//! Frame-rate independent exponential approach toward a target tilt.

use super::{lerp, Tilt};
use crate::options::TiltOptions;

/// Exponential smoother for pointer-tracked tilt.
///
/// Each step covers `min(dt / reference_frame, 1) * rate` of the remaining
/// distance per axis, then snaps to the target once within
/// `snap_threshold` so the approach terminates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltSmoother {
    rate: f32,
    reference_frame_ms: f32,
    snap_threshold: f32,
    max_tilt: f32,
}

impl TiltSmoother {
    /// Smoother configured from tilt options.
    #[must_use]
    pub fn new(opts: &TiltOptions) -> Self {
        Self {
            rate: opts.smoothing.clamp(0.0, 1.0),
            reference_frame_ms: opts.reference_frame_ms,
            snap_threshold: opts.snap_threshold,
            max_tilt: opts.max_tilt,
        }
    }

    /// Interpolation factor for a frame of `dt_ms` milliseconds.
    #[must_use]
    pub fn factor(&self, dt_ms: f32) -> f32 {
        if self.reference_frame_ms <= 0.0 || !dt_ms.is_finite() {
            return self.rate;
        }
        (dt_ms.max(0.0) / self.reference_frame_ms).min(1.0) * self.rate
    }

    /// Advance `current` toward `target` by one frame of `dt_ms`.
    #[must_use]
    pub fn step(&self, current: Tilt, target: Tilt, dt_ms: f32) -> Tilt {
        let factor = self.factor(dt_ms);
        Tilt::new(
            self.step_axis(current.x, target.x, factor),
            self.step_axis(current.y, target.y, factor),
        )
        .clamped(self.max_tilt)
    }

    fn step_axis(&self, current: f32, target: f32, factor: f32) -> f32 {
        let next = lerp(current, target, factor);
        if (next - target).abs() < self.snap_threshold {
            target
        } else {
            next
        }
    }
}

impl Default for TiltSmoother {
    fn default() -> Self {
        Self::new(&TiltOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f32 = 1000.0 / 60.0;

    #[test]
    fn factor_scales_with_frame_time_and_caps() {
        let s = TiltSmoother::default();
        assert!((s.factor(8.0) - 0.075).abs() < 1e-6);
        assert!((s.factor(16.0) - 0.15).abs() < 1e-6);
        assert!((s.factor(100.0) - 0.15).abs() < 1e-6);
        assert_eq!(s.factor(-5.0), 0.0);
    }

    #[test]
    fn single_step_moves_fraction_of_distance() {
        let s = TiltSmoother::default();
        let next = s.step(Tilt::NEUTRAL, Tilt::new(10.0, -10.0), 16.0);
        assert!((next.x - 1.5).abs() < 1e-5);
        assert!((next.y + 1.5).abs() < 1e-5);
    }

    #[test]
    fn snaps_when_within_threshold() {
        let s = TiltSmoother::default();
        let next = s.step(Tilt::new(4.95, 0.0), Tilt::new(5.0, 0.0), 16.0);
        assert_eq!(next, Tilt::new(5.0, 0.0));
    }

    #[test]
    fn converges_within_600ms_without_overshoot() {
        let s = TiltSmoother::default();
        let target = Tilt::new(-12.0, 15.0);
        let mut current = Tilt::NEUTRAL;
        for _ in 0..36 {
            current = s.step(current, target, FRAME_MS);
            assert!(current.y <= target.y && current.x >= target.x);
        }
        assert!(current.max_abs_diff(target) < 0.1);

        // Holding the target keeps the value pinned.
        for _ in 0..30 {
            current = s.step(current, target, FRAME_MS);
        }
        assert_eq!(current, target);
    }

    #[test]
    fn output_is_bounded() {
        let s = TiltSmoother::default();
        let next = s.step(Tilt::new(14.0, 0.0), Tilt::new(90.0, 0.0), 16.0);
        assert!(next.x <= 15.0);
    }
}
