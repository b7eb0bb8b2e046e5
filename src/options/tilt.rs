use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tilt::sanitize_bound;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Tilt", inline)]
#[serde(default)]
/// Bounds and pointer-tracking smoothing for the back-face tilt.
pub struct TiltOptions {
    /// Maximum tilt on either axis, in degrees.
    #[schemars(title = "Max Tilt", range(min = 1.0, max = 45.0), extend("step" = 1.0))]
    pub max_tilt: f32,
    /// Fraction of the remaining distance covered per reference frame.
    #[schemars(title = "Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub smoothing: f32,
    /// Frame length (ms) the smoothing factor is calibrated against.
    #[schemars(skip)]
    pub reference_frame_ms: f32,
    /// Distance (degrees) below which the current tilt snaps to target.
    #[schemars(skip)]
    pub snap_threshold: f32,
    /// Static Z rotation (degrees) of the hovered front face.
    #[schemars(title = "Hover Rotation", range(min = 0.0, max = 15.0), extend("step" = 0.5))]
    pub hover_rotation: f32,
}

impl TiltOptions {
    /// Copy with every value forced into a range the tilt model accepts.
    ///
    /// Loading does not enforce the schema ranges, so a preset may carry a
    /// negative or non-finite bound.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let finite_or = |value: f32, fallback: f32| {
            if value.is_finite() {
                value
            } else {
                fallback
            }
        };
        let defaults = Self::default();
        Self {
            max_tilt: sanitize_bound(self.max_tilt),
            smoothing: finite_or(self.smoothing, defaults.smoothing).clamp(0.0, 1.0),
            reference_frame_ms: finite_or(
                self.reference_frame_ms,
                defaults.reference_frame_ms,
            ),
            snap_threshold: finite_or(self.snap_threshold, defaults.snap_threshold)
                .max(0.0),
            hover_rotation: finite_or(self.hover_rotation, 0.0),
        }
    }
}

impl Default for TiltOptions {
    fn default() -> Self {
        Self {
            max_tilt: 15.0,
            smoothing: 0.15,
            reference_frame_ms: 16.0,
            snap_threshold: 0.1,
            hover_rotation: 4.0,
        }
    }
}
