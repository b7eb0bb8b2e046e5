use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Idle Motion", inline)]
#[serde(default)]
/// Shape of the autonomous figure-eight trajectory.
pub struct IdleOptions {
    /// Angular speed of the X-axis sinusoid (rad/s).
    #[schemars(title = "Speed X", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub speed_x: f32,
    /// Angular speed of the Y-axis sinusoid (rad/s).
    #[schemars(title = "Speed Y", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub speed_y: f32,
    /// X amplitude as a fraction of max tilt.
    #[schemars(title = "Amplitude X", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub amplitude_x: f32,
    /// Y amplitude as a fraction of max tilt.
    #[schemars(title = "Amplitude Y", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub amplitude_y: f32,
    /// How far (percent) the derived highlight wanders from centre at
    /// full tilt.
    #[schemars(skip)]
    pub highlight_range: f32,
}

impl Default for IdleOptions {
    fn default() -> Self {
        Self {
            speed_x: 1.2,
            speed_y: 0.8,
            amplitude_x: 0.6,
            amplitude_y: 0.8,
            highlight_range: 20.0,
        }
    }
}
