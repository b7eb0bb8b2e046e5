use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::flip::Face;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Flip", inline)]
#[serde(default)]
/// Flip transition timing and the face shown at mount.
pub struct FlipOptions {
    /// Length of the transition lock after an activation, in ms.
    #[schemars(title = "Flip Duration", range(min = 0, max = 3000), extend("step" = 50))]
    pub duration_ms: u64,
    /// Face shown when the card mounts.
    #[schemars(skip)]
    pub start_face: Face,
}

impl Default for FlipOptions {
    fn default() -> Self {
        Self {
            duration_ms: 600,
            start_face: Face::Back,
        }
    }
}
