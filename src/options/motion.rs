use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
/// User motion preferences.
pub struct MotionOptions {
    /// Suppress autonomous idle motion (pointer tracking still works).
    #[schemars(title = "Reduced Motion")]
    pub reduced_motion: bool,
}
