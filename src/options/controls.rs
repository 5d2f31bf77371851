use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::MouseButton;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Steering speed and axis conventions.
pub struct ControlOptions {
    /// Key rotation speed in angle steps per millisecond.
    #[schemars(title = "Key Camera Speed", range(min = 0.05, max = 3.0), extend("step" = 0.05))]
    pub key_camera_speed: f64,
    /// Flip the pitch axis instead of the yaw axis.
    #[schemars(title = "Inverse Keys")]
    pub inverse_keys: bool,
    /// Mouse button that drags the view.
    #[schemars(skip)]
    pub drag_button: MouseButton,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            key_camera_speed: 0.5,
            inverse_keys: true,
            drag_button: MouseButton::Middle,
        }
    }
}
