use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the camera is handed to the host renderer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Host renders natively; povcam supplies a focal point each frame.
    #[default]
    Simple,
    /// Host draw calls are forwarded to a GPU backend with the camera
    /// position substituted.
    GpuDelegation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Render", inline)]
#[serde(default)]
/// Render backend selection and eye placement.
pub struct RenderOptions {
    /// Active render mode.
    #[schemars(title = "Mode")]
    pub mode: RenderMode,
    /// Height of the eye above the ground under the subject.
    #[schemars(title = "Eye Height", range(min = 0.0, max = 1000.0), extend("step" = 10.0))]
    pub eye_height_offset: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::Simple,
            eye_height_offset: 200.0,
        }
    }
}
