//! Orbit camera kernel.
//!
//! Integer yaw/pitch targets driven by player input, the lookup tables
//! behind them, and the two ways of handing the result to the host: a focal
//! point, or a camera-space transform for delegated draw calls.

/// Integer yaw and pitch units.
pub mod angle;
/// Yaw/pitch target state machine with limiter resync.
pub mod controller;
/// Focal point placement from orientation and eye position.
pub mod focal;
/// Camera-space transform for delegated draw calls.
pub mod projection;
/// Per-pitch lookup tables.
pub mod tables;

pub use angle::{Pitch, Yaw};
pub use controller::{
    CameraSessionState, OrientationController, OrientationState,
};
pub use focal::SubjectPosition;
pub use projection::{OrbitProjection, Projection, TrigFactors};
pub use tables::TrigTables;
