//! Focal point placement for the simple (non-delegated) render path.

use glam::DVec3;

use super::controller::OrientationState;
use super::tables::{TrigTables, FOCAL_DISTANCE};

/// Ground-plane location of the tracked subject as reported by the host.
///
/// The host's vertical axis points down, so smaller `y` is higher up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectPosition {
    /// East-west coordinate.
    pub x: f64,
    /// North-south coordinate.
    pub z: f64,
    /// Terrain height sampled under the subject.
    pub ground_height: f64,
}

impl SubjectPosition {
    /// Eye point raised `eye_height` above the ground.
    #[must_use]
    pub fn eye(&self, eye_height: f64) -> DVec3 {
        DVec3::new(self.x, self.ground_height - eye_height, self.z)
    }
}

/// Point the host camera should look at, given the eye position.
#[must_use]
pub fn project(
    orientation: &OrientationState,
    eye: DVec3,
    tables: &TrigTables,
) -> DVec3 {
    let yaw = orientation.yaw_target.to_radians();
    let drop = tables.vertical_rate(orientation.pitch_target);
    let reach = FOCAL_DISTANCE * tables.pitch_cosine(orientation.pitch_target);

    DVec3::new(
        eye.x + reach * yaw.sin(),
        eye.y - f64::from(drop),
        eye.z - reach * yaw.cos(),
    )
}
