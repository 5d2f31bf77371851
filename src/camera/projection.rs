//! Camera-space transform for the GPU-delegation render path.
//!
//! Mirrors the host renderer's own yaw-then-pitch camera transform, but
//! anchored at the orbit camera position rather than the host's native eye.

use glam::DVec3;

/// Matched cosine/sine pairs for the host camera's yaw and pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrigFactors {
    /// Cosine of the yaw rotation.
    pub yaw_cos: f64,
    /// Sine of the yaw rotation.
    pub yaw_sin: f64,
    /// Cosine of the pitch rotation.
    pub pitch_cos: f64,
    /// Sine of the pitch rotation.
    pub pitch_sin: f64,
}

impl TrigFactors {
    /// Factors for the given rotation angles in radians.
    #[must_use]
    pub fn from_angles(yaw: f64, pitch: f64) -> Self {
        let (yaw_sin, yaw_cos) = yaw.sin_cos();
        let (pitch_sin, pitch_cos) = pitch.sin_cos();
        Self {
            yaw_cos,
            yaw_sin,
            pitch_cos,
            pitch_sin,
        }
    }

    /// Factors from the host's fixed-point trig values, where `one`
    /// represents 1.0 (65536 for 16.16 fixed point).
    #[must_use]
    pub fn from_fixed(
        yaw_cos: i32,
        yaw_sin: i32,
        pitch_cos: i32,
        pitch_sin: i32,
        one: i32,
    ) -> Self {
        let scale = f64::from(one);
        Self {
            yaw_cos: f64::from(yaw_cos) / scale,
            yaw_sin: f64::from(yaw_sin) / scale,
            pitch_cos: f64::from(pitch_cos) / scale,
            pitch_sin: f64::from(pitch_sin) / scale,
        }
    }

    /// No rotation.
    pub const IDENTITY: Self = Self {
        yaw_cos: 1.0,
        yaw_sin: 0.0,
        pitch_cos: 1.0,
        pitch_sin: 0.0,
    };
}

/// Transform `world` into the space of a camera at `camera`.
#[inline]
#[must_use]
pub fn project_point(world: DVec3, camera: DVec3, trig: &TrigFactors) -> DVec3 {
    let d = world - camera;

    let x = trig.yaw_cos * d.x - trig.yaw_sin * d.z;
    let z = trig.yaw_sin * d.x + trig.yaw_cos * d.z;

    let y = trig.pitch_cos * d.y - trig.pitch_sin * z;
    let depth = trig.pitch_sin * d.y + trig.pitch_cos * z;

    DVec3::new(x, y, depth)
}

/// Anything that can map world points into camera space.
pub trait Projection {
    /// Camera-space position of a world point.
    fn project(&self, world: DVec3) -> DVec3;

    /// Trig factors of the camera orientation.
    fn trig_factors(&self) -> TrigFactors;
}

/// Host orientation re-anchored at the orbit camera position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitProjection {
    /// Camera position substituted for the host's eye.
    pub camera: DVec3,
    /// Host orientation.
    pub trig: TrigFactors,
}

impl Projection for OrbitProjection {
    fn project(&self, world: DVec3) -> DVec3 {
        project_point(world, self.camera, &self.trig)
    }

    fn trig_factors(&self) -> TrigFactors {
        self.trig
    }
}
