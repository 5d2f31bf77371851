//! Integer angle units shared with the host renderer.
//!
//! Yaw runs on a 2048-step circle and wraps. Pitch runs on `[0, 512)` and
//! never wraps: deltas that would leave the range are rejected whole.

use serde::{Deserialize, Serialize};

use crate::error::PovError;

/// Steps in a full yaw turn.
pub const YAW_STEPS: i32 = 2048;

/// Exclusive upper bound of the pitch domain.
pub const PITCH_STEPS: i32 = 512;

/// Horizontal heading in renderer units, always in `[0, 2048)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct Yaw(u16);

impl Yaw {
    /// Wrap an arbitrary integer onto the yaw circle.
    #[must_use]
    pub fn wrapped(value: i32) -> Self {
        Self(value.rem_euclid(YAW_STEPS) as u16)
    }

    /// Raw step value.
    #[must_use]
    pub fn get(self) -> i32 {
        i32::from(self.0)
    }

    /// Add a signed step delta, wrapping around the circle.
    #[must_use]
    pub fn offset(self, delta: i32) -> Self {
        // i64 keeps extreme drag deltas from overflowing before the wrap
        let sum = i64::from(self.0) + i64::from(delta);
        Self(sum.rem_euclid(i64::from(YAW_STEPS)) as u16)
    }

    /// Heading in radians, shifted so that yaw 1024 faces 0.
    #[must_use]
    pub fn to_radians(self) -> f64 {
        (f64::from(self.0) * 360.0 / f64::from(YAW_STEPS) - 180.0)
            .to_radians()
    }
}

impl TryFrom<i32> for Yaw {
    type Error = PovError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if (0..YAW_STEPS).contains(&value) {
            Ok(Self(value as u16))
        } else {
            Err(PovError::YawOutOfRange(value))
        }
    }
}

impl From<Yaw> for i32 {
    fn from(yaw: Yaw) -> Self {
        yaw.get()
    }
}

/// Vertical look angle in renderer units, always in `[0, 512)`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct Pitch(u16);

impl Pitch {
    /// Raw step value.
    #[must_use]
    pub fn get(self) -> i32 {
        i32::from(self.0)
    }

    /// Table index for this pitch.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Apply a signed delta, or `None` if the result leaves `[0, 512)`.
    #[must_use]
    pub fn checked_offset(self, delta: i32) -> Option<Self> {
        let next = i64::from(self.0) + i64::from(delta);
        if (0..i64::from(PITCH_STEPS)).contains(&next) {
            Some(Self(next as u16))
        } else {
            None
        }
    }

    /// Pitch as an angle on the renderer's 2048-step circle.
    #[must_use]
    pub fn to_radians(self) -> f64 {
        f64::from(self.0) * std::f64::consts::TAU / f64::from(YAW_STEPS)
    }
}

impl TryFrom<i32> for Pitch {
    type Error = PovError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if (0..PITCH_STEPS).contains(&value) {
            Ok(Self(value as u16))
        } else {
            Err(PovError::PitchOutOfRange(value))
        }
    }
}

impl From<Pitch> for i32 {
    fn from(pitch: Pitch) -> Self {
        pitch.get()
    }
}
