//! Per-pitch lookup tables for the orbit geometry.
//!
//! For every pitch step the camera's zero-pitch reference distance is swung
//! down by the pitch angle, giving the vertical drop of the focal point and
//! the factor by which its horizontal reach shrinks.

use std::sync::OnceLock;

use super::angle::{Pitch, PITCH_STEPS, YAW_STEPS};

/// Distance from the eye to the focal point when looking level.
pub const FOCAL_DISTANCE: f64 = 750.0;

const STEPS: usize = PITCH_STEPS as usize;

/// Immutable per-pitch constants, total over `[0, 512)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrigTables {
    vertical_rate: [i32; STEPS],
    pitch_cosine: [f64; STEPS],
}

impl TrigTables {
    /// Sample the orbit geometry at every pitch step.
    #[must_use]
    pub fn build() -> Self {
        let mut vertical_rate = [0_i32; STEPS];
        let mut pitch_cosine = [0.0_f64; STEPS];
        for (step, (rate, cosine)) in vertical_rate
            .iter_mut()
            .zip(pitch_cosine.iter_mut())
            .enumerate()
        {
            let angle =
                step as f64 * std::f64::consts::TAU / f64::from(YAW_STEPS);
            *rate = (FOCAL_DISTANCE * angle.sin()).round() as i32;
            *cosine = angle.cos();
        }
        Self {
            vertical_rate,
            pitch_cosine,
        }
    }

    /// Process-wide tables, built on first use.
    #[must_use]
    pub fn shared() -> &'static Self {
        static TABLES: OnceLock<TrigTables> = OnceLock::new();
        TABLES.get_or_init(Self::build)
    }

    /// Vertical drop of the focal point below eye level.
    #[inline]
    #[must_use]
    pub fn vertical_rate(&self, pitch: Pitch) -> i32 {
        debug_assert!(pitch.index() < STEPS);
        self.vertical_rate[pitch.index()]
    }

    /// Horizontal attenuation of the focal distance.
    #[inline]
    #[must_use]
    pub fn pitch_cosine(&self, pitch: Pitch) -> f64 {
        debug_assert!(pitch.index() < STEPS);
        self.pitch_cosine[pitch.index()]
    }
}

impl Default for TrigTables {
    fn default() -> Self {
        Self::build()
    }
}
