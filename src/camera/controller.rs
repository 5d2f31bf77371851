//! Yaw/pitch target state machine.
//!
//! The controller turns held keys and drag motion into yaw/pitch targets for
//! the host renderer. It also corrects the pitch target when the host's own
//! pitch limiter stops following it.

use super::angle::{Pitch, Yaw};
use crate::input::InputSnapshot;
use crate::options::ControlOptions;

/// Frame gaps at or above this many milliseconds produce no key movement.
pub const STALL_THRESHOLD_MS: i64 = 10_000;

/// Orientation owned by a tracking session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationState {
    /// Requested heading.
    pub yaw_target: Yaw,
    /// Requested vertical angle.
    pub pitch_target: Pitch,
    /// Host pitch seen on the previous pitch-changing frame.
    pub last_observed_pitch: Option<Pitch>,
    /// Timestamp of the previous update.
    pub last_update_ms: i64,
}

impl OrientationState {
    /// Fresh state seeded from the host's current view.
    #[must_use]
    pub fn new(yaw: Yaw, pitch: Pitch, now_ms: i64) -> Self {
        Self {
            yaw_target: yaw,
            pitch_target: pitch,
            last_observed_pitch: None,
            last_update_ms: now_ms,
        }
    }
}

/// Lifecycle of the camera session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraSessionState {
    /// No orientation owned yet.
    #[default]
    Idle,
    /// Updating every frame.
    Tracking(OrientationState),
    /// Ended; further updates are ignored.
    Deactivated,
}

/// Drives [`OrientationState`] through the session lifecycle.
#[derive(Debug, Clone, Default)]
pub struct OrientationController {
    session: CameraSessionState,
}

impl OrientationController {
    /// Create an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn session(&self) -> CameraSessionState {
        self.session
    }

    /// Orientation while tracking.
    #[must_use]
    pub fn orientation(&self) -> Option<&OrientationState> {
        match &self.session {
            CameraSessionState::Tracking(state) => Some(state),
            _ => None,
        }
    }

    /// Start tracking from the host's current view.
    ///
    /// Returns `false` if the session was already deactivated. Activating a
    /// tracking session restarts it from the given view.
    pub fn activate(&mut self, yaw: Yaw, pitch: Pitch, now_ms: i64) -> bool {
        if self.session == CameraSessionState::Deactivated {
            return false;
        }
        self.session = CameraSessionState::Tracking(OrientationState::new(
            yaw, pitch, now_ms,
        ));
        true
    }

    /// End the session for good.
    pub fn deactivate(&mut self) {
        self.session = CameraSessionState::Deactivated;
    }

    /// Advance one frame.
    ///
    /// `actual_pitch` is the pitch the host is really rendering with, which
    /// may lag the target when a host-side limiter is engaged. Returns the
    /// updated orientation, or `None` when not tracking.
    pub fn advance(
        &mut self,
        now_ms: i64,
        input: &InputSnapshot,
        actual_pitch: Pitch,
        controls: &ControlOptions,
    ) -> Option<OrientationState> {
        let CameraSessionState::Tracking(state) = &mut self.session else {
            return None;
        };

        let dt = now_ms.saturating_sub(state.last_update_ms);
        state.last_update_ms = now_ms;

        let (added_yaw, added_pitch) = steering_delta(
            dt,
            input,
            controls.key_camera_speed,
            controls.inverse_keys,
        );

        if added_yaw != 0 {
            state.yaw_target = state.yaw_target.offset(added_yaw);
        }
        if added_pitch != 0.0 {
            commit_pitch(state, added_pitch, actual_pitch);
        }

        Some(*state)
    }
}

/// Yaw/pitch steps requested this frame, with axis inversion applied.
///
/// Yaw comes back rounded. Pitch stays raw so sub-step movement still
/// drives the limiter resync.
fn steering_delta(
    dt: i64,
    input: &InputSnapshot,
    speed: f64,
    invert_axes: bool,
) -> (i32, f64) {
    let (mut yaw, mut pitch) = if let Some(drag) = input.drag {
        (f64::from(drag.dx), f64::from(drag.dy))
    } else if dt < 0 {
        log::debug!(
            "clock went backwards by {}ms, holding view",
            dt.unsigned_abs()
        );
        (0.0, 0.0)
    } else if dt < STALL_THRESHOLD_MS {
        let step = dt as f64 * speed;
        let axis = |neg: bool, pos: bool| {
            (if pos { step } else { 0.0 }) - (if neg { step } else { 0.0 })
        };
        (axis(input.left, input.right), axis(input.up, input.down))
    } else {
        log::debug!("frame gap of {dt}ms, skipping key movement");
        (0.0, 0.0)
    };

    // Yaw is screen-space inverted by default; the toggle moves the flip
    // onto pitch instead.
    if invert_axes {
        pitch = -pitch;
    } else {
        yaw = -yaw;
    }

    (yaw.round() as i32, pitch)
}

/// Apply a pitch delta, resyncing to the host pitch when it is stuck.
fn commit_pitch(state: &mut OrientationState, raw: f64, actual: Pitch) {
    // Range check the rounded step so a commit never lands on 512
    let Some(next) = state.pitch_target.checked_offset(raw.round() as i32)
    else {
        return;
    };

    let stuck = state.last_observed_pitch == Some(actual)
        && actual >= state.pitch_target
        && raw < 0.0;
    if stuck {
        log::debug!(
            "pitch limiter holding at {}, resyncing target from {}",
            actual.get(),
            state.pitch_target.get()
        );
        state.pitch_target = actual;
    } else {
        state.pitch_target = next;
    }
    state.last_observed_pitch = Some(actual);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DragDelta;

    fn pitch(v: i32) -> Pitch {
        Pitch::try_from(v).unwrap()
    }

    fn controls(inverse_keys: bool) -> ControlOptions {
        ControlOptions {
            inverse_keys,
            ..ControlOptions::default()
        }
    }

    fn drag(dx: i32, dy: i32) -> InputSnapshot {
        InputSnapshot {
            drag: Some(DragDelta { dx, dy }),
            ..InputSnapshot::default()
        }
    }

    fn tracking(yaw: i32, p: i32) -> OrientationController {
        let mut c = OrientationController::new();
        assert!(c.activate(Yaw::wrapped(yaw), pitch(p), 0));
        c
    }

    #[test]
    fn lifecycle_idle_tracking_deactivated() {
        let mut c = OrientationController::new();
        assert_eq!(c.session(), CameraSessionState::Idle);
        assert!(c
            .advance(16, &InputSnapshot::default(), pitch(0), &controls(true))
            .is_none());

        assert!(c.activate(Yaw::wrapped(5), pitch(6), 100));
        let state = c.orientation().copied().unwrap();
        assert_eq!(state.last_observed_pitch, None);
        assert_eq!(state.last_update_ms, 100);

        c.deactivate();
        assert!(c
            .advance(116, &drag(10, 10), pitch(0), &controls(true))
            .is_none());
        assert!(!c.activate(Yaw::wrapped(0), pitch(0), 200));
        assert_eq!(c.session(), CameraSessionState::Deactivated);
    }

    #[test]
    fn keys_scale_with_elapsed_time_and_speed() {
        let mut c = tracking(1000, 200);
        let input = InputSnapshot {
            right: true,
            down: true,
            ..InputSnapshot::default()
        };
        // Not inverted: yaw flips, pitch keeps its sign
        let s = c.advance(20, &input, pitch(200), &controls(false)).unwrap();
        assert_eq!(s.yaw_target.get(), 990);
        assert_eq!(s.pitch_target.get(), 210);
        assert_eq!(s.last_update_ms, 20);
    }

    #[test]
    fn inverse_keys_flip_pitch_instead_of_yaw() {
        let mut c = tracking(1000, 200);
        let input = InputSnapshot {
            right: true,
            up: true,
            ..InputSnapshot::default()
        };
        let s = c.advance(20, &input, pitch(200), &controls(true)).unwrap();
        assert_eq!(s.yaw_target.get(), 1010);
        assert_eq!(s.pitch_target.get(), 210);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut c = tracking(1000, 200);
        let input = InputSnapshot {
            left: true,
            right: true,
            up: true,
            down: true,
            ..InputSnapshot::default()
        };
        let s = c.advance(40, &input, pitch(200), &controls(true)).unwrap();
        assert_eq!(s.yaw_target.get(), 1000);
        assert_eq!(s.pitch_target.get(), 200);
    }

    #[test]
    fn long_gap_skips_key_movement_but_not_drag() {
        let mut c = tracking(1000, 200);
        let held = InputSnapshot {
            right: true,
            ..InputSnapshot::default()
        };
        let s = c
            .advance(STALL_THRESHOLD_MS, &held, pitch(200), &controls(true))
            .unwrap();
        assert_eq!(s.yaw_target.get(), 1000);

        let s = c
            .advance(60_000, &drag(7, 0), pitch(200), &controls(true))
            .unwrap();
        assert_eq!(s.yaw_target.get(), 1007);
    }

    #[test]
    fn backwards_clock_holds_view() {
        let mut c = tracking(1000, 200);
        let held = InputSnapshot {
            right: true,
            ..InputSnapshot::default()
        };
        let s = c.advance(-50, &held, pitch(200), &controls(true)).unwrap();
        assert_eq!(s.yaw_target.get(), 1000);
        assert_eq!(s.last_update_ms, -50);
    }

    #[test]
    fn drag_deltas_are_unscaled() {
        let mut c = tracking(0, 100);
        let fast = ControlOptions {
            key_camera_speed: 3.0,
            ..controls(true)
        };
        let s = c.advance(1, &drag(12, 5), pitch(100), &fast).unwrap();
        assert_eq!(s.yaw_target.get(), 12);
        assert_eq!(s.pitch_target.get(), 95);
    }

    #[test]
    fn yaw_wraps_independent_of_whole_turns() {
        for k in -3..=3 {
            let mut c = tracking(2000, 100);
            let s = c
                .advance(
                    16,
                    &drag(2048 * k + 100, 0),
                    pitch(100),
                    &controls(true),
                )
                .unwrap();
            assert_eq!(s.yaw_target.get(), 52, "k = {k}");
        }
    }

    #[test]
    fn out_of_range_pitch_delta_is_discarded() {
        let mut c = tracking(0, 505);
        // dy = -10 with inverse keys becomes +10: 515 is out of range
        let s = c
            .advance(16, &drag(0, -10), pitch(505), &controls(true))
            .unwrap();
        assert_eq!(s.pitch_target.get(), 505);
        assert_eq!(s.last_observed_pitch, None);

        let mut c = tracking(0, 3);
        let s = c
            .advance(16, &drag(0, -4), pitch(3), &controls(false))
            .unwrap();
        assert_eq!(s.pitch_target.get(), 3);
    }

    #[test]
    fn pitch_stays_in_domain_under_any_drag_sequence() {
        let mut c = tracking(0, 256);
        let mut now = 0;
        for dy in [300, -900, 511, -1, 255, 256, -600, 17, i32::MAX, i32::MIN]
        {
            now += 16;
            let s = c
                .advance(now, &drag(0, dy), pitch(256), &controls(false))
                .unwrap();
            assert!((0..512).contains(&s.pitch_target.get()));
        }
    }

    #[test]
    fn stuck_limiter_resyncs_target() {
        let mut c = tracking(0, 100);
        let up = drag(0, -5);
        // First push records the host pitch
        let s = c.advance(16, &up, pitch(100), &controls(false)).unwrap();
        assert_eq!(s.pitch_target.get(), 95);
        assert_eq!(s.last_observed_pitch, Some(pitch(100)));

        // Host still at 100 and at/above the target: snap instead of 90
        let s = c.advance(32, &up, pitch(100), &controls(false)).unwrap();
        assert_eq!(s.pitch_target.get(), 100);
    }

    #[test]
    fn resync_when_observed_current_and_target_agree() {
        let mut c = tracking(0, 100);
        if let CameraSessionState::Tracking(state) = &mut c.session {
            state.last_observed_pitch = Some(pitch(100));
        }
        let s = c
            .advance(16, &drag(0, -5), pitch(100), &controls(false))
            .unwrap();
        assert_eq!(s.pitch_target.get(), 100);
    }

    #[test]
    fn moving_host_pitch_does_not_resync() {
        let mut c = tracking(0, 100);
        let up = drag(0, -5);
        let _ = c.advance(16, &up, pitch(104), &controls(false)).unwrap();
        let s = c.advance(32, &up, pitch(101), &controls(false)).unwrap();
        assert_eq!(s.pitch_target.get(), 90);
        assert_eq!(s.last_observed_pitch, Some(pitch(101)));
    }

    #[test]
    fn stuck_host_does_not_block_reversal() {
        let mut c = tracking(0, 100);
        let _ = c
            .advance(16, &drag(0, -5), pitch(100), &controls(false))
            .unwrap();
        // Pushing down again is never resynced
        let s = c
            .advance(32, &drag(0, 5), pitch(100), &controls(false))
            .unwrap();
        assert_eq!(s.pitch_target.get(), 100);
        let s = c
            .advance(48, &drag(0, 5), pitch(100), &controls(false))
            .unwrap();
        assert_eq!(s.pitch_target.get(), 105);
    }

    #[test]
    fn sub_step_push_still_resyncs_stuck_pitch() {
        let mut c = tracking(0, 95);
        if let CameraSessionState::Tracking(state) = &mut c.session {
            state.last_observed_pitch = Some(pitch(100));
        }
        let slow = ControlOptions {
            key_camera_speed: 0.05,
            inverse_keys: false,
            ..ControlOptions::default()
        };
        let up = InputSnapshot {
            up: true,
            ..InputSnapshot::default()
        };
        // 8ms at 0.05 is -0.4, which rounds to no movement
        let s = c.advance(8, &up, pitch(100), &slow).unwrap();
        assert_eq!(s.pitch_target.get(), 100);
        assert_eq!(s.last_observed_pitch, Some(pitch(100)));
    }

    #[test]
    fn sub_step_push_records_observed_pitch() {
        let mut c = tracking(0, 95);
        let slow = ControlOptions {
            key_camera_speed: 0.05,
            ..ControlOptions::default()
        };
        let down = InputSnapshot {
            down: true,
            ..InputSnapshot::default()
        };
        let s = c.advance(8, &down, pitch(97), &slow).unwrap();
        assert_eq!(s.pitch_target.get(), 95);
        assert_eq!(s.last_observed_pitch, Some(pitch(97)));
    }

    #[test]
    fn extreme_timestamps_saturate_to_a_stall() {
        let mut c = OrientationController::new();
        assert!(c.activate(Yaw::wrapped(10), pitch(10), i64::MIN));
        let held = InputSnapshot {
            right: true,
            up: true,
            ..InputSnapshot::default()
        };
        let s = c.advance(i64::MAX, &held, pitch(10), &controls(true)).unwrap();
        assert_eq!(s.yaw_target.get(), 10);
        assert_eq!(s.pitch_target.get(), 10);
        assert_eq!(s.last_update_ms, i64::MAX);
    }
}
