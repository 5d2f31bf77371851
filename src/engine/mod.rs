//! Per-frame camera session driven by the host.
//!
//! [`PovEngine`] ties the input accumulator, orientation controller and
//! projection together behind two calls: input routing and frame ticks.

mod input;
mod options;

use glam::DVec3;
use web_time::{SystemTime, UNIX_EPOCH};

use crate::camera::{
    focal, OrientationController, OrientationState, Pitch, SubjectPosition,
    TrigTables, Yaw,
};
use crate::error::PovError;
use crate::input::InputAccumulator;
use crate::options::{Options, RenderMode};

/// What the host knows about the world this frame.
pub trait WorldState {
    /// Tracked subject's ground position, or `None` if there is no subject.
    fn subject(&self) -> Option<SubjectPosition>;

    /// Yaw the host is currently rendering with.
    fn actual_yaw(&self) -> Yaw;

    /// Pitch the host is currently rendering with, after any host-side
    /// limiter.
    fn actual_pitch(&self) -> Pitch;
}

/// Per-frame instruction for the host renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutput {
    /// Render natively, looking from `eye` at `focal_point`.
    Focal {
        /// Updated yaw/pitch targets to apply to the host camera.
        orientation: OrientationState,
        /// Subject eye position.
        eye: DVec3,
        /// Point the camera should look at.
        focal_point: DVec3,
    },
    /// Forward draw calls through an
    /// [`OrbitDelegate`](crate::render::OrbitDelegate) positioned at `camera`.
    Delegated {
        /// Camera position to substitute.
        camera: DVec3,
    },
}

/// First-person orbit camera session.
///
/// Owns the options, the input accumulator and the orientation controller.
/// The host calls [`handle_input`](Self::handle_input) from its input
/// callback and [`tick`](Self::tick) once per rendered frame, from the same
/// thread.
///
/// # Example
///
/// ```ignore
/// let mut engine = PovEngine::new(Options::default());
/// engine.activate(&world)?;
/// // every frame:
/// if let Some(FrameOutput::Focal { orientation, focal_point, .. }) =
///     engine.tick(&world)
/// {
///     host.set_camera_targets(orientation.yaw_target, orientation.pitch_target);
///     host.set_focal_point(focal_point);
/// }
/// ```
#[derive(Debug)]
pub struct PovEngine {
    options: Options,
    tables: &'static TrigTables,
    input: InputAccumulator,
    controller: OrientationController,
}

impl PovEngine {
    /// Create an idle engine.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            tables: TrigTables::shared(),
            input: InputAccumulator::new(),
            controller: OrientationController::new(),
        }
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Orientation controller (session state and targets).
    #[must_use]
    pub fn controller(&self) -> &OrientationController {
        &self.controller
    }

    /// Start tracking at the current wall-clock time.
    pub fn activate(&mut self, world: &impl WorldState) -> Result<(), PovError> {
        self.activate_at(now_ms(), world)
    }

    /// Start tracking, seeding the orientation from the host's view.
    pub fn activate_at(
        &mut self,
        now_ms: i64,
        world: &impl WorldState,
    ) -> Result<(), PovError> {
        let yaw = world.actual_yaw();
        let pitch = world.actual_pitch();
        if !self.controller.activate(yaw, pitch, now_ms) {
            return Err(PovError::SessionEnded);
        }
        log::info!(
            "camera session active at yaw {} pitch {} ({:?} mode)",
            yaw.get(),
            pitch.get(),
            self.options.render.mode
        );
        Ok(())
    }

    /// End the session. Further ticks return `None`.
    pub fn deactivate(&mut self) {
        self.controller.deactivate();
        self.input.reset();
        log::info!("camera session deactivated");
    }

    /// Advance one frame at the current wall-clock time.
    pub fn tick(&mut self, world: &impl WorldState) -> Option<FrameOutput> {
        self.tick_at(now_ms(), world)
    }

    /// Advance one frame.
    ///
    /// Returns `None` while not tracking, or when the host has no subject.
    pub fn tick_at(
        &mut self,
        now_ms: i64,
        world: &impl WorldState,
    ) -> Option<FrameOutput> {
        if self.controller.orientation().is_none() {
            return None;
        }
        let subject = world.subject()?;
        let eye = subject.eye(self.options.render.eye_height_offset);

        match self.options.render.mode {
            RenderMode::Simple => {
                let snapshot = self.input.frame_snapshot();
                let orientation = self.controller.advance(
                    now_ms,
                    &snapshot,
                    world.actual_pitch(),
                    &self.options.controls,
                )?;
                let focal_point = focal::project(&orientation, eye, self.tables);
                Some(FrameOutput::Focal {
                    orientation,
                    eye,
                    focal_point,
                })
            }
            RenderMode::GpuDelegation => {
                Some(FrameOutput::Delegated { camera: eye })
            }
        }
    }
}

/// Milliseconds since the Unix epoch.
fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
}
