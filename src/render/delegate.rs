//! Forwarding sink that re-anchors the host camera at the orbit eye.

use glam::DVec3;

use super::sink::{DrawCall, RenderSink, SceneView, TileCoord};
use crate::camera::{OrbitProjection, Projection};

/// Wraps a GPU backend and substitutes the orbit camera position into every
/// call that carries one.
///
/// With no backend attached every callback is a no-op, so the host can keep
/// the delegate installed while its GPU renderer is disabled.
#[derive(Debug, Clone)]
pub struct OrbitDelegate<S> {
    backend: Option<S>,
    camera: DVec3,
}

impl<S> Default for OrbitDelegate<S> {
    fn default() -> Self {
        Self {
            backend: None,
            camera: DVec3::ZERO,
        }
    }
}

impl<S: RenderSink> OrbitDelegate<S> {
    /// Delegate with no backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delegate forwarding to `backend`.
    #[must_use]
    pub fn with_backend(backend: S) -> Self {
        Self {
            backend: Some(backend),
            camera: DVec3::ZERO,
        }
    }

    /// Attach a backend, returning the one it replaces.
    pub fn attach(&mut self, backend: S) -> Option<S> {
        log::info!("GPU backend attached to orbit delegate");
        self.backend.replace(backend)
    }

    /// Detach the backend; callbacks become no-ops.
    pub fn detach(&mut self) -> Option<S> {
        if self.backend.is_some() {
            log::info!("GPU backend detached from orbit delegate");
        }
        self.backend.take()
    }

    /// Whether draw calls are being forwarded.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.backend.is_some()
    }

    /// The attached backend.
    #[must_use]
    pub fn backend(&self) -> Option<&S> {
        self.backend.as_ref()
    }

    /// Camera position substituted into forwarded calls.
    #[must_use]
    pub fn camera(&self) -> DVec3 {
        self.camera
    }

    /// Set the camera position for the coming frame.
    pub fn set_camera(&mut self, camera: DVec3) {
        self.camera = camera;
    }
}

impl<S: RenderSink> RenderSink for OrbitDelegate<S> {
    type Scene = S::Scene;
    type Renderable = S::Renderable;
    type ScenePaint = S::ScenePaint;
    type TileModel = S::TileModel;
    type Texture = S::Texture;

    fn draw_renderable(
        &mut self,
        projection: &dyn Projection,
        scene: &Self::Scene,
        renderable: &Self::Renderable,
        call: &DrawCall,
    ) {
        let Some(backend) = &mut self.backend else {
            return;
        };
        let orbit = OrbitProjection {
            camera: self.camera,
            trig: projection.trig_factors(),
        };
        backend.draw_renderable(&orbit, scene, renderable, call);
    }

    fn draw_scene_paint(
        &mut self,
        scene: &Self::Scene,
        paint: &Self::ScenePaint,
        plane: i32,
        tile: TileCoord,
    ) {
        if let Some(backend) = &mut self.backend {
            backend.draw_scene_paint(scene, paint, plane, tile);
        }
    }

    fn draw_scene_tile_model(
        &mut self,
        scene: &Self::Scene,
        model: &Self::TileModel,
        tile: TileCoord,
    ) {
        if let Some(backend) = &mut self.backend {
            backend.draw_scene_tile_model(scene, model, tile);
        }
    }

    fn draw_overlay(&mut self, overlay_color: i32) {
        if let Some(backend) = &mut self.backend {
            backend.draw_overlay(overlay_color);
        }
    }

    fn draw_scene(&mut self, view: &SceneView) {
        if let Some(backend) = &mut self.backend {
            backend.draw_scene(&SceneView {
                camera: self.camera,
                ..*view
            });
        }
    }

    fn post_draw_scene(&mut self) {
        if let Some(backend) = &mut self.backend {
            backend.post_draw_scene();
        }
    }

    fn animate(&mut self, texture: &Self::Texture, diff: i32) {
        if let Some(backend) = &mut self.backend {
            backend.animate(texture, diff);
        }
    }

    fn load_scene(&mut self, scene: &Self::Scene) {
        if let Some(backend) = &mut self.backend {
            backend.load_scene(scene);
        }
    }

    fn swap_scene(&mut self, scene: &Self::Scene) {
        if let Some(backend) = &mut self.backend {
            backend.swap_scene(scene);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::IVec3;

    use super::*;
    use crate::camera::TrigFactors;

    /// Records what reached the backend.
    #[derive(Default)]
    struct Recorder {
        projected: Vec<DVec3>,
        views: Vec<SceneView>,
        calls: Vec<&'static str>,
    }

    impl RenderSink for Recorder {
        type Scene = ();
        type Renderable = DVec3;
        type ScenePaint = ();
        type TileModel = ();
        type Texture = ();

        fn draw_renderable(
            &mut self,
            projection: &dyn Projection,
            _scene: &(),
            renderable: &DVec3,
            _call: &DrawCall,
        ) {
            self.projected.push(projection.project(*renderable));
        }

        fn draw_scene_paint(&mut self, _: &(), _: &(), _: i32, _: TileCoord) {
            self.calls.push("paint");
        }

        fn draw_scene_tile_model(&mut self, _: &(), _: &(), _: TileCoord) {
            self.calls.push("tile_model");
        }

        fn draw_overlay(&mut self, _: i32) {
            self.calls.push("overlay");
        }

        fn draw_scene(&mut self, view: &SceneView) {
            self.views.push(*view);
        }

        fn post_draw_scene(&mut self) {
            self.calls.push("post");
        }

        fn animate(&mut self, _: &(), _: i32) {
            self.calls.push("animate");
        }

        fn load_scene(&mut self, _: &()) {
            self.calls.push("load");
        }

        fn swap_scene(&mut self, _: &()) {
            self.calls.push("swap");
        }
    }

    /// Host projection anchored at its own eye.
    struct HostProjection(TrigFactors);

    impl Projection for HostProjection {
        fn project(&self, world: DVec3) -> DVec3 {
            world
        }

        fn trig_factors(&self) -> TrigFactors {
            self.0
        }
    }

    const CALL: DrawCall = DrawCall {
        orientation: 0,
        position: IVec3::ZERO,
        hash: 0,
    };

    #[test]
    fn draw_scene_substitutes_camera() {
        let mut d = OrbitDelegate::with_backend(Recorder::default());
        d.set_camera(DVec3::new(1.0, 2.0, 3.0));
        d.draw_scene(&SceneView {
            camera: DVec3::new(9.0, 9.0, 9.0),
            pitch: 0.25,
            yaw: 1.5,
            plane: 2,
        });
        let view = d.backend().unwrap().views[0];
        assert_eq!(view.camera, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!((view.pitch, view.yaw, view.plane), (0.25, 1.5, 2));
    }

    #[test]
    fn renderables_project_from_the_orbit_camera() {
        let mut d = OrbitDelegate::with_backend(Recorder::default());
        let camera = DVec3::new(50.0, -200.0, 75.0);
        d.set_camera(camera);
        let host = HostProjection(TrigFactors::from_angles(0.8, 0.3));
        d.draw_renderable(&host, &(), &camera, &CALL);
        d.draw_renderable(&host, &(), &(camera + DVec3::Y), &CALL);

        let projected = &d.backend().unwrap().projected;
        assert_eq!(projected[0], DVec3::ZERO);
        assert!((projected[1].length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn other_callbacks_forward_unchanged() {
        let mut d = OrbitDelegate::with_backend(Recorder::default());
        d.draw_scene_paint(&(), &(), 0, TileCoord { x: 1, z: 2 });
        d.draw_scene_tile_model(&(), &(), TileCoord { x: 1, z: 2 });
        d.draw_overlay(0x00ff_ffff);
        d.post_draw_scene();
        d.animate(&(), 3);
        d.load_scene(&());
        d.swap_scene(&());
        assert_eq!(
            d.backend().unwrap().calls,
            ["paint", "tile_model", "overlay", "post", "animate", "load", "swap"]
        );
    }

    #[test]
    fn detached_delegate_is_a_no_op() {
        let mut d = OrbitDelegate::with_backend(Recorder::default());
        let old = d.detach().unwrap();
        assert!(!d.is_active());
        d.draw_overlay(0);
        d.draw_scene(&SceneView {
            camera: DVec3::ZERO,
            pitch: 0.0,
            yaw: 0.0,
            plane: 0,
        });
        assert!(old.calls.is_empty() && old.views.is_empty());

        assert!(d.attach(old).is_none());
        d.post_draw_scene();
        assert_eq!(d.backend().unwrap().calls, ["post"]);
    }
}
