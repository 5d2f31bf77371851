use glam::{DVec3, IVec3};

use crate::camera::Projection;

/// Per-object parameters of a host draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    /// Model rotation in yaw steps.
    pub orientation: i32,
    /// Model position in host world units.
    pub position: IVec3,
    /// Host identity hash of the drawn object.
    pub hash: i64,
}

/// Scene tile address on the host's ground grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCoord {
    /// Tile column.
    pub x: i32,
    /// Tile row.
    pub z: i32,
}

/// Camera placement the host passes at the start of a scene draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneView {
    /// Eye position in world units.
    pub camera: DVec3,
    /// Pitch in radians.
    pub pitch: f64,
    /// Yaw in radians.
    pub yaw: f64,
    /// Active floor level.
    pub plane: i32,
}

/// Receiver of every draw callback the host renderer issues.
///
/// Implemented by whichever backend is active (a GPU renderer, or a
/// forwarding wrapper such as [`OrbitDelegate`](super::OrbitDelegate)).
/// Scene and asset types belong to the host and are opaque here.
pub trait RenderSink {
    /// Host scene graph.
    type Scene;
    /// Drawable model.
    type Renderable;
    /// Flat tile paint.
    type ScenePaint;
    /// Shaped tile model.
    type TileModel;
    /// Animated texture.
    type Texture;

    /// Draw one renderable through `projection`.
    fn draw_renderable(
        &mut self,
        projection: &dyn Projection,
        scene: &Self::Scene,
        renderable: &Self::Renderable,
        call: &DrawCall,
    );

    /// Draw a painted tile.
    fn draw_scene_paint(
        &mut self,
        scene: &Self::Scene,
        paint: &Self::ScenePaint,
        plane: i32,
        tile: TileCoord,
    );

    /// Draw a modelled tile.
    fn draw_scene_tile_model(
        &mut self,
        scene: &Self::Scene,
        model: &Self::TileModel,
        tile: TileCoord,
    );

    /// Composite the frame with an overlay tint.
    fn draw_overlay(&mut self, overlay_color: i32);

    /// Begin drawing the scene from `view`.
    fn draw_scene(&mut self, view: &SceneView);

    /// Scene draw finished.
    fn post_draw_scene(&mut self);

    /// Advance a texture animation by `diff` ticks.
    fn animate(&mut self, texture: &Self::Texture, diff: i32);

    /// A new scene was loaded.
    fn load_scene(&mut self, scene: &Self::Scene);

    /// The loaded scene became current.
    fn swap_scene(&mut self, scene: &Self::Scene);
}
