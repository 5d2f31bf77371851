//! Host draw-callback capability and the forwarding delegate used in
//! GPU-delegation mode.

/// Forwarding sink anchored at the orbit camera.
pub mod delegate;
/// The render sink trait and draw-call payloads.
pub mod sink;

pub use delegate::OrbitDelegate;
pub use sink::{DrawCall, RenderSink, SceneView, TileCoord};
