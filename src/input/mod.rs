//! Input handling: event types and the accumulator that turns key and
//! mouse edges into a per-frame steering snapshot.

/// Held-key and drag-gesture state.
pub mod accumulator;
/// Platform-agnostic input events.
pub mod event;

pub use accumulator::{DragDelta, InputAccumulator, InputSnapshot};
pub use event::{Direction, InputEvent, MouseButton};
