use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into [`PovEngine::handle_input`](crate::PovEngine::handle_input),
/// which routes them into the [`InputAccumulator`](super::InputAccumulator).
///
/// # Example
///
/// ```ignore
/// let consumed = engine.handle_input(InputEvent::KeyPressed("ArrowLeft"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent<'a> {
    /// Key went down. Key strings use the `winit::keyboard::KeyCode` debug
    /// format: `"ArrowLeft"`, `"KeyW"`, etc.
    KeyPressed(&'a str),
    /// Key went up.
    KeyReleased(&'a str),
    /// Mouse button pressed or released at a canvas position.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
        /// Horizontal canvas position in pixels.
        x: i32,
        /// Vertical canvas position in pixels.
        y: i32,
    },
    /// Cursor moved to an absolute canvas position.
    CursorMoved {
        /// Horizontal position in pixels.
        x: i32,
        /// Vertical position in pixels.
        y: i32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// One of the four camera-steering directions a key can be bound to.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// left = ["ArrowLeft", "KeyA"]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Turn left (yaw decreases before axis inversion).
    Left,
    /// Turn right.
    Right,
    /// Look up (pitch decreases before axis inversion).
    Up,
    /// Look down.
    Down,
}

impl Direction {
    /// Every direction, in binding-resolution order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];
}
