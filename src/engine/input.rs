//! Input routing for PovEngine

use super::PovEngine;
use crate::input::InputEvent;
use crate::options::RenderMode;

impl PovEngine {
    /// Route a raw input event into the accumulator.
    ///
    /// Returns `true` if the event steered the camera and the host should
    /// suppress its own reaction to it. Outside an active session, and in
    /// GPU-delegation mode, the host's native camera keeps its input, so
    /// nothing is consumed.
    pub fn handle_input(&mut self, event: InputEvent<'_>) -> bool {
        if self.controller.orientation().is_none()
            || self.options.render.mode == RenderMode::GpuDelegation
        {
            return false;
        }

        match event {
            InputEvent::KeyPressed(key) => {
                self.options.keybindings.lookup(key).is_some_and(|dir| {
                    self.input.on_key_down(dir);
                    true
                })
            }
            InputEvent::KeyReleased(key) => {
                self.options.keybindings.lookup(key).is_some_and(|dir| {
                    self.input.on_key_up(dir);
                    true
                })
            }
            InputEvent::MouseButton {
                button,
                pressed,
                x,
                y,
            } => {
                if button != self.options.controls.drag_button {
                    return false;
                }
                if pressed {
                    self.input.on_drag_start(x, y);
                } else {
                    self.input.on_drag_end();
                }
                true
            }
            InputEvent::CursorMoved { x, y } => {
                self.input.on_cursor_moved(x, y);
                false
            }
        }
    }
}
