//! Held-key and drag-gesture state, sampled once per frame.

use super::event::Direction;

/// Incremental cursor motion since the previous drag sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragDelta {
    /// Horizontal motion in pixels.
    pub dx: i32,
    /// Vertical motion in pixels.
    pub dy: i32,
}

/// Per-frame view of the player's steering intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct InputSnapshot {
    /// Turn-left key held.
    pub left: bool,
    /// Turn-right key held.
    pub right: bool,
    /// Look-up key held.
    pub up: bool,
    /// Look-down key held.
    pub down: bool,
    /// Drag motion this frame; `Some` exactly while a drag is active.
    pub drag: Option<DragDelta>,
}

/// Accumulates key and drag edges between frames.
///
/// Mutated from the input callback, read from the frame callback. Both must
/// be funneled through the same owner; nothing here is synchronized.
#[derive(Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct InputAccumulator {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    drag_active: bool,
    /// Previous drag sample, `None` until one exists.
    drag_anchor: Option<(i32, i32)>,
    /// Last known cursor position.
    cursor: Option<(i32, i32)>,
}

impl InputAccumulator {
    /// Create an accumulator with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A steering key went down.
    pub fn on_key_down(&mut self, direction: Direction) {
        *self.flag_mut(direction) = true;
    }

    /// A steering key went up.
    pub fn on_key_up(&mut self, direction: Direction) {
        *self.flag_mut(direction) = false;
    }

    /// Begin a drag gesture anchored at the press position.
    pub fn on_drag_start(&mut self, x: i32, y: i32) {
        self.drag_active = true;
        self.drag_anchor = Some((x, y));
        self.cursor = Some((x, y));
    }

    /// Motion since the previous sample; rebases the anchor to `(x, y)`.
    ///
    /// Without a prior sample the delta is zero.
    pub fn on_drag_update(&mut self, x: i32, y: i32) -> (i32, i32) {
        let delta = self
            .drag_anchor
            .map_or((0, 0), |(ax, ay)| (x.wrapping_sub(ax), y.wrapping_sub(ay)));
        self.drag_anchor = Some((x, y));
        delta
    }

    /// End the drag gesture.
    pub fn on_drag_end(&mut self) {
        self.drag_active = false;
        self.drag_anchor = None;
    }

    /// Remember the latest cursor position for the next frame's drag sample.
    pub fn on_cursor_moved(&mut self, x: i32, y: i32) {
        self.cursor = Some((x, y));
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// Sample intent for this frame.
    ///
    /// While dragging, this consumes the cursor motion since the previous
    /// frame, so call it exactly once per frame.
    pub fn frame_snapshot(&mut self) -> InputSnapshot {
        let drag = if self.drag_active {
            let (dx, dy) = match self.cursor {
                Some((x, y)) => self.on_drag_update(x, y),
                None => (0, 0),
            };
            Some(DragDelta { dx, dy })
        } else {
            None
        };
        InputSnapshot {
            left: self.left,
            right: self.right,
            up: self.up,
            down: self.down,
            drag,
        }
    }

    /// Release every key and end any drag.
    pub fn reset(&mut self) {
        *self = Self {
            cursor: self.cursor,
            ..Self::default()
        };
    }

    fn flag_mut(&mut self, direction: Direction) -> &mut bool {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }
}
