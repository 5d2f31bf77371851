use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::Direction;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawBindings")]
/// Configurable keyboard bindings mapping steering directions to key codes.
pub struct KeybindingOptions {
    /// Maps direction → key strings (e.g. `Left` → `["ArrowLeft", "KeyA"]`).
    pub bindings: HashMap<Direction, Vec<String>>,
    /// Reverse lookup cache (key string → direction). Rebuilt on load.
    #[serde(skip)]
    key_to_direction: HashMap<String, Direction>,
}

/// On-disk shape; converting it rebuilds the reverse map.
#[derive(Deserialize)]
#[serde(default)]
struct RawBindings {
    bindings: HashMap<Direction, Vec<String>>,
}

impl Default for RawBindings {
    fn default() -> Self {
        Self {
            bindings: HashMap::from([
                (Direction::Left, vec!["ArrowLeft".into(), "KeyA".into()]),
                (Direction::Right, vec!["ArrowRight".into(), "KeyD".into()]),
                (Direction::Up, vec!["ArrowUp".into(), "KeyW".into()]),
                (Direction::Down, vec!["ArrowDown".into(), "KeyS".into()]),
            ]),
        }
    }
}

impl From<RawBindings> for KeybindingOptions {
    fn from(raw: RawBindings) -> Self {
        let mut opts = Self {
            bindings: raw.bindings,
            key_to_direction: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        RawBindings::default().into()
    }
}

impl PartialEq for KeybindingOptions {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl Eq for KeybindingOptions {}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → direction).
    ///
    /// Call after editing [`bindings`](Self::bindings) in place. A key bound
    /// to several directions resolves to the first in [`Direction::ALL`].
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_direction.clear();
        for direction in Direction::ALL {
            let Some(keys) = self.bindings.get(&direction) else {
                continue;
            };
            for key in keys {
                let _ = self
                    .key_to_direction
                    .entry(key.clone())
                    .or_insert(direction);
            }
        }
    }

    /// Direction bound to `key`, if any.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Direction> {
        self.key_to_direction.get(key).copied()
    }
}
