//! Options methods for PovEngine

use std::path::Path;

use super::PovEngine;
use crate::options::{Options, RenderMode};

impl PovEngine {
    /// Replace options, switching render mode if it changed.
    ///
    /// Held input is released when the bindings or the drag button change,
    /// since a release under the new bindings could no longer reach it.
    pub fn set_options(&mut self, mut new: Options) {
        if new.keybindings != self.options.keybindings
            || new.controls.drag_button != self.options.controls.drag_button
        {
            self.input.reset();
        }
        let mode = new.render.mode;
        new.render.mode = self.options.render.mode;
        self.options = new;
        self.set_render_mode(mode);
    }

    /// Switch between the simple and GPU-delegation render paths.
    ///
    /// Held keys and any drag are released so nothing stays stuck across
    /// the switch.
    pub fn set_render_mode(&mut self, mode: RenderMode) {
        if self.options.render.mode == mode {
            return;
        }
        log::info!(
            "render mode {:?} -> {:?}",
            self.options.render.mode,
            mode
        );
        self.options.render.mode = mode;
        self.input.reset();
    }

    /// Flip between the two render modes.
    pub fn toggle_render_mode(&mut self) {
        let next = match self.options.render.mode {
            RenderMode::Simple => RenderMode::GpuDelegation,
            RenderMode::GpuDelegation => RenderMode::Simple,
        };
        self.set_render_mode(next);
    }

    /// Load a named preset from the presets directory.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path) {
            Ok(opts) => {
                log::info!("Loaded camera preset '{name}'");
                self.set_options(opts);
                true
            }
            Err(e) => {
                log::error!("Failed to load camera preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named preset.
    /// Returns true on success.
    pub fn save_preset(&self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved camera preset '{name}'");
                true
            }
            Err(e) => {
                log::error!("Failed to save camera preset '{name}': {e}");
                false
            }
        }
    }
}
