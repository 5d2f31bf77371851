// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Angle casts are range-checked by the angle newtypes
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::suboptimal_flops,
    clippy::missing_const_for_fn,
    clippy::doc_markdown
)]
// Tests assert on known-good fixtures
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::panic, clippy::float_cmp)
)]

//! First-person orbit camera kernel for a host 3D renderer.
//!
//! Povcam turns arrow-key and mouse-drag input into integer yaw/pitch
//! targets, keeps the pitch target in step with the host's own pitch
//! limiter, and derives either a focal point for the host camera or a
//! camera-space transform for delegated GPU draw calls.
//!
//! # Key entry points
//!
//! - [`PovEngine`] - the per-frame session the host drives
//! - [`camera::OrientationController`] - the yaw/pitch state machine
//! - [`camera::focal::project`] - focal point placement
//! - [`camera::projection::project_point`] - camera-space transform
//! - [`render::OrbitDelegate`] - draw-call forwarding in GPU mode
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Threading
//!
//! Everything runs on the host's frame thread. Input callbacks must be
//! funneled onto the same thread before reaching [`PovEngine`].

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod render;

pub use engine::{FrameOutput, PovEngine, WorldState};
pub use error::PovError;
