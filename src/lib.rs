// src/lib.rs
//! Tipper
//!
//! Kinematic pose composition and lift animation for a multi-part dump-truck
//! rig. Parts are placed relative to their parents, resolved into world
//! poses, and a container/lid group is animated through a lift-and-turn
//! motion as a pure sequence of frames.

pub mod app;
pub mod error;
pub mod gfx;
pub mod prelude;
pub mod simulation;

// Re-export main types for convenience
pub use app::{AppConfig, TipperApp};
pub use error::{SceneError, SceneResult};

/// Creates a Tipper application with default settings
pub fn default() -> TipperApp {
    TipperApp::new(AppConfig::default())
}
