// src/gfx/rendering/mod.rs
//! Rendering boundary
//!
//! The pose engine never draws anything itself. It hands transformed geometry
//! copies and colours to a [`Renderer`], once for the assembled scene and then
//! once per animation frame.

pub mod renderer;

// Re-export main types
pub use renderer::{AxisLine, Color, Decoration, FrameRecorder, LogRenderer, RenderItem, Renderer};
