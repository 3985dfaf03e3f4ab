//! Tilebox Render - Renderable composition layer
//!
//! Builds on `tilebox-core`:
//! - `Renderable`: owns a `Rect` and a `Matrix2d` and forwards to them
//! - `RenderableConfig`: JSON presets for renderables
//! - Debug canvases for drawing outlines without a real backend

pub mod config;
pub mod debug_draw;
pub mod renderable;

pub use config::{HitboxConfig, RenderableConfig};
pub use debug_draw::{RecordingCanvas, StrokeCommand, TracingCanvas};
pub use renderable::Renderable;
