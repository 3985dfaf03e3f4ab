//! Debug canvases for outline drawing without a real backend.

use tracing::debug;

pub use tilebox_core::{DebugCanvas, DEFAULT_DEBUG_COLOR};

/// A single recorded stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCommand {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: String,
}

/// Canvas that keeps every stroke in memory, in call order.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<StrokeCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strokes recorded so far.
    pub fn commands(&self) -> &[StrokeCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded strokes, e.g. at the start of a frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DebugCanvas for RecordingCanvas {
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.commands.push(StrokeCommand {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        });
    }
}

/// Canvas that turns strokes into `debug!` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingCanvas {
    strokes: u64,
}

impl TracingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of strokes logged since creation.
    pub fn strokes(&self) -> u64 {
        self.strokes
    }
}

impl DebugCanvas for TracingCanvas {
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.strokes += 1;
        debug!(x, y, width, height, color, "stroke_rect");
    }
}
