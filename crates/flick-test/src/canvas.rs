//! Canvas that records draw calls for assertions.

use flick_core::{Canvas, Color, Point, Rect, TextStyle};

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// `fill_rounded_rect`
    Fill {
        /// Target rectangle
        rect: Rect,
        /// Corner radius
        radius: f32,
        /// Fill color
        color: Color,
    },
    /// `stroke_rounded_rect`
    Stroke {
        /// Target rectangle
        rect: Rect,
        /// Corner radius
        radius: f32,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
    /// `draw_text`
    Text {
        /// Text content
        text: String,
        /// Top-left position
        position: Point,
        /// Style
        style: TextStyle,
    },
}

/// Canvas that keeps every draw call in order.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded fills in call order.
    pub fn fills(&self) -> Vec<(Rect, Color)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Fill { rect, color, .. } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    /// Recorded text in call order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Forget all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Fill {
            rect,
            radius,
            color,
        });
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::Stroke {
            rect,
            radius,
            color,
            width,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            style: style.clone(),
        });
    }
}
