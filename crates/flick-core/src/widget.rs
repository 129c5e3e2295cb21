//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-render cycle:
//!
//! 1. **Measure**: report intrinsic size
//! 2. **Layout**: accept bounds from the host; bounds drive hit testing
//! 3. **Render**: produce a [`Node`] tree (or paint onto a [`Canvas`])
//!
//! Input arrives through [`Widget::event`], usually from a
//! [`Mounted`](crate::Mounted) handle subscribed to a pointer source.
//!
//! # Examples
//!
//! ```
//! use flick_core::WidgetId;
//!
//! let a = WidgetId::next();
//! let b = WidgetId::next();
//! assert_ne!(a, b);
//! assert_eq!(WidgetId::new(42).0, 42);
//! ```

use crate::color::Color;
use crate::event::PointerEvent;
use crate::geometry::{Point, Rect, Size};
use crate::node::Node;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Create a widget ID from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Allocate a process-unique widget ID.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait.
pub trait Widget {
    /// Identity used for targeted events such as pointer-leave.
    fn id(&self) -> WidgetId;

    /// Intrinsic size.
    fn measure(&self) -> Size;

    /// Accept bounds from the host.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Produce the render tree for the current state.
    fn render(&self) -> Node;

    /// Generate draw commands for the current state.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle a pointer event; returns a message when the widget changed.
    fn event(&mut self, event: &PointerEvent) -> Option<Box<dyn Any + Send>>;

    /// Check if this widget reacts to input.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Draw a filled rectangle with rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);

    /// Draw a stroked rectangle with rounded corners.
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color, width: f32);

    /// Draw text with its top-left corner at `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
        }
    }
}
