//! State-dependent text label.

use flick_core::{
    widget::LayoutResult, Canvas, Length, Node, Point, PointerEvent, PointerEvents, Position,
    Rect, Size, Style, TextStyle, Transform, Widget, WidgetId,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Text shown for each state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Text when active
    pub on: String,
    /// Text when inactive
    pub off: String,
}

impl Labels {
    /// Create a label pair.
    #[must_use]
    pub fn new(on: impl Into<String>, off: impl Into<String>) -> Self {
        Self {
            on: on.into(),
            off: off.into(),
        }
    }
}

/// Label that shows one of two strings depending on `active`.
///
/// Positioned absolutely inside its container: 20% from the left edge when
/// active, 20% from the right edge otherwise, vertically centered. It never
/// intercepts pointer input.
#[derive(Debug, Clone)]
pub struct Label {
    id: WidgetId,
    active: bool,
    labels: Labels,
    text_style: TextStyle,
    /// Container bounds
    bounds: Rect,
}

impl Label {
    /// Create an inactive label.
    #[must_use]
    pub fn new(labels: Labels) -> Self {
        Self {
            id: WidgetId::next(),
            active: false,
            labels,
            text_style: TextStyle::default(),
            bounds: Rect::default(),
        }
    }

    /// Set whether the label is active.
    #[must_use]
    pub const fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set the text style.
    #[must_use]
    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }

    /// Update the active flag.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Get the active flag.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Get the label pair.
    #[must_use]
    pub const fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Text for the current state.
    #[must_use]
    pub fn text(&self) -> &str {
        if self.active {
            &self.labels.on
        } else {
            &self.labels.off
        }
    }

    /// Inline style for the current state.
    #[must_use]
    pub fn style(&self) -> Style {
        let base = Style {
            position: Some(Position::Absolute),
            top: Some(Length::Percent(50.0)),
            transform: Some(Transform::TranslateY(Length::Percent(-50.0))),
            pointer_events: Some(PointerEvents::None),
            ..Style::default()
        };
        let offset = if self.active {
            Style {
                left: Some(Length::Percent(20.0)),
                ..Style::default()
            }
        } else {
            Style {
                right: Some(Length::Percent(20.0)),
                ..Style::default()
            }
        };
        base.merge(&offset)
    }

    fn text_width(&self) -> f32 {
        self.text().chars().count() as f32 * self.text_style.size / 2.0
    }

    /// Top-left of the text inside the container bounds.
    fn text_origin(&self) -> Point {
        let inset = self.bounds.width * 0.2;
        let x = if self.active {
            self.bounds.x + inset
        } else {
            self.bounds.x + self.bounds.width - inset - self.text_width()
        };
        let y = self.bounds.y + (self.bounds.height - self.text_style.size) / 2.0;
        Point::new(x, y)
    }
}

impl Widget for Label {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn measure(&self) -> Size {
        Size::new(self.text_width(), self.text_style.size)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn render(&self) -> Node {
        Node::new("span")
            .class_name("label")
            .style(self.style())
            .text(self.text())
            .widget_id(self.id)
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if self.text().is_empty() {
            return;
        }
        canvas.draw_text(self.text(), self.text_origin(), &self.text_style);
    }

    fn event(&mut self, _event: &PointerEvent) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
