//! Pointer events delivered to widgets.
//!
//! Mouse and touch input are unified into three phases: down, up and leave.
//! Touch start/end map onto down/up so widgets only handle one gesture model.

use crate::geometry::Point;
use crate::widget::WidgetId;
use serde::{Deserialize, Serialize};

/// Kind of device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    /// Mouse pointer
    #[default]
    Mouse,
    /// Touch contact
    Touch,
}

/// Pointer input event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    /// Pointer pressed (mouse down, touch start)
    Down {
        /// Position of the press
        position: Point,
        /// Device kind
        kind: PointerKind,
    },
    /// Pointer released (mouse up, touch end)
    Up {
        /// Position of the release
        position: Point,
        /// Device kind
        kind: PointerKind,
    },
    /// Pointer left the bounds of a widget
    Leave {
        /// Widget the pointer left
        target: WidgetId,
    },
}

impl PointerEvent {
    /// Mouse button pressed at a position.
    #[must_use]
    pub const fn mouse_down(position: Point) -> Self {
        Self::Down {
            position,
            kind: PointerKind::Mouse,
        }
    }

    /// Mouse button released at a position.
    #[must_use]
    pub const fn mouse_up(position: Point) -> Self {
        Self::Up {
            position,
            kind: PointerKind::Mouse,
        }
    }

    /// Touch contact started at a position.
    #[must_use]
    pub const fn touch_start(position: Point) -> Self {
        Self::Down {
            position,
            kind: PointerKind::Touch,
        }
    }

    /// Touch contact ended at a position.
    #[must_use]
    pub const fn touch_end(position: Point) -> Self {
        Self::Up {
            position,
            kind: PointerKind::Touch,
        }
    }

    /// Pointer left the given widget.
    #[must_use]
    pub const fn leave(target: WidgetId) -> Self {
        Self::Leave { target }
    }

    /// Position of the event, if it carries one.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::Down { position, .. } | Self::Up { position, .. } => Some(*position),
            Self::Leave { .. } => None,
        }
    }

    /// Device kind, if the event carries one.
    #[must_use]
    pub const fn kind(&self) -> Option<PointerKind> {
        match self {
            Self::Down { kind, .. } | Self::Up { kind, .. } => Some(*kind),
            Self::Leave { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_maps_onto_down_up() {
        let p = Point::new(1.0, 2.0);
        assert!(matches!(
            PointerEvent::touch_start(p),
            PointerEvent::Down {
                kind: PointerKind::Touch,
                ..
            }
        ));
        assert!(matches!(
            PointerEvent::touch_end(p),
            PointerEvent::Up {
                kind: PointerKind::Touch,
                ..
            }
        ));
    }

    #[test]
    fn test_event_accessors() {
        let p = Point::new(5.0, 6.0);
        assert_eq!(PointerEvent::mouse_down(p).position(), Some(p));
        assert_eq!(PointerEvent::mouse_up(p).kind(), Some(PointerKind::Mouse));
        assert_eq!(PointerEvent::leave(WidgetId::new(1)).position(), None);
        assert_eq!(PointerEvent::leave(WidgetId::new(1)).kind(), None);
    }

    #[test]
    fn test_event_serde_shape() {
        let json = serde_json::to_value(PointerEvent::touch_end(Point::new(1.0, 2.0))).unwrap();
        assert_eq!(json["type"], "up");
        assert_eq!(json["kind"], "touch");
        assert_eq!(json["position"]["x"], 1.0);
    }
}
