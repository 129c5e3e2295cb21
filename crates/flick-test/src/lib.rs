#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_panics_doc)]
//! Testing harness for Flick widgets.
//!
//! [`Harness`] mounts a widget on its own [`PointerBus`](flick_core::PointerBus)
//! and plays the role of the host event loop: tests push pointer events and
//! assert on the rendered [`Node`](flick_core::Node) tree.
//!
//! ```
//! use flick_core::{Node, Point, PointerEvent, Rect, Size, Widget, WidgetId};
//! use flick_core::widget::{Canvas, LayoutResult};
//! use flick_test::Harness;
//! use std::any::Any;
//!
//! struct Dot { id: WidgetId, pressed: bool }
//!
//! impl Widget for Dot {
//!     fn id(&self) -> WidgetId { self.id }
//!     fn measure(&self) -> Size { Size::new(10.0, 10.0) }
//!     fn layout(&mut self, bounds: Rect) -> LayoutResult { LayoutResult { size: bounds.size() } }
//!     fn render(&self) -> Node {
//!         Node::new("div").class_name(if self.pressed { "pressed" } else { "idle" })
//!     }
//!     fn paint(&self, _canvas: &mut dyn Canvas) {}
//!     fn event(&mut self, event: &PointerEvent) -> Option<Box<dyn Any + Send>> {
//!         self.pressed = matches!(event, PointerEvent::Down { .. });
//!         None
//!     }
//! }
//!
//! let mut harness = Harness::new(Dot { id: WidgetId::next(), pressed: false });
//! harness.assert_class("idle");
//! harness.mouse_down_at(Point::new(1.0, 1.0));
//! harness.assert_class("pressed");
//! ```

mod canvas;
mod harness;

pub use canvas::{DrawCommand, RecordingCanvas};
pub use harness::Harness;
