//! Core types and traits for Flick switch widgets.
//!
//! This crate provides the foundation the widgets are built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Pointer input: [`PointerEvent`] and the [`PointerSource`] capability
//! - Typed inline styles: [`Style`] with [`Style::merge`]
//! - Render output: [`Node`]
//! - The [`Widget`] and [`Canvas`] traits, and [`Mounted`] widgets

mod color;
mod event;
mod geometry;
mod mount;
mod node;
mod source;
pub mod style;
pub mod widget;

pub use color::{Color, ColorParseError};
pub use event::{PointerEvent, PointerKind};
pub use geometry::{Point, Rect, Size};
pub use mount::Mounted;
pub use node::Node;
pub use source::{Listener, ListenerId, PointerBus, PointerSource, Subscription};
pub use style::{
    Border, Display, Length, PointerEvents, Position, Style, Transform, Transition,
    TransitionProperty,
};
pub use widget::{Canvas, LayoutResult, TextStyle, Widget, WidgetId};
