//! Typed inline style records.
//!
//! A [`Style`] holds one optional field per visual attribute. Widgets build a
//! base record and layer state-dependent records on top with [`Style::merge`];
//! CSS text is only produced at the edge by [`Style::to_css`].

use crate::color::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A CSS length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    /// Absolute pixels
    Px(f32),
    /// Percentage of the containing block
    Percent(f32),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// Positioning scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Out of flow, offsets relative to the containing block
    Absolute,
}

/// Display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Display {
    /// Block box
    Block,
}

/// Whether an element is a target for pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEvents {
    /// Pointer events pass through the element
    None,
}

/// Solid border.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Border {
    /// Stroke width in pixels
    pub width: f32,
    /// Stroke color
    pub color: Color,
}

impl Border {
    /// Create a solid border.
    #[must_use]
    pub const fn solid(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// 2D translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    /// Horizontal translation in pixels
    TranslateX(f32),
    /// Vertical translation
    TranslateY(Length),
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TranslateX(v) => write!(f, "translateX({v}px)"),
            Self::TranslateY(len) => write!(f, "translateY({len})"),
        }
    }
}

/// Property animated by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionProperty {
    /// `transform`
    Transform,
    /// `width`
    Width,
    /// `background-color`
    BackgroundColor,
}

impl TransitionProperty {
    const fn css_name(self) -> &'static str {
        match self {
            Self::Transform => "transform",
            Self::Width => "width",
            Self::BackgroundColor => "background-color",
        }
    }
}

/// Transition hint: the listed properties animate over `duration_ms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Animated properties
    pub properties: Vec<TransitionProperty>,
    /// Duration in milliseconds
    pub duration_ms: u32,
}

impl Transition {
    /// Create a transition over the given properties.
    #[must_use]
    pub fn new(properties: impl Into<Vec<TransitionProperty>>, duration_ms: u32) -> Self {
        Self {
            properties: properties.into(),
            duration_ms,
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, property) in self.properties.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}ms", property.css_name(), self.duration_ms)?;
        }
        Ok(())
    }
}

/// Inline style record. `None` means "not set".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Positioning scheme
    pub position: Option<Position>,
    /// Display mode
    pub display: Option<Display>,
    /// Top offset
    pub top: Option<Length>,
    /// Left offset
    pub left: Option<Length>,
    /// Right offset
    pub right: Option<Length>,
    /// Width in pixels
    pub width: Option<f32>,
    /// Height in pixels
    pub height: Option<f32>,
    /// Uniform padding in pixels
    pub padding: Option<f32>,
    /// Border
    pub border: Option<Border>,
    /// Corner radius in pixels
    pub border_radius: Option<f32>,
    /// Background color
    pub background: Option<Color>,
    /// Transform
    pub transform: Option<Transform>,
    /// Transition hint
    pub transition: Option<Transition>,
    /// Pointer event targeting
    pub pointer_events: Option<PointerEvents>,
}

impl Style {
    /// Empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer `overlay` on top of `self`; fields set in `overlay` win.
    #[must_use]
    pub fn merge(&self, overlay: &Self) -> Self {
        Self {
            position: overlay.position.or(self.position),
            display: overlay.display.or(self.display),
            top: overlay.top.or(self.top),
            left: overlay.left.or(self.left),
            right: overlay.right.or(self.right),
            width: overlay.width.or(self.width),
            height: overlay.height.or(self.height),
            padding: overlay.padding.or(self.padding),
            border: overlay.border.or(self.border),
            border_radius: overlay.border_radius.or(self.border_radius),
            background: overlay.background.or(self.background),
            transform: overlay.transform.or(self.transform),
            transition: overlay
                .transition
                .clone()
                .or_else(|| self.transition.clone()),
            pointer_events: overlay.pointer_events.or(self.pointer_events),
        }
    }

    /// Render as inline CSS declarations in a stable order.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut decls: Vec<String> = Vec::new();
        if let Some(position) = self.position {
            let value = match position {
                Position::Absolute => "absolute",
            };
            decls.push(format!("position: {value}"));
        }
        if let Some(display) = self.display {
            let value = match display {
                Display::Block => "block",
            };
            decls.push(format!("display: {value}"));
        }
        if let Some(top) = self.top {
            decls.push(format!("top: {top}"));
        }
        if let Some(left) = self.left {
            decls.push(format!("left: {left}"));
        }
        if let Some(right) = self.right {
            decls.push(format!("right: {right}"));
        }
        if let Some(width) = self.width {
            decls.push(format!("width: {width}px"));
        }
        if let Some(height) = self.height {
            decls.push(format!("height: {height}px"));
        }
        if let Some(padding) = self.padding {
            decls.push(format!("padding: {padding}px"));
        }
        if let Some(border) = self.border {
            decls.push(format!(
                "border: {}px solid {}",
                border.width,
                border.color.to_css()
            ));
        }
        if let Some(radius) = self.border_radius {
            decls.push(format!("border-radius: {radius}px"));
        }
        if let Some(background) = self.background {
            decls.push(format!("background-color: {}", background.to_css()));
        }
        if let Some(transform) = self.transform {
            decls.push(format!("transform: {transform}"));
        }
        if let Some(transition) = &self.transition {
            decls.push(format!("transition: {transition}"));
        }
        if let Some(pointer_events) = self.pointer_events {
            let value = match pointer_events {
                PointerEvents::None => "none",
            };
            decls.push(format!("pointer-events: {value}"));
        }
        decls.join("; ")
    }
}
