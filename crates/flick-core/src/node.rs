//! Render output: a small tree of styled nodes.

use crate::style::Style;
use crate::widget::WidgetId;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// A rendered element with class names, inline style, optional text and
/// children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Element tag (`div`, `span`, ...)
    pub tag: String,
    /// Space-separated class names
    pub class_name: String,
    /// Inline style
    pub style: Style,
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Owning widget
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_id: Option<WidgetId>,
    /// Test identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    /// Child nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty node with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set the class names.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Set the inline style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the owning widget.
    #[must_use]
    pub const fn widget_id(mut self, id: WidgetId) -> Self {
        self.widget_id = Some(id);
        self
    }

    /// Set the test identifier.
    #[must_use]
    pub fn test_id(mut self, id: Option<String>) -> Self {
        self.test_id = id;
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Check whether `class` is one of this node's class names.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.class_name.split_whitespace().any(|c| c == class)
    }

    /// Find the first node (self included, depth-first) carrying `class`.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Option<&Self> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_class(class))
    }

    /// Find the first node (self included, depth-first) with the test id.
    #[must_use]
    pub fn find_by_test_id(&self, id: &str) -> Option<&Self> {
        if self.test_id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_test_id(id))
    }

    /// Render as indented HTML-like markup.
    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out, 0);
        out
    }

    fn write_markup(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}<{}", self.tag);
        if !self.class_name.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.class_name));
        }
        let css = self.style.to_css();
        if !css.is_empty() {
            let _ = write!(out, " style=\"{}\"", escape(&css));
        }
        out.push('>');

        if self.children.is_empty() {
            if let Some(text) = &self.text {
                out.push_str(&escape(text));
            }
            let _ = writeln!(out, "</{}>", self.tag);
            return;
        }

        out.push('\n');
        if let Some(text) = &self.text {
            let _ = writeln!(out, "{indent}  {}", escape(text));
        }
        for child in &self.children {
            child.write_markup(out, depth + 1);
        }
        let _ = writeln!(out, "{indent}</{}>", self.tag);
    }
}

/// Escape markup-significant characters in text and attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
