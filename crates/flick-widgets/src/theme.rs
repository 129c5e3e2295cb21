//! Static switch geometry and colors, and the pure style functions derived
//! from them.

use flick_core::{Border, Color, Display, Style, Transform, Transition, TransitionProperty};
use serde::{Deserialize, Serialize};

/// Track (background element) constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackTheme {
    /// Content width in pixels
    pub width: f32,
    /// Uniform padding in pixels
    pub padding: f32,
    /// Background color
    pub background: Color,
    /// Border stroke
    pub border: Border,
}

impl Default for TrackTheme {
    fn default() -> Self {
        Self {
            width: 100.0,
            padding: 4.0,
            background: Color::WHITE,
            border: Border::solid(1.0, Color::GRAY),
        }
    }
}

/// Circle (handle) constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleTheme {
    /// Height, and width at rest, in pixels
    pub height: f32,
    /// Corner radius in pixels
    pub border_radius: f32,
    /// Fill when the switch is on
    pub on_color: Color,
    /// Fill when the switch is off
    pub off_color: Color,
}

impl Default for CircleTheme {
    fn default() -> Self {
        Self {
            height: 35.0,
            border_radius: 35.0,
            on_color: Color::rgb8(0x70, 0xD6, 0x00),
            off_color: Color::rgb8(0xCF, 0xCF, 0xCF),
        }
    }
}

/// Full switch theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchTheme {
    /// Track constants
    pub track: TrackTheme,
    /// Circle constants
    pub circle: CircleTheme,
    /// Duration of the transform/width/color transition
    pub transition_ms: u32,
}

impl Default for SwitchTheme {
    fn default() -> Self {
        Self {
            track: TrackTheme::default(),
            circle: CircleTheme::default(),
            transition_ms: 200,
        }
    }
}

impl SwitchTheme {
    /// Horizontal circle offset for the given state.
    ///
    /// Off rests at `0`, on rests at `track.width - circle.height`. While an
    /// on switch is being dragged the handle is pulled back by half its
    /// height plus the track padding.
    #[must_use]
    pub fn translation(&self, on: bool, dragging: bool) -> f32 {
        if !on {
            return 0.0;
        }
        let rest = self.track.width - self.circle.height;
        if dragging {
            rest - (self.circle.height / 2.0 + self.track.padding)
        } else {
            rest
        }
    }

    /// Circle width; widened by half while dragging.
    #[must_use]
    pub fn circle_width(&self, dragging: bool) -> f32 {
        if dragging {
            self.circle.height * 1.5
        } else {
            self.circle.height
        }
    }

    /// Circle fill for the given state.
    #[must_use]
    pub const fn circle_color(&self, on: bool) -> Color {
        if on {
            self.circle.on_color
        } else {
            self.circle.off_color
        }
    }

    /// Track corner radius: half the track width.
    #[must_use]
    pub fn track_radius(&self) -> f32 {
        self.track.width / 2.0
    }

    /// Outer track size including padding and border on both sides.
    #[must_use]
    pub fn outer_size(&self) -> (f32, f32) {
        let inset = 2.0 * (self.track.padding + self.track.border.width);
        (self.track.width + inset, self.circle.height + inset)
    }

    /// Track style; independent of state.
    #[must_use]
    pub fn track_style(&self) -> Style {
        Style {
            width: Some(self.track.width),
            padding: Some(self.track.padding),
            border: Some(self.track.border),
            border_radius: Some(self.track_radius()),
            background: Some(self.track.background),
            ..Style::default()
        }
    }

    /// Circle style for the given state.
    #[must_use]
    pub fn circle_style(&self, on: bool, dragging: bool) -> Style {
        let base = Style {
            display: Some(Display::Block),
            height: Some(self.circle.height),
            border_radius: Some(self.circle.border_radius),
            transition: Some(Transition::new(
                [
                    TransitionProperty::Transform,
                    TransitionProperty::Width,
                    TransitionProperty::BackgroundColor,
                ],
                self.transition_ms,
            )),
            ..Style::default()
        };
        let state = Style {
            width: Some(self.circle_width(dragging)),
            background: Some(self.circle_color(on)),
            transform: Some(Transform::TranslateX(self.translation(on, dragging))),
            ..Style::default()
        };
        base.merge(&state)
    }
}
