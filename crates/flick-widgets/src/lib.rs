//! Toggle switch and label widgets for Flick.

pub mod label;
pub mod switch;
pub mod theme;

pub use label::{Label, Labels};
pub use switch::{Callback, Switch, SwitchChanged, SwitchProps};
pub use theme::{CircleTheme, SwitchTheme, TrackTheme};
