//! YAML configuration for Flick switches.
//!
//! A manifest describes one switch: its initial state, optional labels and
//! theme overrides. Every field is optional.
//!
//! ```
//! use flick_yaml::SwitchManifest;
//!
//! let manifest = SwitchManifest::from_yaml("on: yes\ntheme:\n  track:\n    width: 120\n")
//!     .expect("valid manifest");
//! let switch = manifest.build();
//! assert!(switch.is_on());
//! assert_eq!(switch.get_theme().track.width, 120.0);
//! ```

mod coerce;
mod error;
mod manifest;

pub use coerce::Loose;
pub use error::ConfigError;
pub use manifest::SwitchManifest;
