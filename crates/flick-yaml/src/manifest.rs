//! Switch manifest loaded from YAML.

use crate::coerce::option_truthy;
use crate::error::ConfigError;
use flick_widgets::{Labels, Switch, SwitchProps, SwitchTheme};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Declarative description of one switch.
///
/// `on` and `off` accept any scalar and are coerced with
/// [`Loose::truthy`](crate::Loose::truthy). An explicit `null` is the same
/// as leaving the key out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchManifest {
    /// Start on
    #[serde(
        deserialize_with = "option_truthy",
        skip_serializing_if = "Option::is_none"
    )]
    pub on: Option<bool>,
    /// Start-off flag; the initial state comes from `on` alone
    #[serde(
        deserialize_with = "option_truthy",
        skip_serializing_if = "Option::is_none"
    )]
    pub off: Option<bool>,
    /// Label text for each state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    /// Theme overrides; unset fields keep their defaults
    pub theme: SwitchTheme,
    /// Test id attached to the root node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

impl SwitchManifest {
    /// Parse and validate a manifest from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, a color does not parse,
    /// or a theme value is out of range.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let manifest: Self = serde_yaml_ng::from_str(yaml)?;
        manifest.validate()?;
        debug!(
            on = ?manifest.on,
            off = ?manifest.off,
            labels = manifest.labels.is_some(),
            "loaded switch manifest"
        );
        Ok(manifest)
    }

    /// Read, parse and validate a manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails [`Self::from_yaml`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading switch manifest");
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Serialize back to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check theme values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let track = &self.theme.track;
        let circle = &self.theme.circle;

        positive("theme.track.width", track.width)?;
        positive("theme.circle.height", circle.height)?;
        non_negative("theme.track.padding", track.padding)?;
        non_negative("theme.track.border.width", track.border.width)?;
        non_negative("theme.circle.border_radius", circle.border_radius)?;
        Ok(())
    }

    /// Initial-state props.
    #[must_use]
    pub const fn props(&self) -> SwitchProps {
        SwitchProps {
            on: self.on,
            off: self.off,
        }
    }

    /// Construct the described switch.
    #[must_use]
    pub fn build(&self) -> Switch {
        let mut switch = Switch::from_props(self.props()).theme(self.theme);
        if let Some(labels) = &self.labels {
            switch = switch.labels(labels.clone());
        }
        if let Some(id) = &self.test_id {
            switch = switch.test_id(id.clone());
        }
        switch
    }
}

fn positive(field: &str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::invalid(
            field,
            format!("must be a positive number, got {value}"),
        ));
    }
    Ok(())
}

fn non_negative(field: &str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::invalid(
            field,
            format!("must be zero or more, got {value}"),
        ));
    }
    Ok(())
}
