//! Loose boolean coercion for initial-state flags.
//!
//! Flags written as `on: 1`, `on: "yes"` or `on: true` all mean on.

use serde::{Deserialize, Deserializer};

/// A scalar accepted where a boolean is expected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Loose {
    /// Real boolean
    Bool(bool),
    /// Integer; nonzero is true
    Int(i64),
    /// Float; nonzero and not NaN is true
    Float(f64),
    /// Text; see [`Loose::truthy`]
    Text(String),
}

impl Loose {
    /// Coerce to a boolean.
    ///
    /// Text is matched case-insensitively: `true`, `yes`, `on` and `1` are
    /// true; `false`, `no`, `off`, `0` and the empty string are false; any
    /// other non-empty text is true.
    #[must_use]
    pub fn truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0 && !f.is_nan(),
            Self::Text(s) => !matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "" | "false" | "no" | "off" | "0"
            ),
        }
    }
}

/// Deserialize an optional flag with loose coercion; `null` stays absent.
pub(crate) fn option_truthy<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Loose>::deserialize(deserializer)?.map(|v| v.truthy()))
}
