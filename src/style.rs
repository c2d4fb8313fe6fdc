//! # Notation Style
//!
//! How note names are spelled, and how a `B` is read.
//!
//! - **German notation**: `H` is B natural and a lone `B` is B flat.
//! - **Long chord names**: accidentals are written as suffixes (`Cis`, `Des`)
//!   instead of signs (`C#`, `Db`).
//!
//! The style is a plain value handed to every parse and render call. It can be
//! loaded from a YAML settings file:
//!
//! ```yaml
//! german-notation: true
//! long-chord-names: false
//! ```

use crate::error::ChordError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Spelling convention for note names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NotationStyle {
    pub german_notation: bool,
    pub long_chord_names: bool,
}

/// Raw style settings for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawStyle {
    german_notation: Option<bool>,
    long_chord_names: Option<bool>,
}

impl NotationStyle {
    pub fn new(german_notation: bool, long_chord_names: bool) -> Self {
        Self {
            german_notation,
            long_chord_names,
        }
    }

    /// Parse a YAML settings document. Missing keys keep their defaults and an
    /// empty document yields the default style.
    ///
    /// # Example
    /// ```
    /// use wordslive::NotationStyle;
    ///
    /// let style = NotationStyle::from_yaml("german-notation: true")?;
    /// assert!(style.german_notation);
    /// assert!(!style.long_chord_names);
    /// # Ok::<(), wordslive::ChordError>(())
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self, ChordError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawStyle =
            serde_yaml::from_str(content).map_err(|e| ChordError::ConfigError(e.to_string()))?;

        let defaults = Self::default();
        Ok(Self {
            german_notation: raw.german_notation.unwrap_or(defaults.german_notation),
            long_chord_names: raw.long_chord_names.unwrap_or(defaults.long_chord_names),
        })
    }

    /// Read a YAML settings file
    pub fn load(path: &Path) -> Result<Self, ChordError> {
        let content = std::fs::read_to_string(path)?;
        let style = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), ?style, "loaded notation style");
        Ok(style)
    }

    /// Serialize back to the YAML settings format
    pub fn to_yaml(&self) -> Result<String, ChordError> {
        serde_yaml::to_string(self).map_err(|e| ChordError::OutputError(e.to_string()))
    }

    /// Replace each setting that is given, in either direction
    pub fn with_overrides(self, german_notation: Option<bool>, long_chord_names: Option<bool>) -> Self {
        Self {
            german_notation: german_notation.unwrap_or(self.german_notation),
            long_chord_names: long_chord_names.unwrap_or(self.long_chord_names),
        }
    }
}
