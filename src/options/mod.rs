//! Centralized layout/display options with TOML preset support.
//!
//! All tweakable settings (tile footprint, grid scale factors, default tile
//! opacity, letter glyph scale) are consolidated here. Options serialize
//! to/from TOML for presentation presets.

mod display;
mod layout;

use std::path::Path;

pub use display::DisplayOptions;
pub use layout::LayoutOptions;
use serde::{Deserialize, Serialize};

use crate::error::KemioError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[display]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Grid geometry and scale factors.
    pub layout: LayoutOptions,
    /// Tile and letter display attributes.
    pub display: DisplayOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`KemioError::Io`] on read failure and
    /// [`KemioError::OptionsParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, KemioError> {
        let content = std::fs::read_to_string(path).map_err(KemioError::Io)?;
        toml::from_str(&content)
            .map_err(|e| KemioError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`KemioError::OptionsParse`] on serialization failure and
    /// [`KemioError::Io`] on write failure.
    pub fn save(&self, path: &Path) -> Result<(), KemioError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| KemioError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(KemioError::Io)?;
        }
        std::fs::write(path, content).map_err(KemioError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let parsed: Options =
            toml::from_str("[display]\ntile_opacity = 0.5\n").unwrap();
        assert_eq!(parsed.display.tile_opacity, 0.5);
        assert_eq!(parsed.layout, LayoutOptions::default());
    }
}
