use serde::{Deserialize, Serialize};

/// Tile and letter display attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayOptions {
    /// Fill opacity of a fully visible element tile.
    pub tile_opacity: f32,
    /// Scale factor for leftover letter glyphs, relative to tile width.
    pub letter_scale: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            tile_opacity: 0.8,
            letter_scale: 1.2,
        }
    }
}
