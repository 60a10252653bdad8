use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Grid geometry: the unit tile footprint and per-axis scale factors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutOptions {
    /// Display width of one element tile, in presentation units.
    pub tile_width: f32,
    /// Display height of one element tile, in presentation units.
    pub tile_height: f32,
    /// Extra horizontal spacing multiplier between grid columns.
    pub horizontal_scale: f32,
    /// Extra vertical spacing multiplier between grid rows.
    pub vertical_scale: f32,
}

impl LayoutOptions {
    /// Per-axis grid-to-render multiplier (z passes through unscaled).
    #[must_use]
    pub fn tile_scale(&self) -> Vec3 {
        Vec3::new(
            self.tile_width * self.horizontal_scale,
            self.tile_height * self.vertical_scale,
            1.0,
        )
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            // The reference tile is a 2.8-unit frame at 0.8 scale.
            tile_width: 2.24,
            tile_height: 2.24,
            horizontal_scale: 1.0,
            vertical_scale: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_scale_multiplies_per_axis() {
        let options = LayoutOptions {
            tile_width: 2.0,
            tile_height: 3.0,
            horizontal_scale: 0.5,
            vertical_scale: 2.0,
        };
        assert_eq!(options.tile_scale(), Vec3::new(1.0, 6.0, 1.0));
    }
}
