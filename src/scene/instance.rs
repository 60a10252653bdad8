use glam::Vec3;

use super::plan::DisplayTarget;

/// A positioned element tile with display attributes.
///
/// Tiles are owned by exactly one [`ElementPool`](super::ElementPool);
/// leftover letters are not pooled and stay with the caller as
/// [`LiteralGlyph`]s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileInstance {
    /// Catalog key of the element this tile displays.
    pub atomic_number: u32,
    /// Center position in presentation space.
    pub position: Vec3,
    /// Display scale multiplier.
    pub scale: f32,
    /// Fill opacity in [0, 1].
    pub opacity: f32,
}

impl TileInstance {
    /// Construct a tile.
    #[must_use]
    pub fn new(
        atomic_number: u32,
        position: Vec3,
        scale: f32,
        opacity: f32,
    ) -> Self {
        Self {
            atomic_number,
            position,
            scale,
            opacity,
        }
    }

    /// A sibling tile copying this tile's static attributes (catalog key,
    /// scale) at a new position with overridden opacity.
    ///
    /// This is how zero-opacity placeholders are spawned before fading in;
    /// no live object graph is ever deep-copied.
    #[must_use]
    pub fn respawned_at(&self, position: Vec3, opacity: f32) -> Self {
        Self {
            atomic_number: self.atomic_number,
            position,
            scale: self.scale,
            opacity,
        }
    }

    /// This tile's current state as a morph/appear endpoint.
    #[must_use]
    pub fn display_target(&self) -> DisplayTarget {
        DisplayTarget {
            position: self.position,
            scale: self.scale,
            opacity: self.opacity,
        }
    }

    /// Overwrite display state with a plan endpoint.
    pub fn apply(&mut self, target: DisplayTarget) {
        self.position = target.position;
        self.scale = target.scale;
        self.opacity = target.opacity;
    }
}

/// A positioned leftover-letter glyph, owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteralGlyph {
    /// The (lowercased) character to draw; renderers usually upcase it.
    pub character: char,
    /// Center position in presentation space.
    pub position: Vec3,
    /// Display scale multiplier.
    pub scale: f32,
}
