//! Hex color parsing for the catalog resource.
//!
//! The element table stores colors as `#RRGGBB` strings; the rest of the
//! crate works with `[f32; 3]` RGB triples in [0, 1].

/// Parse a `#RRGGBB` (or bare `RRGGBB`) string into RGB components.
///
/// Returns `None` for anything that is not exactly six hex digits after an
/// optional leading `#`.
#[must_use]
pub fn parse_hex(text: &str) -> Option<[f32; 3]> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .ok()
            .map(|v| f32::from(v) / 255.0)
    };
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Format RGB components back into a `#RRGGBB` string.
///
/// Components are clamped to [0, 1] before quantization.
#[must_use]
pub fn to_hex(color: [f32; 3]) -> String {
    let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02X}{:02X}{:02X}",
        quantize(color[0]),
        quantize(color[1]),
        quantize(color[2])
    )
}

/// Serde adapters for hex-encoded `[f32; 3]` color fields.
pub mod hex {
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize a color triple as a `#RRGGBB` string.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn serialize<S: Serializer>(
        color: &[f32; 3],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex(*color))
    }

    /// Deserialize a `#RRGGBB` string into a color triple.
    ///
    /// # Errors
    ///
    /// Fails on strings that are not six hex digits.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[f32; 3], D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_hex(&text).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid hex color {text:?}"))
        })
    }
}
