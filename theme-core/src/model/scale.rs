//! Color scale: eleven shades derived from one base color.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::color::Rgb;
use crate::config::{BASE_SHADE, SHADES};
use crate::error::{Result, ThemeError};

/// Shades keyed by [`SHADES`], lightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScale {
    shades: [Rgb; SHADES.len()],
}

impl ColorScale {
    /// Build a scale from shades ordered like [`SHADES`].
    pub fn from_shades(shades: [Rgb; SHADES.len()]) -> Self {
        Self { shades }
    }

    /// Look up a shade; `None` for keys outside [`SHADES`].
    pub fn get(&self, shade: u16) -> Option<Rgb> {
        SHADES
            .iter()
            .position(|&s| s == shade)
            .map(|idx| self.shades[idx])
    }

    /// Look up a shade, failing on unknown keys.
    pub fn shade(&self, shade: u16) -> Result<Rgb> {
        self.get(shade).ok_or(ThemeError::UnknownShade { shade })
    }

    /// The base color (shade 500).
    pub fn base(&self) -> Rgb {
        self[BASE_SHADE]
    }

    /// Iterate `(shade, color)` pairs, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (u16, Rgb)> + '_ {
        SHADES.iter().copied().zip(self.shades.iter().copied())
    }
}

impl std::ops::Index<u16> for ColorScale {
    type Output = Rgb;

    /// Panics on keys outside [`SHADES`]; use [`ColorScale::get`] for untrusted keys.
    fn index(&self, shade: u16) -> &Rgb {
        let idx = SHADES
            .iter()
            .position(|&s| s == shade)
            .unwrap_or_else(|| panic!("unknown shade {shade}"));
        &self.shades[idx]
    }
}

impl Serialize for ColorScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SHADES.len()))?;
        for (shade, color) in self.iter() {
            map.serialize_entry(&shade.to_string(), &color.to_hex())?;
        }
        map.end()
    }
}
