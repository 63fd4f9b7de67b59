//! The four-color palette edited through `customize`.
//!
//! Colors are stored as `#rrggbb` strings so the palette blob stays a
//! plain JSON object; [`RgbColor`] parses them for validation here and
//! for terminal styling in the UI crate.

use serde::{Deserialize, Serialize};

use crate::suggest::{suggest, SUGGEST_THRESHOLD};

/// RGB color parsed from a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        // Exactly six hex digits; this also keeps the slices below on
        // char boundaries and rejects the `+ff` forms from_str_radix
        // would otherwise accept.
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self::new(r, g, b))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The four theme colors of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Card and panel borders.
    pub outline: String,
    /// Plain transcript text.
    pub text: String,
    /// URLs and secondary emphasis.
    pub link: String,
    /// Headings and the prompt.
    pub accent: String,
}

impl Default for Palette {
    fn default() -> Self {
        // The classic green-phosphor look of the original site.
        Self {
            outline: "#4ade80".to_string(),
            text: "#86efac".to_string(),
            link: "#bbf7d0".to_string(),
            accent: "#ffffff".to_string(),
        }
    }
}

impl Palette {
    /// Read the color of one slot.
    pub fn get(&self, slot: PaletteSlot) -> &str {
        match slot {
            PaletteSlot::Outline => &self.outline,
            PaletteSlot::Text => &self.text,
            PaletteSlot::Link => &self.link,
            PaletteSlot::Accent => &self.accent,
        }
    }

    /// Replace the color of one slot. The value must already be
    /// validated through [`RgbColor::from_hex`].
    pub fn set(&mut self, slot: PaletteSlot, color: String) {
        match slot {
            PaletteSlot::Outline => self.outline = color,
            PaletteSlot::Text => self.text = color,
            PaletteSlot::Link => self.link = color,
            PaletteSlot::Accent => self.accent = color,
        }
    }
}

/// Targets accepted by `customize <slot> <#rrggbb>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteSlot {
    Outline,
    Text,
    Link,
    Accent,
}

impl PaletteSlot {
    /// Valid `customize` targets, in suggestion order.
    pub const NAMES: &'static [&'static str] = &["outline", "text", "link", "accent"];

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "outline" => Some(Self::Outline),
            "text" => Some(Self::Text),
            "link" => Some(Self::Link),
            "accent" => Some(Self::Accent),
            _ => None,
        }
    }

    /// Closest valid slot name to a misspelled one, if any.
    pub fn closest(name: &str) -> Option<&'static str> {
        suggest(name, Self::NAMES, SUGGEST_THRESHOLD)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Outline => "outline",
            Self::Text => "text",
            Self::Link => "link",
            Self::Accent => "accent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parse_round_trip() {
        let color = RgbColor::from_hex("#4ade80").unwrap();
        assert_eq!(color, RgbColor::new(0x4a, 0xde, 0x80));
        assert_eq!(color.to_hex(), "#4ade80");
    }

    #[test]
    fn hex_parse_rejects_malformed_input() {
        assert!(RgbColor::from_hex("4ade80").is_none());
        assert!(RgbColor::from_hex("#4ade8").is_none());
        assert!(RgbColor::from_hex("#zzzzzz").is_none());
    }

    #[test]
    fn hex_parse_rejects_multibyte_input() {
        // 7 bytes but not 7 ASCII chars; must not panic mid-char.
        assert!(RgbColor::from_hex("#aé123").is_none());
        assert!(RgbColor::from_hex("#ffffé").is_none());
    }

    #[test]
    fn hex_parse_rejects_signed_components() {
        assert!(RgbColor::from_hex("#+1+2+3").is_none());
        assert!(RgbColor::from_hex("#ff+1ff").is_none());
    }

    #[test]
    fn default_palette_colors_are_valid_hex() {
        let palette = Palette::default();
        for slot in [
            PaletteSlot::Outline,
            PaletteSlot::Text,
            PaletteSlot::Link,
            PaletteSlot::Accent,
        ] {
            assert!(RgbColor::from_hex(palette.get(slot)).is_some());
        }
    }

    #[test]
    fn slot_set_and_get() {
        let mut palette = Palette::default();
        palette.set(PaletteSlot::Accent, "#ff4757".into());
        assert_eq!(palette.get(PaletteSlot::Accent), "#ff4757");
        assert_eq!(palette.get(PaletteSlot::Outline), "#4ade80");
    }

    #[test]
    fn slot_suggestions() {
        assert_eq!(PaletteSlot::closest("outlien"), Some("outline"));
        assert_eq!(PaletteSlot::closest("background"), None);
    }

    #[test]
    fn palette_json_round_trip() {
        let palette = Palette::default();
        let json = serde_json::to_string(&palette).unwrap();
        let parsed: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, palette);
    }
}
