//! Palette-to-terminal style mapping.
//!
//! The persisted palette stores `#rrggbb` strings; this module turns
//! them into crossterm [`ContentStyle`]s, one per transcript line
//! class. Unparsable colors (a hand-edited blob, for instance) fall
//! back to the default palette color for that slot rather than failing
//! the whole session.

use crossterm::style::{Color, ContentStyle, Stylize};
use cvsh_core::{LineKind, Palette, PaletteSlot, RgbColor};

/// Resolved terminal styles for one palette.
#[derive(Debug, Clone)]
pub struct StyleSet {
    pub outline: ContentStyle,
    pub text: ContentStyle,
    pub link: ContentStyle,
    pub accent: ContentStyle,
    pub warning: ContentStyle,
    /// When false every style renders as plain text (non-TTY stdout).
    pub color: bool,
}

fn slot_color(palette: &Palette, slot: PaletteSlot) -> Color {
    let hex = palette.get(slot);
    let rgb = RgbColor::from_hex(hex).unwrap_or_else(|| {
        RgbColor::from_hex(Palette::default().get(slot)).unwrap_or(RgbColor::new(255, 255, 255))
    });
    Color::Rgb { r: rgb.r, g: rgb.g, b: rgb.b }
}

impl StyleSet {
    /// Build styles from a palette.
    pub fn from_palette(palette: &Palette, color: bool) -> Self {
        let style = |c: Color| ContentStyle::new().with(c);
        Self {
            outline: style(slot_color(palette, PaletteSlot::Outline)),
            text: style(slot_color(palette, PaletteSlot::Text)),
            link: style(slot_color(palette, PaletteSlot::Link)).underlined(),
            accent: style(slot_color(palette, PaletteSlot::Accent)).bold(),
            warning: style(Color::Red),
            color,
        }
    }

    /// Style for one transcript line class.
    pub fn for_kind(&self, kind: LineKind) -> ContentStyle {
        if !self.color {
            return ContentStyle::new();
        }
        match kind {
            LineKind::Input => self.text,
            LineKind::Text => self.text,
            LineKind::Accent => self.accent,
            LineKind::Link => self.link,
            LineKind::Warning => self.warning,
        }
    }
}
