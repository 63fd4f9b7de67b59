//! The box-drawn ID card.
//!
//! Two faces, flipped by the `card` command (and rendered again after
//! `clear`). The renderer produces plain transcript lines so the app
//! can style them with the active palette; the border is part of each
//! line, so a line's class colors the border too.

use cvsh_core::{Line, Profile};
use unicode_width::UnicodeWidthStr;

/// Which face of the card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

impl CardFace {
    pub fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

fn centered(text: &str, inner: usize) -> String {
    let width = UnicodeWidthStr::width(text);
    if width >= inner {
        return text.to_string();
    }
    let left = (inner - width) / 2;
    let right = inner - width - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

fn padded(text: &str, inner: usize) -> String {
    let width = UnicodeWidthStr::width(text);
    let fill = inner.saturating_sub(width);
    format!("{}{}", text, " ".repeat(fill))
}

fn boxed(kind_rows: Vec<(bool, String)>, inner: usize) -> Vec<Line> {
    let mut lines = Vec::with_capacity(kind_rows.len() + 2);
    lines.push(Line::text(format!("╭{}╮", "─".repeat(inner + 2))));
    for (accent, row) in kind_rows {
        let body = format!("│ {row} │");
        lines.push(if accent { Line::accent(body) } else { Line::text(body) });
    }
    lines.push(Line::text(format!("╰{}╯", "─".repeat(inner + 2))));
    lines
}

/// Render one face of the card at the given total width.
pub fn render(profile: &Profile, face: CardFace, width: usize) -> Vec<Line> {
    // Border and side padding take four columns.
    let inner = width.saturating_sub(4).max(20);
    match face {
        CardFace::Front => render_front(profile, inner),
        CardFace::Back => render_back(profile, inner),
    }
}

fn render_front(profile: &Profile, inner: usize) -> Vec<Line> {
    let photo = if profile.personal.photo_data_uri.is_some() {
        "[ photo on file ]"
    } else {
        "[ no photo ]"
    };
    let rows = vec![
        (false, centered(photo, inner)),
        (false, centered("", inner)),
        (true, centered(&profile.personal.name, inner)),
        (false, centered(&profile.personal.title, inner)),
        (false, centered(&"─".repeat(inner * 2 / 3), inner)),
        (false, centered("-- type 'card' to flip --", inner)),
    ];
    boxed(rows, inner)
}

fn render_back(profile: &Profile, inner: usize) -> Vec<Line> {
    let contact = &profile.contact;
    let footer = format!("[ ID Card v1.0 | Property of {} ]", profile.personal.name);
    let rows = vec![
        (true, padded("CONTACT", inner)),
        (false, padded(&"─".repeat(inner), inner)),
        (false, padded(&format!("Email:  {}", contact.email), inner)),
        (false, padded(&format!("Mobile: {}", contact.mobile), inner)),
        (false, padded(&format!("Status: {}", profile.personal.marital_status), inner)),
        (false, centered("", inner)),
        (false, centered("-- 'invite' to send an invitation --", inner)),
        (false, centered(&footer, inner)),
    ];
    boxed(rows, inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn faces_flip_back_and_forth() {
        assert_eq!(CardFace::Front.flipped(), CardFace::Back);
        assert_eq!(CardFace::Back.flipped(), CardFace::Front);
    }

    #[test]
    fn front_face_shows_name_and_title() {
        let profile = Profile::default();
        let lines = render(&profile, CardFace::Front, 46);
        let all: String = lines.iter().map(|l| l.text.as_str()).collect();
        assert!(all.contains("Karthi G"));
        assert!(all.contains("System Administrator"));
        assert!(all.contains("[ no photo ]"));
    }

    #[test]
    fn back_face_shows_contact_block() {
        let profile = Profile::default();
        let lines = render(&profile, CardFace::Back, 46);
        let all: String = lines.iter().map(|l| l.text.as_str()).collect();
        assert!(all.contains("CONTACT"));
        assert!(all.contains(&profile.contact.email));
        assert!(all.contains("Property of Karthi G"));
    }

    #[test]
    fn every_row_has_the_same_display_width() {
        let profile = Profile::default();
        for face in [CardFace::Front, CardFace::Back] {
            let lines = render(&profile, face, 46);
            let widths: Vec<usize> = lines
                .iter()
                .map(|l| UnicodeWidthStr::width(l.text.as_str()))
                .collect();
            assert!(widths.windows(2).all(|w| w[0] == w[1]), "ragged card: {widths:?}");
        }
    }

    #[test]
    fn photo_marker_follows_the_record() {
        let mut profile = Profile::default();
        profile.personal.photo_data_uri = Some("data:image/png;base64,AAAA".into());
        let lines = render(&profile, CardFace::Front, 46);
        let all: String = lines.iter().map(|l| l.text.as_str()).collect();
        assert!(all.contains("[ photo on file ]"));
    }
}
