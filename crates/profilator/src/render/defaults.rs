//! Bundled default profile cards.
//!
//! Compiled into the binary, so the table is immutable and needs no
//! initialization at runtime.

const PROFILATOR_SVG: &str = include_str!("../../assets/profilator.svg");
const BLANK_SVG: &str = include_str!("../../assets/blank.svg");
const NOT_FOUND_SVG: &str = include_str!("../../assets/404.svg");

/// One of the pre-made cards served for example, blank and error cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultProfile {
    /// Example card served at `/@profilator`.
    Profilator,
    /// Empty card served at `/@blank`.
    Blank,
    /// Card returned to image clients when nothing matched.
    NotFound,
}

impl DefaultProfile {
    pub const ALL: [Self; 3] = [Self::Profilator, Self::Blank, Self::NotFound];

    /// Look up a card by its symbolic key (`@profilator`, `@blank`, `404`).
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Profilator => "@profilator",
            Self::Blank => "@blank",
            Self::NotFound => "404",
        }
    }

    /// SVG document for this card.
    pub fn svg(self) -> &'static str {
        match self {
            Self::Profilator => PROFILATOR_SVG,
            Self::Blank => BLANK_SVG,
            Self::NotFound => NOT_FOUND_SVG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for profile in DefaultProfile::ALL {
            assert_eq!(DefaultProfile::from_key(profile.key()), Some(profile));
        }
        assert_eq!(DefaultProfile::from_key("@nobody"), None);
        assert_eq!(DefaultProfile::from_key("profilator"), None);
    }

    #[test]
    fn every_default_is_an_svg_document() {
        for profile in DefaultProfile::ALL {
            let svg = profile.svg().trim();
            assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""), "{profile:?}");
            assert!(svg.ends_with("</svg>"), "{profile:?}");
        }
    }

    #[test]
    fn not_found_card_says_so() {
        assert!(DefaultProfile::NotFound.svg().contains("User not found"));
        assert!(DefaultProfile::Profilator.svg().contains("@profilator"));
    }
}
