//! Scale normalization for the `scale` query parameter.

/// Smallest accepted scale.
pub const MIN_SCALE: u32 = 1;

/// Largest accepted scale.
pub const MAX_SCALE: u32 = 5;

/// Scale used when the parameter is absent or not a number.
pub const DEFAULT_SCALE: u32 = 1;

/// Upper bound on the scale used to size the avatar download. GitHub's
/// avatars stop gaining detail well before the card's own maximum.
pub const MAX_AVATAR_SCALE: u32 = 3;

/// Avatar edge length in pixels at scale 1.
pub const AVATAR_BASE_SIZE: u32 = 101;

/// A card scale, always within `MIN_SCALE..=MAX_SCALE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scale(u32);

impl Scale {
    /// Normalize a raw query value.
    ///
    /// Absent, empty or non-numeric input yields the default scale. Numeric
    /// input (including `0`, negatives and fractions) is rounded and clamped,
    /// so `0` becomes `MIN_SCALE` rather than the default.
    ///
    /// Numbers follow web number syntax rather than Rust's: `0x`/`0o`/`0b`
    /// prefixes and `Infinity` are accepted, while `inf` and `nan` are not.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self(DEFAULT_SCALE);
        };
        match parse_number(raw) {
            Some(value) => Self::clamp(value),
            None => Self(DEFAULT_SCALE),
        }
    }

    /// Round and clamp a numeric scale into range. NaN maps to the default.
    pub fn clamp(value: f64) -> Self {
        if value.is_nan() {
            return Self(DEFAULT_SCALE);
        }
        let rounded = value.round().clamp(MIN_SCALE as f64, MAX_SCALE as f64);
        Self(rounded as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Pixel size requested from the avatar host, capped at 3x regardless of
    /// the card scale.
    pub fn avatar_size(self) -> u32 {
        AVATAR_BASE_SIZE * self.0.min(MAX_AVATAR_SCALE)
    }
}

/// Parse a trimmed, non-empty numeric literal. `None` means not a number.
fn parse_number(raw: &str) -> Option<f64> {
    match raw {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match raw.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &raw[2..];
        if digits.is_empty() {
            return None;
        }
        // Accumulated in f64 so long literals can't overflow
        return digits.chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        });
    }

    // Rust also reads "inf", "infinity" and "nan"; exponents are the only
    // letters a decimal literal may carry here.
    if raw.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    raw.parse::<f64>().ok()
}

impl Default for Scale {
    fn default() -> Self {
        Self(DEFAULT_SCALE)
    }
}
