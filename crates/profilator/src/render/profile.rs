//! Profile card SVG renderer.
//!
//! Layout (at scale 1, in viewBox units):
//! - 420x141 rounded card with a light border
//! - 101x101 avatar clipped to a circle at (20, 20)
//! - Display name and `@username` to the right of the avatar
//!
//! The `viewBox` is fixed; scale only multiplies the outer `width` and
//! `height`, so the card stays sharp at every size.

use super::components::{FONT_FAMILY, escape, truncate};
use crate::scale::{AVATAR_BASE_SIZE, Scale};

/// Card dimensions at scale 1.
pub const CARD_WIDTH: u32 = 420;
pub const CARD_HEIGHT: u32 = 141;

/// Padding around the avatar.
const PADDING: u32 = 20;

/// Text column start.
const TEXT_X: u32 = PADDING * 2 + AVATAR_BASE_SIZE;

/// Longest display name shown before truncating.
const MAX_NAME_CHARS: usize = 20;

/// Longest username shown before truncating.
const MAX_USERNAME_CHARS: usize = 24;

/// Everything needed to render one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard<'a> {
    /// GitHub login.
    pub username: &'a str,
    /// Name shown in bold.
    pub display_name: &'a str,
    /// Avatar as a `data:` URI.
    pub image: &'a str,
    pub scale: Scale,
}

/// Render a profile card as a standalone SVG document.
///
/// Pure and deterministic; all text is escaped before it is embedded.
pub fn render(card: &ProfileCard<'_>) -> String {
    let scale = card.scale.get();
    let width = CARD_WIDTH * scale;
    let height = CARD_HEIGHT * scale;

    let name = escape(&truncate(card.display_name, MAX_NAME_CHARS));
    let handle = escape(&truncate(card.username, MAX_USERNAME_CHARS));
    let title = escape(&format!("{} (@{})", card.display_name, card.username));
    let image = escape(card.image);

    let radius = AVATAR_BASE_SIZE as f32 / 2.0;
    let center = PADDING as f32 + radius;

    let mut svg = String::with_capacity(1024 + image.len());

    svg.push_str(&format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {w} {h}" role="img"><title>{title}</title>"##,
        w = CARD_WIDTH,
        h = CARD_HEIGHT,
    ));

    svg.push_str(&format!(
        r##"<rect x="0.5" y="0.5" width="{w}" height="{h}" rx="12" fill="#ffffff" stroke="#d0d7de"/>"##,
        w = CARD_WIDTH - 1,
        h = CARD_HEIGHT - 1,
    ));

    svg.push_str(&format!(
        r##"<defs><clipPath id="avatar"><circle cx="{center}" cy="{center}" r="{radius}"/></clipPath></defs><circle cx="{center}" cy="{center}" r="{radius}" fill="#eaeef2"/><image href="{image}" x="{PADDING}" y="{PADDING}" width="{AVATAR_BASE_SIZE}" height="{AVATAR_BASE_SIZE}" clip-path="url(#avatar)" preserveAspectRatio="xMidYMid slice"/>"##,
    ));

    svg.push_str(&format!(
        r##"<text x="{TEXT_X}" y="64" font-family="{FONT_FAMILY}" font-size="24" font-weight="600" fill="#1f2328">{name}</text><text x="{TEXT_X}" y="94" font-family="{FONT_FAMILY}" font-size="16" fill="#57606a">@{handle}</text>"##,
    ));

    svg.push_str("</svg>");
    svg
}
