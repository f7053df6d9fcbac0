//! Client classification from request headers.
//!
//! Decides whether a miss should be answered with an HTML error page or with
//! the default 404 image. Image proxies that embed cards in rendered markdown
//! must always get an image, otherwise readers see a broken-image icon.

use axum::http::HeaderMap;
use axum::http::header::{ACCEPT, USER_AGENT};

/// User-Agent prefixes of known image-proxying fetchers (matched
/// case-insensitively).
const IMAGE_PROXY_AGENTS: &[&str] = &["github-camo", "camo-asset-proxy", "googleimageproxy"];

/// What the request headers say about the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// The client prefers HTML over images.
    pub accepts_html: bool,
    /// The client is a known image-proxy bot.
    pub is_image_proxy_bot: bool,
}

impl Classification {
    /// Whether a miss should be served as the default 404 image.
    pub fn wants_image(self) -> bool {
        self.is_image_proxy_bot || !self.accepts_html
    }
}

/// Classify a request from its `Accept` and `User-Agent` headers.
pub fn classify(headers: &HeaderMap) -> Classification {
    let accept = headers.get(ACCEPT).and_then(|v| v.to_str().ok());
    let user_agent = headers.get(USER_AGENT).and_then(|v| v.to_str().ok());

    Classification {
        accepts_html: accepts_html(accept),
        is_image_proxy_bot: user_agent.is_some_and(is_image_proxy_bot),
    }
}

/// Whether an `Accept` header ranks `text/html` at least as high as an SVG
/// image. A missing header accepts anything, HTML included.
pub fn accepts_html(accept: Option<&str>) -> bool {
    let Some(accept) = accept.map(str::trim).filter(|a| !a.is_empty()) else {
        return true;
    };

    let ranges: Vec<MediaRange<'_>> = accept.split(',').filter_map(MediaRange::parse).collect();
    let html = quality(&ranges, "text", "html");
    let image = quality(&ranges, "image", "svg+xml");

    html > 0.0 && html >= image
}

/// Whether a User-Agent belongs to a known image-proxy bot.
pub fn is_image_proxy_bot(user_agent: &str) -> bool {
    let ua = user_agent.trim_start().to_ascii_lowercase();
    IMAGE_PROXY_AGENTS.iter().any(|prefix| ua.starts_with(prefix))
}

/// One entry of an `Accept` header.
#[derive(Debug)]
struct MediaRange<'a> {
    kind: &'a str,
    subtype: &'a str,
    q: f32,
}

impl<'a> MediaRange<'a> {
    fn parse(entry: &'a str) -> Option<Self> {
        let mut parts = entry.split(';');
        let (kind, subtype) = parts.next()?.trim().split_once('/')?;

        let q = parts
            .filter_map(|p| p.trim().strip_prefix("q="))
            .find_map(|q| q.trim().parse::<f32>().ok())
            .map(|q| q.clamp(0.0, 1.0))
            .unwrap_or(1.0);

        Some(Self {
            kind: kind.trim(),
            subtype: subtype.trim(),
            q,
        })
    }

    /// Specificity when this range matches `kind/subtype`: 2 for an exact
    /// match, 1 for `kind/*`, 0 for `*/*`.
    fn specificity(&self, kind: &str, subtype: &str) -> Option<u8> {
        let kind_matches = self.kind.eq_ignore_ascii_case(kind);
        if kind_matches && self.subtype.eq_ignore_ascii_case(subtype) {
            Some(2)
        } else if kind_matches && self.subtype == "*" {
            Some(1)
        } else if self.kind == "*" && self.subtype == "*" {
            Some(0)
        } else {
            None
        }
    }
}

/// Quality assigned to `kind/subtype` by the most specific matching range.
fn quality(ranges: &[MediaRange<'_>], kind: &str, subtype: &str) -> f32 {
    ranges
        .iter()
        .filter_map(|r| r.specificity(kind, subtype).map(|s| (s, r.q)))
        .max_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)))
        .map(|(_, q)| q)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    const BROWSER_PAGE: &str =
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";
    const BROWSER_IMAGE: &str = "image/avif,image/webp,image/apng,image/svg+xml,image/*,*/*;q=0.8";
    const CAMO_UA: &str = "github-camo (876de43e)";

    #[test]
    fn browser_navigation_accepts_html() {
        assert!(accepts_html(Some(BROWSER_PAGE)));
    }

    #[test]
    fn image_tag_request_does_not_accept_html() {
        assert!(!accepts_html(Some(BROWSER_IMAGE)));
        assert!(!accepts_html(Some("image/*")));
    }

    #[test]
    fn missing_or_wildcard_accept_prefers_html() {
        assert!(accepts_html(None));
        assert!(accepts_html(Some("")));
        assert!(accepts_html(Some("*/*")));
    }

    #[test]
    fn explicit_html_refusal() {
        assert!(!accepts_html(Some("text/html;q=0, */*")));
    }

    #[test]
    fn quality_breaks_ties() {
        assert!(accepts_html(Some("image/svg+xml;q=0.5, text/html")));
        assert!(!accepts_html(Some("image/svg+xml, text/html;q=0.5")));
    }

    #[test]
    fn malformed_entries_are_ignored() {
        assert!(accepts_html(Some("garbage, text/html;q=abc")));
        assert!(!accepts_html(Some("application/json")));
    }

    #[test]
    fn camo_is_image_proxy() {
        assert!(is_image_proxy_bot(CAMO_UA));
        assert!(is_image_proxy_bot("GitHub-Camo"));
        assert!(is_image_proxy_bot("GoogleImageProxy"));
    }

    #[test]
    fn regular_agents_are_not_proxies() {
        assert!(!is_image_proxy_bot(
            "Mozilla/5.0 (X11; Linux x86_64; rv:131.0) Gecko/20100101 Firefox/131.0"
        ));
        assert!(!is_image_proxy_bot("curl/8.5.0"));
        assert!(!is_image_proxy_bot(""));
    }

    #[test]
    fn classify_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_PAGE));
        headers.insert(USER_AGENT, HeaderValue::from_static(CAMO_UA));

        let c = classify(&headers);
        assert!(c.accepts_html);
        assert!(c.is_image_proxy_bot);
        assert!(c.wants_image());
    }

    #[test]
    fn classify_browser_page_wants_html() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_PAGE));
        headers.insert(USER_AGENT, HeaderValue::from_static("Mozilla/5.0"));

        assert!(!classify(&headers).wants_image());
    }

    #[test]
    fn classify_empty_headers_wants_html() {
        let c = classify(&HeaderMap::new());
        assert!(c.accepts_html);
        assert!(!c.is_image_proxy_bot);
        assert!(!c.wants_image());
    }
}
