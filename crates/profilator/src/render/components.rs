//! Shared helpers for SVG and HTML output.

use maud::{Markup, PreEscaped, html};

/// Font stack used by every card.
pub const FONT_FAMILY: &str =
    "-apple-system, BlinkMacSystemFont, Segoe UI, Helvetica, Arial, sans-serif";

/// Inline CSS for the HTML 404 page.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Helvetica,Arial,sans-serif;line-height:1.6;color:#1f2328;background:#f6f8fa;min-height:100vh;display:flex;align-items:center;justify-content:center;padding:1.5rem}
main{max-width:520px;text-align:center}
h1{font-size:2rem;margin-bottom:.5rem}
p{color:#57606a;margin-bottom:1.25rem}
img{max-width:100%;height:auto;margin-bottom:1.5rem}
a{color:#0969da;text-decoration:none}
a:hover{text-decoration:underline}
@media(prefers-color-scheme:dark){
body{background:#0d1117;color:#e6edf3}
p{color:#8d96a0}
a{color:#4493f8}
}
"#;

/// Escape text for use in XML character data or a double-quoted attribute.
pub fn escape(text: &str) -> String {
    html! { (text) }.into_string()
}

/// Truncate a string to at most `max_chars` characters, appending "..." if
/// truncated.
pub fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((end, _)) => format!("{}...", &s[..end]),
    }
}

/// Wrap page content in the shared HTML shell.
pub fn page_shell(title: &str, body_content: Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - Profilator" }
                meta name="robots" content="noindex";
                link rel="icon" type="image/svg+xml" href="/favicon.svg";
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main { (body_content) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_markup_characters() {
        assert_eq!(
            escape(r#"<script>alert("x") & co</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; co&lt;/script&gt;"
        );
    }

    #[test]
    fn escape_plain_text_unchanged() {
        assert_eq!(escape("The Octocat"), "The Octocat");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn truncate_empty_string() {
        assert_eq!(truncate("", 10), "");
    }

    #[test]
    fn truncate_shorter_than_max() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn truncate_exact_length() {
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn truncate_longer_than_max() {
        assert_eq!(truncate("hello world", 5), "hello...");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("café", 4), "café");
        assert_eq!(truncate("你好世界", 2), "你好...");
        assert_eq!(truncate("🎉hello", 1), "🎉...");
    }

    #[test]
    fn truncate_zero_max() {
        assert_eq!(truncate("hello", 0), "...");
    }

    #[test]
    fn page_shell_escapes_title() {
        let page = page_shell("<b>", html! { p { "body" } }).into_string();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("&lt;b&gt; - Profilator"));
        assert!(page.contains("<p>body</p>"));
    }
}
