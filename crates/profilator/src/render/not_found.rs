//! HTML 404 page for browsers.

use maud::{Markup, html};

use super::components::page_shell;

/// Render the 404 page shown to clients that asked for HTML.
pub fn render(path: &str) -> Markup {
    let body = html! {
        img src="/@blank" alt="" width="420" height="141";
        h1 { "Not Found" }
        p {
            "Nothing lives at " code { (path) } ". "
            "Profile cards are served at "
            code { "/" em { "username" } }
            " for any GitHub user."
        }
        a href="/" { "Back to Profilator" }
    };

    page_shell("Not Found", body)
}
