//! SVG and HTML rendering.
//!
//! Profile cards are SVG text built from a fixed template; untrusted values
//! are escaped with maud before they are spliced in. The HTML 404 page is a
//! maud template.

pub mod components;
pub mod defaults;
pub mod not_found;
pub mod profile;

pub use defaults::DefaultProfile;
pub use profile::{ProfileCard, render as render_profile};
