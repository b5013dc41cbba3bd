//! Askama templates for the web frontend.

use askama::Template;

/// Map-and-sidebar shell. All itinerary data arrives via the JSON API; the
/// template only carries the static page structure.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;
