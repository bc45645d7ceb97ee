// Build-time settings for the board and the solver endpoint.

use crate::model::Side;

// Local Flask solver by default; `--features production` targets the deployed one.
#[cfg(not(feature = "production"))]
const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
#[cfg(feature = "production")]
const DEFAULT_API_URL: &str = "https://letterbox-solver.example.com";

/// Tiles drawn along each side of the box.
pub const SLOT_COUNT: usize = 3;

/// Base URL of the solver. `LETTERBOX_API_URL` at compile time overrides the feature choice.
pub fn api_base_url() -> &'static str {
    match option_env!("LETTERBOX_API_URL") {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_API_URL,
    }
}

pub fn placeholder_template(side: Side) -> &'static str {
    match side {
        Side::Top => "Top letters",
        Side::Right => "Right letters",
        Side::Bottom => "Bottom letters",
        Side::Left => "Left letters",
    }
}

/// Joins `base` and `path` with exactly one slash between them.
pub fn endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
