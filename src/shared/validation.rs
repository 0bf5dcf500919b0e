// src/shared/validation.rs
use regex::Regex;
use std::sync::OnceLock;

fn http_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^https?://[A-Za-z0-9]([A-Za-z0-9.-]*[A-Za-z0-9])?(:\d{1,5})?(/\S*)?$")
            .expect("Invalid URL regex")
    })
}

fn hex_color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex"))
}

/// Accepts absolute http(s) URLs only. Relative paths, other schemes and
/// whitespace-containing strings are rejected.
pub fn is_http_url(input: &str) -> bool {
    http_url_regex().is_match(input.trim())
}

/// `#RRGGBB` only.
pub fn is_hex_color(input: &str) -> bool {
    hex_color_regex().is_match(input.trim())
}
