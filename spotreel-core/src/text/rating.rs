//! Star rendering for ratings shown on intro and profile scenes.
//!
//! Scores are on a ten-point scale and shown as up to [`MAX_STARS`] stars.

use std::sync::LazyLock;

use regex::Regex;

use crate::records::model::Scalar;

/// Glyph repeated once per star.
pub const STAR: &str = "★";
/// Upper bound on rendered stars.
pub const MAX_STARS: u32 = 5;

static STAR_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"r([0-9]+)").expect("star class pattern"));

/// Convert a ten-point score into `round(score / 2)` stars, clamped to `0..=5`.
pub fn stars_from_score(score: f64) -> String {
    if !score.is_finite() {
        return String::new();
    }
    let stars = (score / 2.0).round().clamp(0.0, f64::from(MAX_STARS)) as usize;
    STAR.repeat(stars)
}

/// Stars for a spot's `overall_rating`; non-numeric ratings are returned as text.
pub fn rating_to_stars(rating: &Scalar) -> String {
    match rating.as_f64() {
        Some(score) => stars_from_score(score),
        None => rating.to_string(),
    }
}

/// Stars for free-form rating text.
///
/// Understands scraped CSS classes (`"rating-main-score rating r3"` gives three
/// stars), `"8.5/10"`, and bare numbers. Any other text is returned unchanged.
pub fn rating_text_to_stars(value: &str) -> String {
    if value.contains("rating r") {
        if let Some(caps) = STAR_CLASS.captures(value) {
            let stars = caps[1].parse::<u32>().unwrap_or(MAX_STARS).min(MAX_STARS);
            return STAR.repeat(stars as usize);
        }
    }

    if value.contains("/10") {
        if let Some(score) = parse_leading_f64(&value.replace("/10", "")) {
            return stars_from_score(score);
        }
    }

    match parse_leading_f64(value) {
        Some(score) => stars_from_score(score),
        None => value.to_owned(),
    }
}

/// Parse the longest decimal number at the start of `s`, ignoring leading
/// whitespace and any trailing text (`"8.5 stars"` gives `8.5`).
pub fn parse_leading_f64(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || digits > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    s[..end].parse::<f64>().ok()
}

#[cfg(test)]
#[path = "../../tests/unit/text/rating.rs"]
mod tests;
