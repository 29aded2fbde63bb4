//! HTML/XML character entity decoding for text pulled from the content API.
//!
//! Decoding runs three passes over the whole string, in order:
//!
//! 1. every entry of [`NAMED_ENTITIES`], in table order (`&amp;` first),
//! 2. decimal references (`&#64;`),
//! 3. hexadecimal references (`&#x40;`, `&#X40;`).
//!
//! Because the passes are sequential, a double-escaped `&amp;#64;` resolves all
//! the way to `@`; API payloads are frequently escaped twice. Each pass runs
//! once, though: `&amp;amp;` becomes `&amp;`, not `&`, and only a second
//! decode finishes it.
//!
//! Numeric references that do not name a usable scalar value (overflow,
//! surrogates, anything above `U+10FFFF`, or NUL) are left untouched.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;

/// Named entities and their literal replacements, in substitution order.
pub const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    // Rendered as a plain space; reel text is laid out by the renderer.
    ("&nbsp;", " "),
    ("&copy;", "\u{00A9}"),
    ("&reg;", "\u{00AE}"),
    ("&trade;", "\u{2122}"),
    ("&euro;", "\u{20AC}"),
    ("&pound;", "\u{00A3}"),
    ("&yen;", "\u{00A5}"),
    ("&cent;", "\u{00A2}"),
    ("&sect;", "\u{00A7}"),
    ("&para;", "\u{00B6}"),
    ("&bull;", "\u{2022}"),
    ("&hellip;", "\u{2026}"),
    ("&ndash;", "\u{2013}"),
    ("&mdash;", "\u{2014}"),
    ("&lsquo;", "\u{2018}"),
    ("&rsquo;", "\u{2019}"),
    ("&ldquo;", "\u{201C}"),
    ("&rdquo;", "\u{201D}"),
    ("&laquo;", "\u{00AB}"),
    ("&raquo;", "\u{00BB}"),
];

static DECIMAL_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#([0-9]+);").expect("decimal entity pattern"));

static HEX_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#[xX]([0-9A-Fa-f]+);").expect("hex entity pattern"));

/// Decode named and numeric character entities in `text`.
///
/// Never fails. Text without a `&` is returned as-is.
///
/// ```
/// assert_eq!(spotreel::decode_entities("Johnson &amp; Johnson"), "Johnson & Johnson");
/// assert_eq!(spotreel::decode_entities("&#64; &#x40;"), "@ @");
/// ```
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_owned();
    }

    let mut decoded = text.to_owned();
    for &(entity, literal) in NAMED_ENTITIES {
        if decoded.contains(entity) {
            decoded = decoded.replace(entity, literal);
        }
    }

    let decoded = replace_numeric_refs(&DECIMAL_REF, &decoded, 10);
    replace_numeric_refs(&HEX_REF, &decoded, 16)
}

/// Like [`decode_entities`], with an absent input normalized to `""`.
pub fn decode_entities_opt(text: Option<&str>) -> String {
    text.map(decode_entities).unwrap_or_default()
}

/// Recursively decode every string leaf of a JSON value.
///
/// Objects and arrays are rebuilt with decoded contents; numbers, booleans and
/// `null` are copied unchanged. Object keys are not decoded. The input is not
/// modified.
pub fn decode_entities_in_value(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(decode_entities(s)),
        Value::Array(items) => Value::Array(items.iter().map(decode_entities_in_value).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(k, v)| (k.clone(), decode_entities_in_value(v)))
                .collect(),
        ),
        Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
    }
}

fn replace_numeric_refs(pattern: &Regex, text: &str, radix: u32) -> String {
    pattern
        .replace_all(text, |caps: &Captures<'_>| match scalar_for(&caps[1], radix) {
            Some(ch) => ch.to_string(),
            None => caps[0].to_owned(),
        })
        .into_owned()
}

fn scalar_for(digits: &str, radix: u32) -> Option<char> {
    let code = u32::from_str_radix(digits, radix).ok()?;
    if code == 0 {
        return None;
    }
    char::from_u32(code)
}

#[cfg(test)]
#[path = "../../tests/unit/text/entities.rs"]
mod tests;
