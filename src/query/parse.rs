//! Query string tokenizer and value parsers.
//!
//! Percent-decoding and key-value extraction.

use alloc::string::String;
use alloc::vec::Vec;

use super::ParseWarning;
use super::instructions::Instructions;
use crate::strategy::Strategy;

/// Known output keys that should be preserved in `extras` without warnings.
/// Sorted for binary search.
const KNOWN_EXTRAS: &[&str] = &[
    "cache",
    "encoder",
    "format",
    "jpeg.progressive",
    "jpeg.quality",
    "lossless",
    "png.quality",
    "quality",
    "webp.lossless",
    "webp.quality",
];

/// Parse a query string into Instructions + warnings.
pub(crate) fn parse_query(query: &str) -> (Instructions, Vec<ParseWarning>) {
    let mut inst = Instructions::new();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(&raw_key);
        let value = percent_decode(&raw_value);
        let key_lower = key.to_ascii_lowercase();

        dispatch_key(&key_lower, &value, &mut inst, &mut warnings);
    }

    (inst, warnings)
}

fn dispatch_key(key: &str, value: &str, inst: &mut Instructions, warnings: &mut Vec<ParseWarning>) {
    match key {
        // Dimensions
        "w" | "width" => {
            if let Some(w) = parse_dimension(value) {
                set_or_warn(&mut inst.w, Some(w), key, value, warnings);
            } else {
                warnings.push(ParseWarning::ValueInvalid {
                    key: "w",
                    value: String::from(value),
                    reason: "expected a positive integer",
                });
            }
        }
        "h" | "height" => {
            if let Some(h) = parse_dimension(value) {
                set_or_warn(&mut inst.h, Some(h), key, value, warnings);
            } else {
                warnings.push(ParseWarning::ValueInvalid {
                    key: "h",
                    value: String::from(value),
                    reason: "expected a positive integer",
                });
            }
        }

        // Focal point
        "focus" => {
            if let Some(p) = parse_pair(value) {
                set_or_warn(&mut inst.focus, Some(p), key, value, warnings);
            } else {
                warnings.push(ParseWarning::ValueInvalid {
                    key: "focus",
                    value: String::from(value),
                    reason: "expected x,y pixel coordinates",
                });
            }
        }
        "focus.percent" | "c.focus" => {
            if let Some(p) = parse_pair(value) {
                set_or_warn(&mut inst.focus_percent, Some(p), key, value, warnings);
            } else {
                warnings.push(ParseWarning::ValueInvalid {
                    key: "focus.percent",
                    value: String::from(value),
                    reason: "expected x,y percentages (0-100)",
                });
            }
        }

        // Strategy chain
        "strategy" => {
            if let Some(s) = parse_strategies(value) {
                set_or_warn(&mut inst.strategies, Some(s), key, value, warnings);
            } else {
                warnings.push(ParseWarning::ValueInvalid {
                    key: "strategy",
                    value: String::from(value),
                    reason: "expected center|align|zoom, comma separated",
                });
            }
        }

        // Known output keys → extras, no warning
        _ => {
            if KNOWN_EXTRAS.binary_search(&key).is_ok() {
                inst.extras.insert(String::from(key), String::from(value));
            } else {
                warnings.push(ParseWarning::KeyNotRecognized {
                    key: String::from(key),
                    value: String::from(value),
                });
            }
        }
    }
}

/// Set a field, warning on duplicate.
fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    if let Some(v) = parsed {
        if field.is_some() {
            warnings.push(ParseWarning::DuplicateKey {
                key: String::from(key),
                value: String::from(value),
            });
        }
        *field = Some(v);
    }
}

// ---- Value parsers ----

fn parse_dimension(s: &str) -> Option<i32> {
    s.trim().parse::<i32>().ok().filter(|&v| v > 0)
}

/// Two comma-separated f64 values.
fn parse_pair(s: &str) -> Option<[f64; 2]> {
    let (x, y) = s.split_once(',')?;
    let x: f64 = x.trim().parse().ok()?;
    let y: f64 = y.trim().parse().ok()?;
    if x.is_finite() && y.is_finite() {
        Some([x, y])
    } else {
        None
    }
}

/// Comma-separated strategy names. Empty entries are skipped; an empty list
/// or any unknown name rejects the whole value.
fn parse_strategies(s: &str) -> Option<Vec<Strategy>> {
    let mut out = Vec::new();
    for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        out.push(part.parse::<Strategy>().ok()?);
    }
    if out.is_empty() { None } else { Some(out) }
}

// ---- Query string tokenizer ----

/// Split query string on '&'.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    // Strip leading '?' if present (caller may or may not have stripped it)
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (String, String) {
    match pair.split_once('=') {
        Some((k, v)) => (String::from(k), String::from(v)),
        None => (String::from(pair), String::new()),
    }
}

/// Percent-decode a URL component. Also handles '+' as space.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => decoded.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    decoded.push(hi << 4 | lo);
                    i += 3;
                    continue;
                }
                decoded.push(b'%');
            }
            b => decoded.push(b),
        }
        i += 1;
    }
    // Escapes that do not form valid UTF-8 become U+FFFD.
    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extras_is_sorted() {
        for w in KNOWN_EXTRAS.windows(2) {
            assert!(
                w[0] < w[1],
                "KNOWN_EXTRAS not sorted: {:?} >= {:?}",
                w[0],
                w[1]
            );
        }
    }

    #[test]
    fn parse_basic_dimensions() {
        let (inst, warnings) = parse_query("w=800&h=600");
        assert_eq!(inst.w, Some(800));
        assert_eq!(inst.h, Some(600));
        assert!(warnings.is_empty());
    }

    #[test]
    fn parse_width_height_aliases() {
        let (inst, _) = parse_query("width=800&height=600");
        assert_eq!(inst.w, Some(800));
        assert_eq!(inst.h, Some(600));
    }

    #[test]
    fn non_positive_dimensions_rejected() {
        let (inst, warnings) = parse_query("w=-10&h=0");
        assert_eq!(inst.w, None);
        assert_eq!(inst.h, None);
        assert_eq!(warnings.len(), 2);
        assert!(
            warnings
                .iter()
                .all(|w| matches!(w, ParseWarning::ValueInvalid { .. }))
        );
    }

    #[test]
    fn parse_focus_pixels() {
        let (inst, warnings) = parse_query("focus=120,45.5");
        assert_eq!(inst.focus, Some([120.0, 45.5]));
        assert!(warnings.is_empty());
    }

    #[test]
    fn parse_focus_percent_aliases() {
        let (inst, _) = parse_query("focus.percent=30,70");
        assert_eq!(inst.focus_percent, Some([30.0, 70.0]));
        let (inst, _) = parse_query("c.focus=10,20");
        assert_eq!(inst.focus_percent, Some([10.0, 20.0]));
    }

    #[test]
    fn malformed_focus_warns() {
        let (inst, warnings) = parse_query("focus=12");
        assert_eq!(inst.focus, None);
        assert!(warnings.iter().any(|w| matches!(
            w,
            ParseWarning::ValueInvalid { key: "focus", .. }
        )));
    }

    #[test]
    fn parse_strategy_list() {
        let (inst, warnings) = parse_query("strategy=center,zoom");
        assert_eq!(
            inst.strategies,
            Some(alloc::vec![
                Strategy::CenterOnFocalPoint,
                Strategy::ZoomOnFocalPoint
            ])
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn parse_strategy_case_insensitive() {
        let (inst, _) = parse_query("strategy=Zoom");
        assert_eq!(inst.strategies, Some(alloc::vec![Strategy::ZoomOnFocalPoint]));
    }

    #[test]
    fn unknown_strategy_rejects_value() {
        let (inst, warnings) = parse_query("strategy=center,squash");
        assert_eq!(inst.strategies, None);
        assert!(warnings.iter().any(|w| matches!(
            w,
            ParseWarning::ValueInvalid { key: "strategy", .. }
        )));
    }

    #[test]
    fn known_extras_preserved() {
        let (inst, warnings) = parse_query("w=800&format=webp&quality=80");
        assert_eq!(inst.extras.get("format").map(String::as_str), Some("webp"));
        assert_eq!(inst.extras.get("quality").map(String::as_str), Some("80"));
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn unknown_key_warns() {
        let (_, warnings) = parse_query("w=800&foobar=baz");
        assert!(warnings.iter().any(|w| matches!(
            w,
            ParseWarning::KeyNotRecognized { key, .. } if key == "foobar"
        )));
    }

    #[test]
    fn percent_decoding_works() {
        let (inst, _) = parse_query("focus=10%2C20");
        assert_eq!(inst.focus, Some([10.0, 20.0]));
    }

    #[test]
    fn percent_decoding_keeps_multibyte_utf8() {
        assert_eq!(percent_decode("caf%C3%A9"), "café");
        assert_eq!(percent_decode("café+au+lait"), "café au lait");
        let (inst, _) = parse_query("format=%E2%9C%93");
        assert_eq!(inst.extras.get("format").map(String::as_str), Some("✓"));
    }

    #[test]
    fn percent_decoding_replaces_invalid_utf8() {
        assert_eq!(percent_decode("a%FFb"), "a\u{fffd}b");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
    }

    #[test]
    fn non_ascii_key_is_reported_intact() {
        let (_, warnings) = parse_query("%C3%84rger=1");
        assert_eq!(
            warnings,
            alloc::vec![ParseWarning::KeyNotRecognized {
                key: String::from("Ärger"),
                value: String::from("1"),
            }]
        );
    }

    #[test]
    fn leading_question_mark_stripped() {
        let (inst, _) = parse_query("?w=800&h=600");
        assert_eq!(inst.w, Some(800));
        assert_eq!(inst.h, Some(600));
    }

    #[test]
    fn duplicate_key_warns() {
        let (inst, warnings) = parse_query("w=800&width=400");
        // Last value wins
        assert_eq!(inst.w, Some(400));
        assert!(
            warnings
                .iter()
                .any(|w| matches!(w, ParseWarning::DuplicateKey { .. }))
        );
    }

    #[test]
    fn uppercase_keys_accepted() {
        let (inst, _) = parse_query("W=10&H=20&FOCUS=1,2");
        assert_eq!(inst.w, Some(10));
        assert_eq!(inst.h, Some(20));
        assert_eq!(inst.focus, Some([1.0, 2.0]));
    }
}
