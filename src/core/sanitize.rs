// src/core/sanitize.rs

use crate::config::consts::SHEET_NAME_MAX;

/// Collapse runs of whitespace (incl. `&nbsp;` after decoding) into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Spreadsheet-safe sheet name: no `[]*?:/\`, bounded length, never empty.
pub fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = normalize_ws(name)
        .chars()
        .map(|c| if matches!(c, '[' | ']' | '*' | '?' | ':' | '/' | '\\') { '_' } else { c })
        .take(SHEET_NAME_MAX)
        .collect();
    let cleaned = cleaned.trim().to_string();
    if cleaned.is_empty() { "Sheet".to_string() } else { cleaned }
}

/// Parse an integer cell, tolerating a leading `+` (goal differences) and stray spaces.
pub fn parse_int<T: std::str::FromStr>(s: &str) -> Option<T> {
    let t = normalize_ws(s);
    t.strip_prefix('+').unwrap_or(&t).parse().ok()
}
