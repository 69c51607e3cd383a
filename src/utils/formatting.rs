//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

/// Render a minute count as `[+|-]HH:MM`.
///
/// With `signed`, strictly positive values get `+`, strictly negative values
/// get `-` and zero gets no sign. Without `signed` only a negative value is
/// prefixed (`-`), which happens for sessions paired out of a ledger whose
/// order was broken by a deletion. Hours are not wrapped at 24.
pub fn format_minutes(minutes: i64, signed: bool) -> String {
    let sign = if minutes < 0 {
        "-"
    } else if signed && minutes > 0 {
        "+"
    } else {
        ""
    };

    let abs_m = minutes.unsigned_abs();
    format!("{}{:02}:{:02}", sign, abs_m / 60, abs_m % 60)
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Remove ANSI colour sequences.
pub fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Option<Regex>> = OnceLock::new();
    match ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok()) {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// Terminal columns taken by `s` once colours are stripped.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}
