// src/export/range.rs

use crate::core::calculator::range::DateRange;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{month_last_day, parse_date, parse_optional_date};
use chrono::NaiveDate;

/// First and last day covered by a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn expand_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let bad = || AppError::InvalidDate(p.to_string());

    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| bad())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(bad)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(bad)?;
            Ok((first, last))
        }
        7 => {
            let (ys, ms) = p.split_once('-').ok_or_else(bad)?;
            let y: i32 = ys.parse().map_err(|_| bad())?;
            let m: u32 = ms.parse().map_err(|_| bad())?;
            let last_day = month_last_day(y, m).ok_or_else(bad)?;
            let first = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(bad)?;
            let last = NaiveDate::from_ymd_opt(y, m, last_day).ok_or_else(bad)?;
            Ok((first, last))
        }
        10 => {
            let d = parse_date(p).ok_or_else(bad)?;
            Ok((d, d))
        }
        _ => Err(bad()),
    }
}

/// Parse a `--range` expression.
///
/// Supported:
/// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
/// - `YYYY:YYYY`, `YYYY-MM:YYYY-MM`, `YYYY-MM-DD:YYYY-MM-DD`
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match r.split_once(':') {
        Some((start_raw, end_raw)) => {
            let (start, end) = (start_raw.trim(), end_raw.trim());
            if start.len() != end.len() {
                return Err(AppError::InvalidDate(format!(
                    "{r} (start and end must have the same format)"
                )));
            }
            let (first, _) = expand_period(start)?;
            let (_, last) = expand_period(end)?;
            Ok((first, last))
        }
        None => expand_period(r.trim()),
    }
}

/// Build the query window from `--from`, `--to` and `--range`.
///
/// `--range` sets both bounds; an explicit `--from`/`--to` overrides the
/// matching one. `all` (or nothing) means unbounded.
pub fn resolve_range(
    from: Option<&String>,
    to: Option<&String>,
    range: Option<&String>,
) -> AppResult<DateRange> {
    let (mut start, mut end) = match range {
        Some(r) if !r.eq_ignore_ascii_case("all") => {
            let (s, e) = parse_range(r)?;
            (Some(s), Some(e))
        }
        _ => (None, None),
    };

    if let Some(d) = parse_optional_date(from)? {
        start = Some(d);
    }
    if let Some(d) = parse_optional_date(to)? {
        end = Some(d);
    }

    DateRange::new(start, end)
}
