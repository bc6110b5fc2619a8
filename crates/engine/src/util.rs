//! Shared helpers for parsing and numeric work.
//!
//! `parse_date` is the only fallible entry point used by callers converting raw
//! records; the other helpers are internal and keep the aggregations consistent
//! (same zero-safe ratio, same stable descending sort).

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::{EngineError, MoneyCents, ResultEngine};

/// Parse a calendar date as stored by the record store.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS`
/// timestamps. Only the calendar day is kept; for RFC 3339 input it is the day
/// in the timestamp's own offset.
///
/// ```rust
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(engine::parse_date("2024-03-05").unwrap(), day);
/// assert_eq!(engine::parse_date("2024-03-05T23:10:00+02:00").unwrap(), day);
/// assert!(engine::parse_date("05/03/2024").is_err());
/// ```
pub fn parse_date(value: &str) -> ResultEngine<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(timestamp.date());
        }
    }
    Err(EngineError::InvalidDate(format!("unparseable date: {trimmed:?}")))
}

/// `part / whole * 100`, or `0.0` when `whole` is not positive.
pub(crate) fn percent_of(part: MoneyCents, whole: MoneyCents) -> f64 {
    if !whole.is_positive() {
        return 0.0;
    }
    part.cents() as f64 / whole.cents() as f64 * 100.0
}

/// Relative change from `previous` to `current` in percent, `0.0` without a base.
pub(crate) fn percent_change(current: MoneyCents, previous: MoneyCents) -> f64 {
    if !previous.is_positive() {
        return 0.0;
    }
    (current - previous).cents() as f64 / previous.cents() as f64 * 100.0
}

/// Stable sort, largest amount first. Ties keep their input order.
pub(crate) fn sort_by_amount_desc<T>(rows: &mut [T], amount: impl Fn(&T) -> MoneyCents) {
    rows.sort_by(|a, b| amount(b).cmp(&amount(a)));
}

/// Case-insensitive ordering for labels, falling back to byte order.
pub(crate) fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Keep the first `limit` rows of an already sorted list.
pub fn top_n<T: Clone>(rows: &[T], limit: usize) -> Vec<T> {
    rows.iter().take(limit).cloned().collect()
}
