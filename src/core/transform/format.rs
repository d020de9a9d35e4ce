//! Field formatters
//!
//! Total functions from optional raw field values to display text. A missing
//! value renders as an empty string; a value that can't be parsed is shown
//! as stored rather than failing the export.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Parse the timestamp shapes the store emits into a UTC instant
///
/// Accepts RFC 3339, Postgres `timestamptz` text (`2025-01-15 10:30:00+00`),
/// naive timestamps (taken as UTC) and plain `YYYY-MM-DD` dates (UTC midnight).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Render a timestamp as its UTC calendar date, `YYYY-MM-DD`
///
/// # Examples
///
/// ```
/// use clinic_export::core::transform::format::format_date;
///
/// assert_eq!(format_date(Some("2025-01-15T10:30:00Z")), "2025-01-15");
/// assert_eq!(format_date(None), "");
/// assert_eq!(format_date(Some("next week")), "next week");
/// ```
pub fn format_date(raw: Option<&str>) -> String {
    match raw {
        None => String::new(),
        Some(value) => match parse_timestamp(value) {
            Some(dt) => dt.format("%Y-%m-%d").to_string(),
            None => value.to_string(),
        },
    }
}

/// Render an amount in pesos: `₱` prefix, thousands separators, 2 decimals
///
/// The sign follows the currency glyph (`₱-1,234.50`).
///
/// # Examples
///
/// ```
/// use clinic_export::core::transform::format::format_currency;
///
/// assert_eq!(format_currency(Some(1234.5)), "₱1,234.50");
/// assert_eq!(format_currency(None), "");
/// ```
pub fn format_currency(amount: Option<f64>) -> String {
    let Some(amount) = amount else {
        return String::new();
    };

    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();

    format!(
        "₱{sign}{}.{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Whole days from `now` until `expiry`, rounded up
///
/// Past expiries give zero or negative values. Returns `None` when the
/// expiry is absent or can't be parsed.
pub fn days_remaining(expiry: Option<&str>, now: DateTime<Utc>) -> Option<i64> {
    let expiry = parse_timestamp(expiry?)?;
    let millis = (expiry - now).num_milliseconds();
    Some(-(-millis).div_euclid(MILLIS_PER_DAY))
}
