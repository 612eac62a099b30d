//! Display formatting for sizes and upload dates.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const DATE_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Formats a byte count with binary units and at most two decimals (`1.5 KB`, `0 Bytes`).
pub fn format_file_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded} {}", SIZE_UNITS[unit])
}

/// Formats an ISO-8601 upload timestamp in the local time zone.
pub fn format_upload_date(iso: &str) -> String {
    format_upload_date_in(iso, &Local)
}

/// Formats an ISO-8601 upload timestamp in `tz`, returning the input unchanged when it does not
/// parse.
pub fn format_upload_date_in<Tz: TimeZone>(iso: &str, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    match DateTime::parse_from_rfc3339(iso) {
        Ok(instant) => instant.with_timezone(tz).format(DATE_FORMAT).to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;

    #[test]
    fn sizes_use_binary_units() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(100), "100 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024 + 300 * 1024), "5.29 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
        assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn dates_render_in_the_requested_zone() {
        assert_eq!(
            format_upload_date_in("2024-05-01T12:34:56.000Z", &Utc),
            "2024/05/01 12:34"
        );
        let east8 = FixedOffset::east_opt(8 * 3600).expect("offset");
        assert_eq!(
            format_upload_date_in("2024-05-01T20:00:00.000Z", &east8),
            "2024/05/02 04:00"
        );
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_upload_date_in("yesterday", &Utc), "yesterday");
    }
}
