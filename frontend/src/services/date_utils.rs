use chrono::{Datelike, Duration, Local, NaiveDate};

/// Today's date in the browser's local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date as YYYY-MM-DD for date inputs and query parameters
pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Inclusive range for the "Last N Days" presets: N days before the
/// reference date through the reference date itself.
pub fn last_n_days_range(reference: NaiveDate, days: i64) -> (String, String) {
    let start = reference - Duration::days(days);
    (to_iso(start), to_iso(reference))
}

/// Inclusive range from the first of the reference month through the
/// reference date ("This Month" preset).
pub fn month_to_date_range(reference: NaiveDate) -> (String, String) {
    let first = NaiveDate::from_ymd_opt(reference.year(), reference.month(), 1)
        .unwrap_or(reference);
    (to_iso(first), to_iso(reference))
}

/// Format a service timestamp (RFC 3339 or bare YYYY-MM-DD) for
/// display, e.g. "January 5, 2025". Unparseable input is shown as-is.
pub fn format_timestamp_for_display(timestamp: &str) -> String {
    if let Some(date_part) = timestamp.split('T').next() {
        if let Ok(parts) = date_part.split('-').collect::<Vec<_>>().try_into() {
            let [year, month, day]: [&str; 3] = parts;
            if let (Ok(y), Ok(m), Ok(d)) = (year.parse::<u32>(), month.parse::<u32>(), day.parse::<u32>()) {
                return format!("{} {}, {}", month_name(m), d, y);
            }
        }
    }
    timestamp.to_string()
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "January",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_n_days_range_crosses_month_boundaries() {
        let reference = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        assert_eq!(
            last_n_days_range(reference, 30),
            ("2025-02-13".to_string(), "2025-03-15".to_string())
        );
        assert_eq!(
            last_n_days_range(reference, 7),
            ("2025-03-08".to_string(), "2025-03-15".to_string())
        );
    }

    #[test]
    fn test_month_to_date_range() {
        let reference = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        assert_eq!(
            month_to_date_range(reference),
            ("2025-03-01".to_string(), "2025-03-15".to_string())
        );

        // First of the month is a single-day range
        let first = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(
            month_to_date_range(first),
            ("2025-03-01".to_string(), "2025-03-01".to_string())
        );
    }

    #[test]
    fn test_format_timestamp_for_display() {
        assert_eq!(
            format_timestamp_for_display("2025-01-05T08:00:00+08:00"),
            "January 5, 2025"
        );
        assert_eq!(format_timestamp_for_display("2025-12-31"), "December 31, 2025");
        assert_eq!(format_timestamp_for_display("not a date"), "not a date");
    }
}
