use chrono::{DateTime, Utc};

pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

pub fn format_last_login(ts: Option<&DateTime<Utc>>) -> String {
    ts.map(format_date).unwrap_or_else(|| "Never".to_string())
}

/// `12.5MB used`
pub fn format_storage_mb(mb: f64) -> String {
    format!("{:.1}MB used", mb)
}

/// Megabytes to gigabytes with one decimal, e.g. `1536` -> `1.5`.
pub fn mb_to_gb(mb: i64) -> String {
    format!("{:.1}", mb as f64 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_dates_and_never() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 17, 4, 0).unwrap();
        assert_eq!(format_date(&ts), "2024-03-09");
        assert_eq!(format_last_login(Some(&ts)), "2024-03-09");
        assert_eq!(format_last_login(None), "Never");
    }

    #[test]
    fn formats_storage() {
        assert_eq!(format_storage_mb(0.0), "0.0MB used");
        assert_eq!(format_storage_mb(12.46), "12.5MB used");
        assert_eq!(mb_to_gb(1536), "1.5");
        assert_eq!(mb_to_gb(0), "0.0");
    }
}
