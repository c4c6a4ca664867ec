use chrono::{DateTime, TimeZone};

/// Short 24-hour time of day, e.g. "14:05".
pub fn short_time<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.format("%H:%M").to_string()
}

/// Short weekday + month + day, e.g. "Mon Mar 10".
pub fn short_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.format("%a %b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_short_time() {
        let instant = Utc.with_ymd_and_hms(2025, 3, 10, 14, 5, 0).unwrap();
        assert_eq!(short_time(&instant), "14:05");
    }

    #[test]
    fn test_short_date() {
        let instant = Utc.with_ymd_and_hms(2025, 3, 10, 14, 5, 0).unwrap();
        assert_eq!(short_date(&instant), "Mon Mar 10");
    }

    #[test]
    fn test_same_instant_formats_identically() {
        let instant = Utc.with_ymd_and_hms(2025, 12, 3, 6, 0, 59).unwrap();
        assert_eq!(short_time(&instant), short_time(&instant.clone()));
        assert_eq!(short_date(&instant), short_date(&instant.clone()));
    }
}
