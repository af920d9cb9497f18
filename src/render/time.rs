use chrono::{DateTime, Local, Utc};

/// Timestamp label for inbox messages: date with year, plus time.
pub fn full_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%b %-d, %Y, %I:%M %p")
        .to_string()
}

/// Shorter label used on todo items: month and day, plus time.
pub fn short_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%b %-d, %I:%M %p")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local_afternoon() -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(2026, 1, 5, 15, 4, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn full_timestamp_includes_year_and_time() {
        assert_eq!(full_timestamp(local_afternoon()), "Jan 5, 2026, 03:04 PM");
    }

    #[test]
    fn short_timestamp_omits_the_year() {
        assert_eq!(short_timestamp(local_afternoon()), "Jan 5, 03:04 PM");
    }
}
