//! Clock normalization and AM/PM bucketing.

use crate::models::slot::Meridiem;
use chrono::NaiveTime;

/// Canonical `HH:MM:SS` for an hour/minute pair, `None` when out of range.
pub fn normalize(hour: u32, minute: u32) -> Option<String> {
    NaiveTime::from_hms_opt(hour, minute, 0).map(|t| t.format("%H:%M:%S").to_string())
}

pub fn start_meridiem(hour: u32) -> Meridiem {
    if hour >= 12 { Meridiem::Pm } else { Meridiem::Am }
}

/// Closing exactly at noon counts as morning; 12:01 onwards is afternoon.
pub fn end_meridiem(hour: u32, minute: u32) -> Meridiem {
    if hour > 12 || (hour == 12 && minute > 0) {
        Meridiem::Pm
    } else {
        Meridiem::Am
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_and_appends_seconds() {
        assert_eq!(normalize(8, 0).as_deref(), Some("08:00:00"));
        assert_eq!(normalize(16, 30).as_deref(), Some("16:30:00"));
        assert_eq!(normalize(0, 5).as_deref(), Some("00:05:00"));
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(normalize(24, 0), None);
        assert_eq!(normalize(10, 60), None);
    }

    #[test]
    fn start_bucket() {
        assert_eq!(start_meridiem(11), Meridiem::Am);
        assert_eq!(start_meridiem(12), Meridiem::Pm);
        assert_eq!(start_meridiem(0), Meridiem::Am);
    }

    #[test]
    fn end_bucket_around_noon() {
        assert_eq!(end_meridiem(12, 0), Meridiem::Am);
        assert_eq!(end_meridiem(12, 1), Meridiem::Pm);
        assert_eq!(end_meridiem(13, 0), Meridiem::Pm);
        assert_eq!(end_meridiem(11, 59), Meridiem::Am);
    }
}
