//! SLA display strings for partner cards and the order tracking sheet.

/// Formats a partner's preparation time.
///
/// Under an hour it is shown in whole minutes (`0.5` → `"30m"`); otherwise
/// the hour value is shown as given (`2` → `"2h"`, `1.5` → `"1.5h"`).
///
/// ## Example
/// ```rust
/// use bazaar_core::sla::format_prep_time;
///
/// assert_eq!(format_prep_time(0.5), "30m");
/// assert_eq!(format_prep_time(2.0), "2h");
/// ```
pub fn format_prep_time(hours: f64) -> String {
    if hours < 1.0 {
        format!("{}m", (hours * 60.0).round())
    } else {
        format!("{}h", hours)
    }
}

/// Formats a delivery window, e.g. `"20-30 mins"`.
///
/// Callers are responsible for `min <= max`.
pub fn format_delivery_time(min: u32, max: u32) -> String {
    format!("{}-{} mins", min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prep_time_minutes() {
        assert_eq!(format_prep_time(0.5), "30m");
        assert_eq!(format_prep_time(0.25), "15m");
        assert_eq!(format_prep_time(0.0), "0m");
        // 0.33 h = 19.8 min
        assert_eq!(format_prep_time(0.33), "20m");
    }

    #[test]
    fn test_prep_time_hours_pass_through() {
        assert_eq!(format_prep_time(1.0), "1h");
        assert_eq!(format_prep_time(2.0), "2h");
        assert_eq!(format_prep_time(1.5), "1.5h");
        assert_eq!(format_prep_time(24.0), "24h");
    }

    #[test]
    fn test_delivery_time() {
        assert_eq!(format_delivery_time(20, 30), "20-30 mins");
        assert_eq!(format_delivery_time(0, 0), "0-0 mins");
        // Not validated
        assert_eq!(format_delivery_time(45, 30), "45-30 mins");
    }
}
