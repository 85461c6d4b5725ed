//! Calendar date windows used to bound history queries.

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// An inclusive calendar date range, endpoints in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    /// The window ending on the calendar date of `reference` and starting
    /// `n` days earlier. Total for any instant and any non-negative `n`.
    pub fn last_n_days(n: u32, reference: DateTime<Utc>) -> Self {
        let to = reference.date_naive();
        let from = to - Duration::days(i64::from(n));
        DateWindow { from, to }
    }

    /// Lower bound as a `YYYY-MM-DD` query parameter.
    pub fn from_param(&self) -> String {
        self.from.format("%Y-%m-%d").to_string()
    }

    /// Upper bound as a `YYYY-MM-DD` query parameter.
    pub fn to_param(&self) -> String {
        self.to.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_last_fifteen_days() {
        let now = Utc.with_ymd_and_hms(2024, 3, 20, 14, 30, 0).unwrap();
        let w = DateWindow::last_n_days(15, now);
        assert_eq!(w.from_param(), "2024-03-05");
        assert_eq!(w.to_param(), "2024-03-20");
        assert_eq!(w.to - w.from, Duration::days(15));
    }

    #[test]
    fn test_window_crosses_month_and_year() {
        let now = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
        let w = DateWindow::last_n_days(15, now);
        assert_eq!(w.from_param(), "2023-12-21");
        assert_eq!(w.to_param(), "2024-01-05");
    }

    #[test]
    fn test_zero_days_is_a_single_date() {
        let now = Utc.with_ymd_and_hms(2024, 3, 20, 23, 59, 59).unwrap();
        let w = DateWindow::last_n_days(0, now);
        assert_eq!(w.from, w.to);
    }
}
