//! The once-per-day check-in gate.
//!
//! A check-in is a stored date key. It counts only while that key equals
//! the current date, so it lapses on its own at midnight.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily check-in state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckIn {
    date: Option<NaiveDate>,
}

impl CheckIn {
    /// Restore from a previously stored date key.
    pub const fn from_date(date: Option<NaiveDate>) -> Self {
        Self { date }
    }

    /// Check in for `today`.
    ///
    /// Returns `false` if already checked in today (no change).
    pub fn check_in(&mut self, today: NaiveDate) -> bool {
        if self.is_checked_in(today) {
            return false;
        }
        self.date = Some(today);
        true
    }

    /// Whether the stored key matches `today`.
    pub fn is_checked_in(&self, today: NaiveDate) -> bool {
        self.date == Some(today)
    }

    /// The stored date key.
    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn starts_unchecked() {
        assert!(!CheckIn::default().is_checked_in(day(1)));
    }

    #[test]
    fn check_in_holds_for_the_day() {
        let mut c = CheckIn::default();
        assert!(c.check_in(day(1)));
        assert!(c.is_checked_in(day(1)));
        assert!(!c.check_in(day(1)));
    }

    #[test]
    fn check_in_lapses_when_date_changes() {
        let mut c = CheckIn::default();
        assert!(c.check_in(day(1)));
        assert!(!c.is_checked_in(day(2)));
        assert!(c.check_in(day(2)));
        assert_eq!(c.date(), Some(day(2)));
    }

    #[test]
    fn restored_key_counts_only_for_its_date() {
        let c = CheckIn::from_date(Some(day(4)));
        assert!(c.is_checked_in(day(4)));
        assert!(!c.is_checked_in(day(5)));
    }
}
