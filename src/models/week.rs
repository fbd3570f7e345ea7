//! Week and day-layout models.
//!
//! A timetable covers the active weekdays (the canonical week minus
//! configured off-days), each split into `periods_per_day` periods, one of which should be
//! a break.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// The canonical seven-day week, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Off-days used when none are configured.
    pub const DEFAULT_OFF_DAYS: [Weekday; 2] = [Weekday::Saturday, Weekday::Sunday];

    /// Full English name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Canonical week minus `off_days`, in canonical order.
    pub fn active_days(off_days: &[Weekday]) -> Vec<Weekday> {
        Self::ALL
            .iter()
            .copied()
            .filter(|d| !off_days.contains(d))
            .collect()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape of every generated week: which days, how many periods per day, and
/// where the break may fall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekLayout {
    /// Schedulable days, in order.
    pub days: Vec<Weekday>,
    /// Periods per day, break included.
    pub periods_per_day: usize,
    /// Zero-based break candidates; one is drawn per generated day. A draw
    /// at or past `periods_per_day` leaves that day without a break. Also
    /// the positions the evaluator accepts without penalty.
    pub break_positions: Vec<usize>,
}

impl Default for WeekLayout {
    fn default() -> Self {
        Self {
            days: Weekday::active_days(&Weekday::DEFAULT_OFF_DAYS),
            periods_per_day: 6,
            break_positions: vec![2, 3],
        }
    }
}

impl WeekLayout {
    /// Creates a layout for the given days.
    pub fn new(days: Vec<Weekday>, periods_per_day: usize) -> Self {
        Self {
            days,
            periods_per_day,
            ..Self::default()
        }
    }

    /// Sets the schedulable days.
    pub fn with_days(mut self, days: Vec<Weekday>) -> Self {
        self.days = days;
        self
    }

    /// Sets the number of periods per day.
    pub fn with_periods_per_day(mut self, periods: usize) -> Self {
        self.periods_per_day = periods;
        self
    }

    /// Sets the candidate break positions.
    pub fn with_break_positions(mut self, positions: Vec<usize>) -> Self {
        self.break_positions = positions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_days_skip_off_days() {
        let days = Weekday::active_days(&Weekday::DEFAULT_OFF_DAYS);
        assert_eq!(days.len(), 5);
        assert_eq!(days.first(), Some(&Weekday::Monday));
        assert_eq!(days.last(), Some(&Weekday::Friday));

        let days = Weekday::active_days(&[Weekday::Wednesday]);
        assert_eq!(days.len(), 6);
        assert!(!days.contains(&Weekday::Wednesday));
        assert!(days.contains(&Weekday::Sunday));
    }

    #[test]
    fn test_weekday_serde_uses_full_names() {
        let json = serde_json::to_string(&Weekday::Thursday).unwrap();
        assert_eq!(json, "\"Thursday\"");
        let day: Weekday = serde_json::from_str("\"Saturday\"").unwrap();
        assert_eq!(day, Weekday::Saturday);
        assert_eq!(Weekday::Friday.to_string(), "Friday");
    }

    #[test]
    fn test_layout_builders() {
        let layout = WeekLayout::new(vec![Weekday::Monday], 3).with_break_positions(vec![1]);
        assert_eq!(layout.days, vec![Weekday::Monday]);
        assert_eq!(layout.periods_per_day, 3);
        assert_eq!(layout.break_positions, vec![1]);
        assert_eq!(WeekLayout::default().break_positions, vec![2, 3]);
    }
}
