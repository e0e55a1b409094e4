//! The proleptic Julian calendar.
//!
//! Twelve months with the familiar 31/30/28 lengths, and a leap year every
//! fourth year without exception. Year 0 exists and is a leap year.

use serde::{Deserialize, Serialize};

use crate::calendar::Calendar;
use crate::consts::{
    DATE_SEPARATOR, DAYS_IN_MONTH, DAYS_PER_JULIAN_CYCLE, FEBRUARY, FEBRUARY_DAYS_LEAP,
    JULIAN_MAX_YEAR, JULIAN_MIN_YEAR, LEAP_YEAR_CYCLE,
};
use crate::era::JulianEra;

/// Epoch day of Julian 0001-01-01, two days before Gregorian 0001-01-01
const JULIAN_0001_EPOCH_DAY: i64 = -719_164;

/// The proleptic Julian calendar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Julian;

pub(crate) const fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == 0
}

pub(crate) const fn length_of_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= 12);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub(crate) const fn length_of_year(year: i64) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

pub(crate) const fn day_of_year(year: i64, month: u8, day: u8) -> u16 {
    // Days before the month as if February had 30 days, then corrected.
    let before = (367 * month as i64 - 362) / 12;
    let correction = if month <= 2 {
        0
    } else if is_leap_year(year) {
        -1
    } else {
        -2
    };
    (before + correction) as u16 + day as u16
}

pub(crate) const fn to_epoch_day(year: i64, month: u8, day: u8) -> i64 {
    let prior_years = year - 1;
    JULIAN_0001_EPOCH_DAY - 1
        + 365 * prior_years
        + prior_years.div_euclid(LEAP_YEAR_CYCLE)
        + day_of_year(year, month, day) as i64
}

pub(crate) const fn from_epoch_day(epoch_day: i64) -> (i64, u8, u8) {
    let year = (4 * (epoch_day - JULIAN_0001_EPOCH_DAY) + 1464).div_euclid(DAYS_PER_JULIAN_CYCLE);
    let prior_days = epoch_day - to_epoch_day(year, 1, 1);
    let correction = if epoch_day < to_epoch_day(year, 3, 1) {
        0
    } else if is_leap_year(year) {
        1
    } else {
        2
    };
    let month = ((12 * (prior_days + correction) + 373) / 367) as u8;
    let day = (epoch_day - to_epoch_day(year, month, 1) + 1) as u8;
    (year, month, day)
}

impl Calendar for Julian {
    type Era = JulianEra;

    const NAME: &'static str = "Julian";
    const SEPARATOR: char = DATE_SEPARATOR;
    const MIN_YEAR: i32 = JULIAN_MIN_YEAR;
    const MAX_YEAR: i32 = JULIAN_MAX_YEAR;
    const MONTHS_IN_YEAR: u8 = 12;

    fn is_leap_year(year: i64) -> bool {
        is_leap_year(year)
    }

    fn length_of_month(year: i32, month: u8) -> u8 {
        length_of_month(i64::from(year), month)
    }

    fn length_of_year(year: i32) -> u16 {
        length_of_year(i64::from(year))
    }

    fn date_to_epoch_day(year: i32, month: u8, day: u8) -> i64 {
        to_epoch_day(i64::from(year), month, day)
    }

    fn epoch_day_to_date(epoch_day: i64) -> (i32, u8, u8) {
        let (year, month, day) = from_epoch_day(epoch_day);
        (year as i32, month, day)
    }

    fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
        day_of_year(i64::from(year), month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i64,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase { year: 1, is_leap: false, description: "year one" },
            TestCase { year: 4, is_leap: true, description: "divisible by 4" },
            TestCase { year: 100, is_leap: true, description: "century, no exception" },
            TestCase { year: 1900, is_leap: true, description: "century, no exception" },
            TestCase { year: 2001, is_leap: false, description: "not divisible by 4" },
            TestCase { year: 0, is_leap: true, description: "year zero" },
            TestCase { year: -1, is_leap: false, description: "negative odd year" },
            TestCase { year: -4, is_leap: true, description: "negative divisible by 4" },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_epoch_day_known_values() {
        struct TestCase {
            julian:    (i64, u8, u8),
            epoch_day: i64,
        }

        let cases = [
            // Gregorian 0000-12-30
            TestCase { julian: (1, 1, 1), epoch_day: -719_164 },
            // Gregorian 0001-01-01
            TestCase { julian: (1, 1, 3), epoch_day: -719_162 },
            // Gregorian 1582-10-15
            TestCase { julian: (1582, 10, 5), epoch_day: -141_427 },
            // Gregorian 1752-09-14
            TestCase { julian: (1752, 9, 3), epoch_day: -79_366 },
            // Gregorian 1970-01-01
            TestCase { julian: (1969, 12, 19), epoch_day: 0 },
            // Gregorian 2012-07-06
            TestCase { julian: (2012, 6, 23), epoch_day: 15_527 },
        ];

        for case in &cases {
            let (y, m, d) = case.julian;
            assert_eq!(to_epoch_day(y, m, d), case.epoch_day, "Julian {y}-{m:02}-{d:02}");
            assert_eq!(from_epoch_day(case.epoch_day), case.julian);
        }
    }

    #[test]
    fn test_epoch_day_round_trip() {
        for epoch_day in (-800_000..800_000).step_by(89) {
            let (y, m, d) = from_epoch_day(epoch_day);
            assert!(d >= 1 && d <= length_of_month(y, m));
            assert_eq!(to_epoch_day(y, m, d), epoch_day, "epoch day {epoch_day}");
        }
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(day_of_year(2011, 1, 1), 1);
        assert_eq!(day_of_year(2011, 3, 1), 60);
        assert_eq!(day_of_year(2012, 3, 1), 61);
        assert_eq!(day_of_year(2012, 12, 31), 366);
        assert_eq!(Julian::date_of_year_day(2012, 61), (3, 1));
        assert_eq!(Julian::date_of_year_day(2011, 365), (12, 31));
    }

    #[test]
    fn test_lengths() {
        assert_eq!(Julian::length_of_month(1900, 2), 29);
        assert_eq!(Julian::length_of_month(1901, 2), 28);
        assert_eq!(Julian::length_of_month(1901, 4), 30);
        assert_eq!(Julian::length_of_year(100), 366);
        assert_eq!(Julian::length_of_year(101), 365);
    }
}
