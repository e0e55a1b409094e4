//! The Symmetry010 and Symmetry454 perpetual calendars.
//!
//! Both split a 364-day year into four 91-day quarters that always start on a
//! Monday; they only differ in how each quarter splits into months. Leap
//! years append a whole week to December, 52 of every 293 years, so the year
//! start never drifts more than a few days from the Gregorian January 1st.
//! The leap week belongs to no week-of-year and carries no day of week.

use serde::{Deserialize, Serialize};

use crate::calendar::Calendar;
use crate::consts::{
    DAYS_0001_TO_1970, DAYS_IN_WEEK, FIXED_SEPARATOR, SYMMETRY_CYCLE_OFFSET, SYMMETRY_CYCLE_YEARS,
    SYMMETRY_DAYS_IN_LEAP_YEAR, SYMMETRY_DAYS_IN_QUARTER, SYMMETRY_DAYS_IN_YEAR,
    SYMMETRY_DAYS_PER_CYCLE, SYMMETRY_LEAP_YEARS_PER_CYCLE, SYMMETRY_MAX_YEAR, SYMMETRY_MIN_YEAR,
};
use crate::era::IsoEra;

/// Month lengths within each quarter
type QuarterLayout = [u8; 3];

const LAYOUT_010: QuarterLayout = [30, 31, 30];
const LAYOUT_454: QuarterLayout = [28, 35, 28];

const DECEMBER: u8 = 12;
const LEAP_WEEK_DAYS: u8 = DAYS_IN_WEEK as u8;

/// The Symmetry010 calendar, quarters of 30/31/30 days
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symmetry010;

/// The Symmetry454 calendar, quarters of 4/5/4 weeks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symmetry454;

pub(crate) const fn is_leap_year(year: i64) -> bool {
    (SYMMETRY_LEAP_YEARS_PER_CYCLE * year + SYMMETRY_CYCLE_OFFSET).rem_euclid(SYMMETRY_CYCLE_YEARS)
        < SYMMETRY_LEAP_YEARS_PER_CYCLE
}

/// Number of leap years from year 1 up to, not including, `year`
const fn leap_years_before(year: i64) -> i64 {
    (SYMMETRY_LEAP_YEARS_PER_CYCLE * (year - 1) + SYMMETRY_CYCLE_OFFSET).div_euclid(SYMMETRY_CYCLE_YEARS)
}

const fn length_of_year(year: i64) -> u16 {
    if is_leap_year(year) { SYMMETRY_DAYS_IN_LEAP_YEAR } else { SYMMETRY_DAYS_IN_YEAR }
}

/// Epoch day of the first day of `year`; year 1 starts on Gregorian 0001-01-01
const fn start_of_year(year: i64) -> i64 {
    (year - 1) * SYMMETRY_DAYS_IN_YEAR as i64 + leap_years_before(year) * DAYS_IN_WEEK - DAYS_0001_TO_1970
}

/// Year and day of year of an epoch day
const fn year_day_of_epoch_day(epoch_day: i64) -> (i64, u16) {
    let zero_day = epoch_day + DAYS_0001_TO_1970;
    let mut year = 1 + (SYMMETRY_CYCLE_YEARS * zero_day).div_euclid(SYMMETRY_DAYS_PER_CYCLE);
    let mut day_of_year = epoch_day - start_of_year(year) + 1;
    // The estimate is off by at most one year either way.
    if day_of_year < 1 {
        year -= 1;
        day_of_year += length_of_year(year) as i64;
    } else if day_of_year > length_of_year(year) as i64 {
        day_of_year -= length_of_year(year) as i64;
        year += 1;
    }
    (year, day_of_year as u16)
}

const fn length_of_month(layout: &QuarterLayout, year: i64, month: u8) -> u8 {
    let length = layout[((month - 1) % 3) as usize];
    if month == DECEMBER && is_leap_year(year) { length + LEAP_WEEK_DAYS } else { length }
}

const fn day_of_year(layout: &QuarterLayout, month: u8, day: u8) -> u16 {
    let quarter = (month - 1) / 3;
    let mut doy = quarter as u16 * SYMMETRY_DAYS_IN_QUARTER + day as u16;
    let mut index = 0;
    while index < (month - 1) % 3 {
        doy += layout[index as usize] as u16;
        index += 1;
    }
    doy
}

const fn date_of_year_day(layout: &QuarterLayout, day_of_year: u16) -> (u8, u8) {
    let mut quarter = (day_of_year - 1) / SYMMETRY_DAYS_IN_QUARTER;
    if quarter > 3 {
        // leap week days run on past the end of the last quarter
        quarter = 3;
    }
    let mut day = day_of_year - quarter * SYMMETRY_DAYS_IN_QUARTER;
    let mut index = 0;
    while index < 2 && day > layout[index] as u16 {
        day -= layout[index] as u16;
        index += 1;
    }
    ((quarter * 3) as u8 + index as u8 + 1, day as u8)
}

const fn is_leap_week_day(layout: &QuarterLayout, month: u8, day: u8) -> bool {
    month == DECEMBER && day > layout[2]
}

const fn leap_week_days_in_month(year: i64, month: u8) -> u8 {
    if month == DECEMBER && is_leap_year(year) { LEAP_WEEK_DAYS } else { 0 }
}

const fn leap_week_days_in_year(year: i64) -> u16 {
    length_of_year(year) - SYMMETRY_DAYS_IN_YEAR
}

impl Calendar for Symmetry010 {
    type Era = IsoEra;

    const NAME: &'static str = "Symmetry010";
    const SEPARATOR: char = FIXED_SEPARATOR;
    const MIN_YEAR: i32 = SYMMETRY_MIN_YEAR;
    const MAX_YEAR: i32 = SYMMETRY_MAX_YEAR;
    const MONTHS_IN_YEAR: u8 = 12;

    fn is_leap_year(year: i64) -> bool {
        is_leap_year(year)
    }

    fn length_of_month(year: i32, month: u8) -> u8 {
        length_of_month(&LAYOUT_010, i64::from(year), month)
    }

    fn length_of_year(year: i32) -> u16 {
        length_of_year(i64::from(year))
    }

    fn date_to_epoch_day(year: i32, month: u8, day: u8) -> i64 {
        start_of_year(i64::from(year)) + i64::from(day_of_year(&LAYOUT_010, month, day)) - 1
    }

    fn epoch_day_to_date(epoch_day: i64) -> (i32, u8, u8) {
        let (year, doy) = year_day_of_epoch_day(epoch_day);
        let (month, day) = date_of_year_day(&LAYOUT_010, doy);
        (year as i32, month, day)
    }

    fn day_of_year(_year: i32, month: u8, day: u8) -> u16 {
        day_of_year(&LAYOUT_010, month, day)
    }

    fn date_of_year_day(_year: i32, day_of_year: u16) -> (u8, u8) {
        date_of_year_day(&LAYOUT_010, day_of_year)
    }

    fn is_special_day(_year: i32, month: u8, day: u8) -> bool {
        is_leap_week_day(&LAYOUT_010, month, day)
    }

    fn special_days_in_month(year: i32, month: u8) -> u8 {
        leap_week_days_in_month(i64::from(year), month)
    }

    fn special_days_in_year(year: i32) -> u16 {
        leap_week_days_in_year(i64::from(year))
    }
}

impl Calendar for Symmetry454 {
    type Era = IsoEra;

    const NAME: &'static str = "Symmetry454";
    const SEPARATOR: char = FIXED_SEPARATOR;
    const MIN_YEAR: i32 = SYMMETRY_MIN_YEAR;
    const MAX_YEAR: i32 = SYMMETRY_MAX_YEAR;
    const MONTHS_IN_YEAR: u8 = 12;

    fn is_leap_year(year: i64) -> bool {
        is_leap_year(year)
    }

    fn length_of_month(year: i32, month: u8) -> u8 {
        length_of_month(&LAYOUT_454, i64::from(year), month)
    }

    fn length_of_year(year: i32) -> u16 {
        length_of_year(i64::from(year))
    }

    fn date_to_epoch_day(year: i32, month: u8, day: u8) -> i64 {
        start_of_year(i64::from(year)) + i64::from(day_of_year(&LAYOUT_454, month, day)) - 1
    }

    fn epoch_day_to_date(epoch_day: i64) -> (i32, u8, u8) {
        let (year, doy) = year_day_of_epoch_day(epoch_day);
        let (month, day) = date_of_year_day(&LAYOUT_454, doy);
        (year as i32, month, day)
    }

    fn day_of_year(_year: i32, month: u8, day: u8) -> u16 {
        day_of_year(&LAYOUT_454, month, day)
    }

    fn date_of_year_day(_year: i32, day_of_year: u16) -> (u8, u8) {
        date_of_year_day(&LAYOUT_454, day_of_year)
    }

    fn is_special_day(_year: i32, month: u8, day: u8) -> bool {
        is_leap_week_day(&LAYOUT_454, month, day)
    }

    fn special_days_in_month(year: i32, month: u8) -> u8 {
        leap_week_days_in_month(i64::from(year), month)
    }

    fn special_days_in_year(year: i32) -> u16 {
        leap_week_days_in_year(i64::from(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:    i64,
            is_leap: bool,
        }

        let cases = [
            TestCase { year: 2004, is_leap: true },
            TestCase { year: 2009, is_leap: true },
            TestCase { year: 2015, is_leap: true },
            TestCase { year: 2021, is_leap: true },
            TestCase { year: 2026, is_leap: true },
            TestCase { year: 2000, is_leap: false },
            TestCase { year: 2012, is_leap: false },
            TestCase { year: 2020, is_leap: false },
            TestCase { year: 1, is_leap: false },
        ];

        for case in &cases {
            assert_eq!(is_leap_year(case.year), case.is_leap, "Year {}", case.year);
        }
    }

    #[test]
    fn test_leap_years_per_cycle() {
        let leaps = (1..=293).filter(|&y| is_leap_year(y)).count();
        assert_eq!(leaps, 52);
        assert_eq!(leap_years_before(294) - leap_years_before(1), 52);
        assert_eq!(leap_years_before(1), 0);
    }

    #[test]
    fn test_years_start_on_monday_near_january_first() {
        struct TestCase {
            year:      i64,
            gregorian: (i64, u8, u8),
        }

        let cases = [
            TestCase { year: 1, gregorian: (1, 1, 1) },
            TestCase { year: 2000, gregorian: (2000, 1, 3) },
            TestCase { year: 2009, gregorian: (2008, 12, 29) },
            TestCase { year: 2012, gregorian: (2012, 1, 2) },
            TestCase { year: 2018, gregorian: (2018, 1, 1) },
        ];

        for case in &cases {
            let (y, m, d) = case.gregorian;
            let start = start_of_year(case.year);
            assert_eq!(start, crate::iso::to_epoch_day(y, m, d), "Year {}", case.year);
            // 1970-01-01 was a Thursday, so Mondays are 4 days later mod 7
            assert_eq!((start - 4).rem_euclid(7), 0, "Year {} starts on a Monday", case.year);
        }
    }

    #[test]
    fn test_year_day_round_trip() {
        for epoch_day in (-800_000..800_000).step_by(83) {
            let (year, doy) = year_day_of_epoch_day(epoch_day);
            assert!(doy >= 1 && doy <= length_of_year(year), "epoch day {epoch_day}");
            assert_eq!(start_of_year(year) + i64::from(doy) - 1, epoch_day);
        }
    }

    #[test]
    fn test_month_layouts() {
        let lengths_010: Vec<u8> = (1..=12).map(|m| Symmetry010::length_of_month(2012, m)).collect();
        assert_eq!(lengths_010, [30, 31, 30, 30, 31, 30, 30, 31, 30, 30, 31, 30]);
        let lengths_454: Vec<u8> = (1..=12).map(|m| Symmetry454::length_of_month(2012, m)).collect();
        assert_eq!(lengths_454, [28, 35, 28, 28, 35, 28, 28, 35, 28, 28, 35, 28]);
        assert_eq!(Symmetry010::length_of_month(2009, 12), 37);
        assert_eq!(Symmetry454::length_of_month(2009, 12), 35);
    }

    #[test]
    fn test_day_of_year_cases() {
        assert_eq!(Symmetry010::day_of_year(2012, 2, 1), 31);
        assert_eq!(Symmetry010::day_of_year(2012, 4, 1), 92);
        assert_eq!(Symmetry010::day_of_year(2009, 12, 37), 371);
        assert_eq!(Symmetry010::date_of_year_day(2009, 371), (12, 37));
        assert_eq!(Symmetry010::date_of_year_day(2009, 365), (12, 31));
        assert_eq!(Symmetry010::date_of_year_day(2012, 364), (12, 30));
        assert_eq!(Symmetry454::day_of_year(2012, 3, 28), 91);
        assert_eq!(Symmetry454::date_of_year_day(2009, 371), (12, 35));
        assert_eq!(Symmetry454::date_of_year_day(2012, 29), (2, 1));
        assert_eq!(Symmetry454::date_of_year_day(2012, 64), (3, 1));
    }

    #[test]
    fn test_leap_week_is_special() {
        assert!(Symmetry010::is_special_day(2009, 12, 31));
        assert!(!Symmetry010::is_special_day(2009, 12, 30));
        assert!(!Symmetry010::is_special_day(2009, 11, 31));
        assert!(Symmetry454::is_special_day(2009, 12, 29));
        assert_eq!(Symmetry454::special_days_in_year(2009), 7);
        assert_eq!(Symmetry454::special_days_in_year(2012), 0);
        assert_eq!(Symmetry010::special_days_in_month(2009, 12), 7);
        assert_eq!(Symmetry010::special_days_in_month(2009, 11), 0);
    }
}
