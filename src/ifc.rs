//! The International Fixed calendar.
//!
//! Thirteen months of exactly four weeks. The 365th day of the year, Year
//! Day, is the 29th of the thirteenth month; in leap years a Leap Day follows
//! the 28th of the sixth month as its 29th. Neither belongs to a week. Years
//! start on the Gregorian January 1st and follow the Gregorian leap rule.

use serde::{Deserialize, Serialize};

use crate::calendar::Calendar;
use crate::consts::{
    FIXED_SEPARATOR, IFC_DAYS_IN_MONTH, IFC_LEAP_DAY_OF_YEAR, IFC_LEAP_MONTH, IFC_MAX_YEAR,
    IFC_MIN_YEAR, IFC_MONTHS_IN_YEAR,
};
use crate::era::IfcEra;
use crate::iso;

/// Day of year of Year Day in a common year
const YEAR_DAY_OF_COMMON_YEAR: u16 = 365;
/// Days in the weeks of one month
const WEEK_DAYS_IN_MONTH: u16 = IFC_DAYS_IN_MONTH as u16;

/// The International Fixed calendar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InternationalFixed;

impl Calendar for InternationalFixed {
    type Era = IfcEra;

    const NAME: &'static str = "Ifc";
    const SEPARATOR: char = FIXED_SEPARATOR;
    const MIN_YEAR: i32 = IFC_MIN_YEAR;
    const MAX_YEAR: i32 = IFC_MAX_YEAR;
    const MONTHS_IN_YEAR: u8 = IFC_MONTHS_IN_YEAR;

    fn is_leap_year(year: i64) -> bool {
        iso::is_leap_year(year)
    }

    fn length_of_month(year: i32, month: u8) -> u8 {
        if month == IFC_MONTHS_IN_YEAR
            || (month == IFC_LEAP_MONTH && Self::is_leap_year(i64::from(year)))
        {
            IFC_DAYS_IN_MONTH + 1
        } else {
            IFC_DAYS_IN_MONTH
        }
    }

    fn length_of_year(year: i32) -> u16 {
        iso::length_of_year(i64::from(year))
    }

    fn date_to_epoch_day(year: i32, month: u8, day: u8) -> i64 {
        iso::to_epoch_day(i64::from(year), 1, 1) + i64::from(Self::day_of_year(year, month, day)) - 1
    }

    fn epoch_day_to_date(epoch_day: i64) -> (i32, u8, u8) {
        let (year, _, _) = iso::from_epoch_day(epoch_day);
        let day_of_year = (epoch_day - iso::to_epoch_day(year, 1, 1) + 1) as u16;
        let year = year as i32;
        let (month, day) = Self::date_of_year_day(year, day_of_year);
        (year, month, day)
    }

    fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
        let leap_day = u16::from(month > IFC_LEAP_MONTH && Self::is_leap_year(i64::from(year)));
        u16::from(month - 1) * WEEK_DAYS_IN_MONTH + u16::from(day) + leap_day
    }

    fn date_of_year_day(year: i32, day_of_year: u16) -> (u8, u8) {
        let mut day_of_year = day_of_year;
        if Self::is_leap_year(i64::from(year)) {
            if day_of_year == IFC_LEAP_DAY_OF_YEAR {
                return (IFC_LEAP_MONTH, IFC_DAYS_IN_MONTH + 1);
            }
            if day_of_year > IFC_LEAP_DAY_OF_YEAR {
                day_of_year -= 1;
            }
        }
        if day_of_year == YEAR_DAY_OF_COMMON_YEAR {
            return (IFC_MONTHS_IN_YEAR, IFC_DAYS_IN_MONTH + 1);
        }
        let month = (day_of_year - 1) / WEEK_DAYS_IN_MONTH + 1;
        let day = (day_of_year - 1) % WEEK_DAYS_IN_MONTH + 1;
        (month as u8, day as u8)
    }

    fn is_special_day(_year: i32, _month: u8, day: u8) -> bool {
        day > IFC_DAYS_IN_MONTH
    }

    fn special_days_in_month(year: i32, month: u8) -> u8 {
        Self::length_of_month(year, month) - IFC_DAYS_IN_MONTH
    }

    fn special_days_in_year(year: i32) -> u16 {
        Self::length_of_year(year) - u16::from(IFC_MONTHS_IN_YEAR) * WEEK_DAYS_IN_MONTH
    }

    /// Every month starts on the first day of the week
    fn day_of_week(_year: i32, _month: u8, day: u8) -> u8 {
        (day - 1) % 7 + 1
    }

    fn week_ordinal_in_year(_year: i32, month: u8, day: u8) -> u16 {
        u16::from(month - 1) * WEEK_DAYS_IN_MONTH + u16::from(day)
    }

    fn day_of_year_of_week_ordinal(year: i32, ordinal: u16) -> u16 {
        let after_leap_day = Self::is_leap_year(i64::from(year)) && ordinal >= IFC_LEAP_DAY_OF_YEAR;
        ordinal + u16::from(after_leap_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_lengths() {
        assert_eq!(InternationalFixed::length_of_month(2012, 6), 29);
        assert_eq!(InternationalFixed::length_of_month(2011, 6), 28);
        assert_eq!(InternationalFixed::length_of_month(1900, 6), 28);
        assert_eq!(InternationalFixed::length_of_month(2000, 6), 29);
        assert_eq!(InternationalFixed::length_of_month(2011, 13), 29);
        for month in [1, 2, 5, 7, 12] {
            assert_eq!(InternationalFixed::length_of_month(2012, month), 28);
        }
    }

    #[test]
    fn test_year_length_matches_gregorian() {
        assert_eq!(InternationalFixed::length_of_year(2012), 366);
        assert_eq!(InternationalFixed::length_of_year(2013), 365);
        let total: u16 = (1..=13).map(|m| u16::from(InternationalFixed::length_of_month(2012, m))).sum();
        assert_eq!(total, 366);
    }

    #[test]
    fn test_special_days_cases() {
        struct TestCase {
            date:        (i32, u8, u8),
            day_of_year: u16,
            description: &'static str,
        }

        let cases = [
            TestCase { date: (2012, 6, 29), day_of_year: 169, description: "Leap Day" },
            TestCase { date: (2012, 7, 1), day_of_year: 170, description: "day after Leap Day" },
            TestCase { date: (2012, 13, 29), day_of_year: 366, description: "Year Day, leap year" },
            TestCase { date: (2014, 13, 29), day_of_year: 365, description: "Year Day, common year" },
            TestCase { date: (2014, 7, 1), day_of_year: 169, description: "no Leap Day" },
            TestCase { date: (2014, 1, 1), day_of_year: 1, description: "first day" },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            assert_eq!(InternationalFixed::day_of_year(y, m, d), case.day_of_year, "{}", case.description);
            assert_eq!(InternationalFixed::date_of_year_day(y, case.day_of_year), (m, d), "{}", case.description);
        }
    }

    #[test]
    fn test_epoch_day_known_values() {
        // Gregorian 0001-01-01, 0001-06-16, 2012-06-17, 2012-12-31
        assert_eq!(InternationalFixed::date_to_epoch_day(1, 1, 1), -719_162);
        assert_eq!(InternationalFixed::date_to_epoch_day(1, 6, 27), iso::to_epoch_day(1, 6, 16));
        assert_eq!(InternationalFixed::date_to_epoch_day(2012, 6, 29), iso::to_epoch_day(2012, 6, 17));
        assert_eq!(InternationalFixed::date_to_epoch_day(2012, 13, 29), iso::to_epoch_day(2012, 12, 31));
        assert_eq!(InternationalFixed::epoch_day_to_date(0), (1970, 1, 1));
    }

    #[test]
    fn test_week_ordinals() {
        assert_eq!(InternationalFixed::week_ordinal_in_year(2012, 6, 28), 168);
        assert_eq!(InternationalFixed::week_ordinal_in_year(2012, 7, 1), 169);
        assert_eq!(InternationalFixed::day_of_year_of_week_ordinal(2012, 169), 170);
        assert_eq!(InternationalFixed::day_of_year_of_week_ordinal(2012, 168), 168);
        assert_eq!(InternationalFixed::day_of_year_of_week_ordinal(2013, 169), 169);
        assert_eq!(InternationalFixed::special_days_in_year(2012), 2);
        assert_eq!(InternationalFixed::special_days_in_year(2013), 1);
        assert_eq!(InternationalFixed::special_days_in_month(2012, 6), 1);
        assert_eq!(InternationalFixed::special_days_in_month(2013, 6), 0);
    }
}
