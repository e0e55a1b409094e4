//! The British calendar: Julian until 1752-09-02, Gregorian from 1752-09-14.
//!
//! The day numbers 3 to 13 of September 1752 were never used. They are still
//! accepted on input, and mean the day they would have been had the Julian
//! numbering continued, so `1752-09-03` is the same day as `1752-09-14`.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::calendar::Calendar;
use crate::consts::{
    CUTOVER_DAYS, CUTOVER_EPOCH_DAY, CUTOVER_MONTH, CUTOVER_YEAR, DATE_SEPARATOR, JULIAN_MAX_YEAR,
    JULIAN_MIN_YEAR,
};
use crate::era::JulianEra;
use crate::{iso, julian};

/// Last day of September 1752 numbered under the Julian rules
const LAST_JULIAN_DAY_OF_CUTOVER_MONTH: u8 = 2;
/// Day of year of 1752-09-02, the last Julian day
const LAST_JULIAN_DAY_OF_CUTOVER_YEAR: u16 = 246;

/// The British cutover calendar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BritishCutover;

const fn is_cutover_month(year: i32, month: u8) -> bool {
    year == CUTOVER_YEAR && month == CUTOVER_MONTH
}

/// True for the day numbers that fell out of use at the cutover
const fn is_gap(year: i32, month: u8, day: u8) -> bool {
    is_cutover_month(year, month) && day > LAST_JULIAN_DAY_OF_CUTOVER_MONTH && day <= LAST_JULIAN_DAY_OF_CUTOVER_MONTH + CUTOVER_DAYS
}

/// True when a resolved date is numbered under the Julian rules
const fn is_julian(year: i32, month: u8, day: u8) -> bool {
    year < CUTOVER_YEAR
        || (year == CUTOVER_YEAR
            && (month < CUTOVER_MONTH || (month == CUTOVER_MONTH && day <= LAST_JULIAN_DAY_OF_CUTOVER_MONTH)))
}

impl Calendar for BritishCutover {
    type Era = JulianEra;

    const NAME: &'static str = "BritishCutover";
    const SEPARATOR: char = DATE_SEPARATOR;
    const MIN_YEAR: i32 = JULIAN_MIN_YEAR;
    const MAX_YEAR: i32 = JULIAN_MAX_YEAR;
    const MONTHS_IN_YEAR: u8 = 12;

    fn is_leap_year(year: i64) -> bool {
        if year < i64::from(CUTOVER_YEAR) { julian::is_leap_year(year) } else { iso::is_leap_year(year) }
    }

    fn length_of_month(year: i32, month: u8) -> u8 {
        if is_cutover_month(year, month) {
            return Self::max_day_of_month(year, month) - CUTOVER_DAYS;
        }
        Self::max_day_of_month(year, month)
    }

    fn length_of_year(year: i32) -> u16 {
        let days = if year < CUTOVER_YEAR {
            julian::length_of_year(i64::from(year))
        } else {
            iso::length_of_year(i64::from(year))
        };
        if year == CUTOVER_YEAR { days - u16::from(CUTOVER_DAYS) } else { days }
    }

    fn max_day_of_month(year: i32, month: u8) -> u8 {
        if year < CUTOVER_YEAR {
            julian::length_of_month(i64::from(year), month)
        } else {
            iso::length_of_month(i64::from(year), month)
        }
    }

    fn date_to_epoch_day(year: i32, month: u8, day: u8) -> i64 {
        if year < CUTOVER_YEAR {
            return julian::to_epoch_day(i64::from(year), month, day);
        }
        let epoch_day = iso::to_epoch_day(i64::from(year), month, day);
        if epoch_day < CUTOVER_EPOCH_DAY {
            julian::to_epoch_day(i64::from(year), month, day)
        } else {
            epoch_day
        }
    }

    fn epoch_day_to_date(epoch_day: i64) -> (i32, u8, u8) {
        let (year, month, day) = if epoch_day < CUTOVER_EPOCH_DAY {
            julian::from_epoch_day(epoch_day)
        } else {
            iso::from_epoch_day(epoch_day)
        };
        (year as i32, month, day)
    }

    fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
        if is_julian(year, month, day) {
            julian::day_of_year(i64::from(year), month, day)
        } else if year == CUTOVER_YEAR {
            iso::day_of_year(i64::from(year), month, day) - u16::from(CUTOVER_DAYS)
        } else {
            iso::day_of_year(i64::from(year), month, day)
        }
    }

    fn date_of_year_day(year: i32, day_of_year: u16) -> (u8, u8) {
        let epoch_day = if year < CUTOVER_YEAR || (year == CUTOVER_YEAR && day_of_year <= LAST_JULIAN_DAY_OF_CUTOVER_YEAR) {
            julian::to_epoch_day(i64::from(year), 1, 1) + i64::from(day_of_year) - 1
        } else if year == CUTOVER_YEAR {
            iso::to_epoch_day(i64::from(year), 1, 1) + i64::from(day_of_year + u16::from(CUTOVER_DAYS)) - 1
        } else {
            iso::to_epoch_day(i64::from(year), 1, 1) + i64::from(day_of_year) - 1
        };
        let (_, month, day) = Self::epoch_day_to_date(epoch_day);
        (month, day)
    }

    fn resolve(year: i32, month: u8, day: u8) -> (i32, u8, u8) {
        if is_gap(year, month, day) {
            let resolved = Self::epoch_day_to_date(Self::date_to_epoch_day(year, month, day));
            trace!(year, month, day, resolved_day = resolved.2, "reinterpreted cutover gap date");
            return resolved;
        }
        (year, month, day)
    }

    fn week_ordinal_in_month(year: i32, month: u8, day: u8) -> u8 {
        if is_cutover_month(year, month) && day > LAST_JULIAN_DAY_OF_CUTOVER_MONTH {
            day - CUTOVER_DAYS
        } else {
            day
        }
    }
}
