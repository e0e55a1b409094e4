//! Proleptic Gregorian closed forms.
//!
//! These back the Gregorian half of the British cutover calendar and the
//! year boundaries of the International Fixed calendar. They are exact for
//! every year, using floor division throughout so that negative years need no
//! special casing.

use crate::consts::{
    CENTURY_CYCLE, DAYS_0000_03_01_TO_1970, DAYS_IN_MONTH, DAYS_PER_GREGORIAN_CYCLE, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
};

pub const fn is_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn length_of_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= 12);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub const fn length_of_year(year: i64) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Day of year of a valid Gregorian date
pub const fn day_of_year(year: i64, month: u8, day: u8) -> u16 {
    let mut doy = day as u16;
    let mut m = 1;
    while m < month {
        doy += length_of_month(year, m) as u16;
        m += 1;
    }
    doy
}

/// Days since 1970-01-01 of a valid Gregorian date.
///
/// Works on a March-based year so that the leap day is the last day of the
/// computational year.
pub const fn to_epoch_day(year: i64, month: u8, day: u8) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(GREGORIAN_CYCLE);
    let year_of_era = year - era * GREGORIAN_CYCLE;
    let march_month = (month as i64 + 9) % 12;
    let day_of_march_year = (153 * march_month + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_march_year;
    era * DAYS_PER_GREGORIAN_CYCLE + day_of_era - DAYS_0000_03_01_TO_1970
}

/// Gregorian (year, month, day) of an epoch day
pub const fn from_epoch_day(epoch_day: i64) -> (i64, u8, u8) {
    let shifted = epoch_day + DAYS_0000_03_01_TO_1970;
    let era = shifted.div_euclid(DAYS_PER_GREGORIAN_CYCLE);
    let day_of_era = shifted - era * DAYS_PER_GREGORIAN_CYCLE;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let day_of_march_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let march_month = (5 * day_of_march_year + 2) / 153;
    let day = day_of_march_year - (153 * march_month + 2) / 5 + 1;
    let month = if march_month < 10 { march_month + 3 } else { march_month - 9 };
    let year = year_of_era + era * GREGORIAN_CYCLE + if month <= 2 { 1 } else { 0 };
    (year, month as u8, day as u8)
}
