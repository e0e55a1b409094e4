//! The Variant Descriptor: everything that differs between calendars.
//!
//! A calendar is a zero-sized marker type implementing [`Calendar`]. The
//! required items are the pure month/leap-year rules and the two epoch-day
//! conversions; the provided items are hooks with defaults that suit a plain
//! twelve-month solar calendar, overridden where a calendar has intercalary
//! days or a gap in its numbering. The field layer and arithmetic engine in
//! [`crate::CalendarDate`] are written once against this trait.

use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::consts::DAYS_IN_WEEK;
use crate::era::{AnyEra, CalendarEra};
use crate::CalendarError;

pub trait Calendar: Copy + Default + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// The calendar's own era set
    type Era: CalendarEra;

    /// Name used in the string form of dates
    const NAME: &'static str;
    /// Separator between year, month and day in the string form
    const SEPARATOR: char;
    /// Smallest supported proleptic year
    const MIN_YEAR: i32;
    /// Largest supported proleptic year
    const MAX_YEAR: i32;
    /// Number of months in every year
    const MONTHS_IN_YEAR: u8;

    fn is_leap_year(year: i64) -> bool;

    /// Number of days the month actually has
    fn length_of_month(year: i32, month: u8) -> u8;

    /// Number of days the year actually has
    fn length_of_year(year: i32) -> u16;

    /// Epoch day of a valid, resolved date
    fn date_to_epoch_day(year: i32, month: u8, day: u8) -> i64;

    /// The one resolved date falling on `epoch_day`
    fn epoch_day_to_date(epoch_day: i64) -> (i32, u8, u8);

    /// Day of year (1-based) of a valid, resolved date
    fn day_of_year(year: i32, month: u8, day: u8) -> u16;

    /// Month and day for a day of year known to be in `1..=length_of_year`
    fn date_of_year_day(year: i32, day_of_year: u16) -> (u8, u8) {
        let mut remaining = day_of_year;
        for month in 1..Self::MONTHS_IN_YEAR {
            let length = u16::from(Self::length_of_month(year, month));
            if remaining <= length {
                return (month, remaining as u8);
            }
            remaining -= length;
        }
        (Self::MONTHS_IN_YEAR, remaining as u8)
    }

    /// Largest day number accepted for the month.
    ///
    /// Equal to the month length unless the month skips day numbers.
    fn max_day_of_month(year: i32, month: u8) -> u8 {
        Self::length_of_month(year, month)
    }

    /// Maps a validated `(year, month, day)` to the date it denotes.
    ///
    /// The identity for every calendar whose accepted triples are all real
    /// dates.
    fn resolve(year: i32, month: u8, day: u8) -> (i32, u8, u8) {
        (year, month, day)
    }

    /// Clamps `day` down to the last valid day of the month, then resolves
    fn resolve_previous_valid(year: i32, month: u8, day: u8) -> (i32, u8, u8) {
        let day = day.min(Self::max_day_of_month(year, month));
        Self::resolve(year, month, day)
    }

    /// Checks a `(year, month, day)` triple and resolves it.
    ///
    /// # Errors
    /// Returns `InvalidYear`, `InvalidMonth` or `InvalidDay` for the first
    /// component that is out of range.
    fn validate(year: i32, month: u8, day: u8) -> Result<(i32, u8, u8), CalendarError> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(CalendarError::InvalidYear { calendar: Self::NAME, year });
        }
        if !(1..=Self::MONTHS_IN_YEAR).contains(&month) {
            return Err(CalendarError::InvalidMonth { calendar: Self::NAME, month });
        }
        if day < 1 || day > Self::max_day_of_month(year, month) {
            return Err(CalendarError::InvalidDay { calendar: Self::NAME, year, month, day });
        }
        Ok(Self::resolve(year, month, day))
    }

    /// Intercalary days belong to no week
    fn is_special_day(_year: i32, _month: u8, _day: u8) -> bool {
        false
    }

    fn special_days_in_month(_year: i32, _month: u8) -> u8 {
        0
    }

    fn special_days_in_year(_year: i32) -> u16 {
        0
    }

    /// Day of week, 1 to 7, of a day that is not special
    fn day_of_week(year: i32, month: u8, day: u8) -> u8 {
        (Self::date_to_epoch_day(year, month, day) + 3).rem_euclid(DAYS_IN_WEEK) as u8 + 1
    }

    /// Position of the day among the week-counted days of its month
    fn week_ordinal_in_month(_year: i32, _month: u8, day: u8) -> u8 {
        day
    }

    /// Position of the day among the week-counted days of its year
    fn week_ordinal_in_year(year: i32, month: u8, day: u8) -> u16 {
        Self::day_of_year(year, month, day)
    }

    /// Inverse of [`Calendar::week_ordinal_in_year`]
    fn day_of_year_of_week_ordinal(_year: i32, ordinal: u16) -> u16 {
        ordinal
    }

    fn min_epoch_day() -> i64 {
        Self::date_to_epoch_day(Self::MIN_YEAR, 1, 1)
    }

    fn max_epoch_day() -> i64 {
        let last_month = Self::MONTHS_IN_YEAR;
        let last_day = Self::length_of_month(Self::MAX_YEAR, last_month);
        Self::date_to_epoch_day(Self::MAX_YEAR, last_month, last_day)
    }

    /// Converts (era, year-of-era) to a proleptic year.
    ///
    /// # Errors
    /// Returns `InvalidYearOfEra` if `year_of_era` is below 1.
    fn proleptic_year(era: Self::Era, year_of_era: i32) -> Result<i32, CalendarError> {
        era.proleptic_year(year_of_era)
    }

    /// Converts (era, year-of-era) to a proleptic year for an era chosen at
    /// runtime, checking that the era belongs to this calendar.
    ///
    /// # Errors
    /// Returns `EraMismatch` for an era of another calendar, and
    /// `InvalidYearOfEra` if `year_of_era` is below 1.
    fn proleptic_year_of(era: AnyEra, year_of_era: i32) -> Result<i32, CalendarError> {
        Self::era_from_any(era)?.proleptic_year(year_of_era)
    }

    /// Unwraps an era chosen at runtime, checking it belongs to this calendar.
    ///
    /// # Errors
    /// Returns `EraMismatch` for an era of another calendar.
    fn era_from_any(era: AnyEra) -> Result<Self::Era, CalendarError> {
        Self::Era::from_any(era).ok_or_else(|| {
            debug!(%era, calendar = Self::NAME, "rejected foreign era");
            CalendarError::EraMismatch { era, calendar: Self::NAME }
        })
    }

    /// Looks an era up by its numeric value.
    ///
    /// # Errors
    /// Returns `InvalidValue` for a value no era of this calendar has.
    fn era_of(value: i64) -> Result<Self::Era, CalendarError> {
        Self::Era::from_value(value).ok_or_else(|| CalendarError::InvalidValue {
            field: crate::ChronoField::Era,
            value,
            range: era_range::<Self>(),
        })
    }
}

/// Calendar-wide range of era values
pub(crate) fn era_range<C: Calendar>() -> crate::ValueRange {
    let values = C::Era::ALL.iter().map(|era| era.value());
    let min = values.clone().min().unwrap_or_default();
    let max = values.max().unwrap_or_default();
    crate::ValueRange::of(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BritishCutover, InternationalFixed, IsoEra, Julian, JulianEra, Symmetry454};

    #[test]
    fn test_proleptic_year_of_checks_era_identity() {
        assert_eq!(Julian::proleptic_year_of(JulianEra::Bc.into(), 1), Ok(0));
        assert_eq!(BritishCutover::proleptic_year_of(JulianEra::Ad.into(), 1752), Ok(1752));
        assert_eq!(Symmetry454::proleptic_year_of(IsoEra::Bce.into(), 5), Ok(-4));
        assert_eq!(
            Julian::proleptic_year_of(IsoEra::Ce.into(), 1),
            Err(CalendarError::EraMismatch { era: IsoEra::Ce.into(), calendar: "Julian" })
        );
        assert!(InternationalFixed::proleptic_year_of(JulianEra::Ad.into(), 5).unwrap_err().is_era_mismatch());
        assert_eq!(
            Julian::proleptic_year_of(JulianEra::Ad.into(), 0),
            Err(CalendarError::InvalidYearOfEra(0))
        );
    }

    #[test]
    fn test_era_of() {
        assert_eq!(Julian::era_of(1), Ok(JulianEra::Ad));
        assert_eq!(Symmetry454::era_of(0), Ok(IsoEra::Bce));
        assert_eq!(
            Julian::era_of(2),
            Err(CalendarError::InvalidValue {
                field: crate::ChronoField::Era,
                value: 2,
                range: crate::ValueRange::of(0, 1),
            })
        );
        assert!(InternationalFixed::era_of(0).is_err());
    }

    #[test]
    fn test_validate_cases() {
        struct TestCase {
            result:   Result<(i32, u8, u8), CalendarError>,
            expected: Result<(i32, u8, u8), CalendarError>,
        }

        let cases = [
            TestCase { result: Julian::validate(2012, 2, 29), expected: Ok((2012, 2, 29)) },
            TestCase { result: BritishCutover::validate(1752, 9, 5), expected: Ok((1752, 9, 16)) },
            TestCase {
                result:   Julian::validate(1_000_000, 1, 1),
                expected: Err(CalendarError::InvalidYear { calendar: "Julian", year: 1_000_000 }),
            },
            TestCase {
                result:   Julian::validate(2012, 0, 1),
                expected: Err(CalendarError::InvalidMonth { calendar: "Julian", month: 0 }),
            },
            TestCase {
                result:   InternationalFixed::validate(2013, 6, 29),
                expected: Err(CalendarError::InvalidDay { calendar: "Ifc", year: 2013, month: 6, day: 29 }),
            },
        ];

        for case in &cases {
            assert_eq!(case.result, case.expected);
        }
    }

    #[test]
    fn test_resolve_previous_valid_clamps() {
        assert_eq!(Julian::resolve_previous_valid(2011, 2, 31), (2011, 2, 28));
        assert_eq!(InternationalFixed::resolve_previous_valid(2013, 6, 29), (2013, 6, 28));
        assert_eq!(BritishCutover::resolve_previous_valid(1752, 9, 31), (1752, 9, 30));
        assert_eq!(BritishCutover::resolve_previous_valid(1752, 9, 12), (1752, 9, 23));
    }

    #[test]
    fn test_epoch_day_bounds() {
        assert_eq!(InternationalFixed::min_epoch_day(), -719_162);
        assert_eq!(Julian::max_epoch_day(), Julian::date_to_epoch_day(999_999, 12, 31));
        assert_eq!(Julian::min_epoch_day(), Julian::date_to_epoch_day(-999_998, 1, 1));
    }

    #[test]
    fn test_default_day_of_week_and_year_day() {
        // 1970-01-01 was a Thursday
        assert_eq!(Julian::day_of_week(1969, 12, 19), 4);
        assert_eq!(Julian::date_of_year_day(2012, 60), (2, 29));
        assert_eq!(Julian::date_of_year_day(2011, 365), (12, 31));
        assert_eq!(Julian::date_of_year_day(2011, 32), (2, 1));
    }
}
