//! The Field Accessor Layer.
//!
//! Reads, ranges and adjusts [`ChronoField`]s on any [`CalendarDate`]. The
//! calendar-specific parts come from the [`Calendar`] hooks: week ordinals
//! for the aligned-week fields and the special-day markers, which collapse
//! every week-based field to 0 with range `0..=0`.

use tracing::debug;

use crate::calendar::{Calendar, era_range};
use crate::consts::{DAYS_IN_WEEK, NO_WEEKDAY};
use crate::era::CalendarEra;
use crate::{CalendarDate, CalendarError, ChronoField, ValueRange};

const WEEKDAY_RANGE: ValueRange = ValueRange::of(1, DAYS_IN_WEEK);
const NO_WEEKDAY_RANGE: ValueRange = ValueRange::of(NO_WEEKDAY, NO_WEEKDAY);

/// Weeks needed to hold `days` week-counted days, the last one possibly partial
const fn weeks_for(days: i64) -> i64 {
    (days + DAYS_IN_WEEK - 1) / DAYS_IN_WEEK
}

const fn aligned_day_of_week(ordinal: i64) -> i64 {
    (ordinal - 1) % DAYS_IN_WEEK + 1
}

const fn aligned_week(ordinal: i64) -> i64 {
    (ordinal - 1) / DAYS_IN_WEEK + 1
}

fn unsupported<C: Calendar>(field: ChronoField) -> CalendarError {
    debug!(%field, calendar = C::NAME, "rejected unsupported field");
    CalendarError::UnsupportedField(field)
}

impl<C: Calendar> CalendarDate<C> {
    /// True for the fields every calendar in this crate defines
    pub const fn is_supported_field(&self, field: ChronoField) -> bool {
        field.is_date_based()
    }

    fn week_ordinal_in_month(&self) -> i64 {
        i64::from(C::week_ordinal_in_month(self.year(), self.month(), self.day()))
    }

    fn week_ordinal_in_year(&self) -> i64 {
        i64::from(C::week_ordinal_in_year(self.year(), self.month(), self.day()))
    }

    /// Reads a field.
    ///
    /// Week-based fields read 0 on a special day.
    ///
    /// # Errors
    /// Returns `UnsupportedField` for a time-of-day or instant field.
    pub fn get(&self, field: ChronoField) -> Result<i64, CalendarError> {
        if field.is_week_based() && self.is_special_day() {
            return Ok(NO_WEEKDAY);
        }
        let value = match field {
            ChronoField::DayOfWeek => i64::from(self.day_of_week()),
            ChronoField::AlignedDayOfWeekInMonth => aligned_day_of_week(self.week_ordinal_in_month()),
            ChronoField::AlignedDayOfWeekInYear => aligned_day_of_week(self.week_ordinal_in_year()),
            ChronoField::DayOfMonth => i64::from(self.day()),
            ChronoField::DayOfYear => i64::from(self.day_of_year()),
            ChronoField::EpochDay => self.to_epoch_day(),
            ChronoField::AlignedWeekOfMonth => aligned_week(self.week_ordinal_in_month()),
            ChronoField::AlignedWeekOfYear => aligned_week(self.week_ordinal_in_year()),
            ChronoField::MonthOfYear => i64::from(self.month()),
            ChronoField::ProlepticMonth => self.proleptic_month(),
            ChronoField::YearOfEra => i64::from(self.year_of_era()),
            ChronoField::Year => i64::from(self.year()),
            ChronoField::Era => self.era().value(),
            _ => return Err(unsupported::<C>(field)),
        };
        Ok(value)
    }

    /// Returns the values `field` can currently take on this date.
    ///
    /// # Errors
    /// Returns `UnsupportedField` for a time-of-day or instant field.
    pub fn range(&self, field: ChronoField) -> Result<ValueRange, CalendarError> {
        if field.is_week_based() && self.is_special_day() {
            return Ok(NO_WEEKDAY_RANGE);
        }
        let (year, month) = (self.year(), self.month());
        let range = match field {
            ChronoField::DayOfWeek
            | ChronoField::AlignedDayOfWeekInMonth
            | ChronoField::AlignedDayOfWeekInYear => WEEKDAY_RANGE,
            ChronoField::DayOfMonth => ValueRange::of(1, i64::from(C::max_day_of_month(year, month))),
            ChronoField::DayOfYear => ValueRange::of(1, i64::from(C::length_of_year(year))),
            ChronoField::EpochDay => ValueRange::of(C::min_epoch_day(), C::max_epoch_day()),
            ChronoField::AlignedWeekOfMonth => {
                let days = C::length_of_month(year, month) - C::special_days_in_month(year, month);
                ValueRange::of(1, weeks_for(i64::from(days)))
            }
            ChronoField::AlignedWeekOfYear => {
                let days = C::length_of_year(year) - C::special_days_in_year(year);
                ValueRange::of(1, weeks_for(i64::from(days)))
            }
            ChronoField::MonthOfYear => ValueRange::of(1, i64::from(C::MONTHS_IN_YEAR)),
            ChronoField::ProlepticMonth => {
                let months = i64::from(C::MONTHS_IN_YEAR);
                ValueRange::of(i64::from(C::MIN_YEAR) * months, i64::from(C::MAX_YEAR) * months + months - 1)
            }
            ChronoField::YearOfEra => year_of_era_range::<C>(self.era()),
            ChronoField::Year => ValueRange::of(i64::from(C::MIN_YEAR), i64::from(C::MAX_YEAR)),
            ChronoField::Era => era_range::<C>(),
            _ => return Err(unsupported::<C>(field)),
        };
        Ok(range)
    }

    /// Returns a copy of this date with `field` set to `value`.
    ///
    /// Setting the month, year, year-of-era, era or proleptic month keeps the
    /// day of month, clamping it to the end of a shorter month. Week-based
    /// fields move the date by whole days within its week, month or year.
    ///
    /// # Errors
    /// Returns `UnsupportedField` for a time-of-day or instant field, and
    /// `InvalidValue` if `value` is outside [`CalendarDate::range`].
    pub fn with(&self, field: ChronoField, value: i64) -> Result<Self, CalendarError> {
        let value = self.range(field)?.check_valid_value(value, field)?;
        let current = self.get(field)?;
        if value == current {
            return Ok(*self);
        }
        let (year, month, day) = (i64::from(self.year()), self.month(), self.day());
        match field {
            ChronoField::DayOfWeek
            | ChronoField::AlignedDayOfWeekInMonth
            | ChronoField::AlignedDayOfWeekInYear => self.plus_days(value - current),
            ChronoField::AlignedWeekOfMonth => self.plus_days((value - current) * DAYS_IN_WEEK),
            ChronoField::AlignedWeekOfYear => {
                let ordinal = self.week_ordinal_in_year() + (value - current) * DAYS_IN_WEEK;
                let day_of_year = C::day_of_year_of_week_ordinal(self.year(), ordinal as u16);
                let start = C::date_to_epoch_day(self.year(), 1, 1);
                Self::of_epoch_day(start + i64::from(day_of_year) - 1)
            }
            ChronoField::DayOfMonth => Self::of(self.year(), month, value as u8),
            ChronoField::DayOfYear => Self::of_year_day(self.year(), value as u16),
            ChronoField::EpochDay => Self::of_epoch_day(value),
            ChronoField::MonthOfYear => Self::resolve_previous_valid(year, value as u8, day),
            ChronoField::ProlepticMonth => self.plus_months(value - current),
            ChronoField::YearOfEra => {
                let year = C::proleptic_year(self.era(), value as i32)?;
                Self::resolve_previous_valid(i64::from(year), month, day)
            }
            ChronoField::Year => Self::resolve_previous_valid(value, month, day),
            ChronoField::Era => {
                let year = C::proleptic_year(C::era_of(value)?, self.year_of_era())?;
                Self::resolve_previous_valid(i64::from(year), month, day)
            }
            _ => Err(unsupported::<C>(field)),
        }
    }
}

/// Years-of-era the calendar's year range allows within `era`
fn year_of_era_range<C: Calendar>(era: C::Era) -> ValueRange {
    let (min_era, min_year_of_era) = C::Era::of_proleptic_year(C::MIN_YEAR);
    let (max_era, max_year_of_era) = C::Era::of_proleptic_year(C::MAX_YEAR);
    if min_era == max_era {
        ValueRange::of(i64::from(min_year_of_era), i64::from(max_year_of_era))
    } else if era == max_era {
        ValueRange::of(1, i64::from(max_year_of_era))
    } else {
        ValueRange::of(1, i64::from(min_year_of_era))
    }
}
