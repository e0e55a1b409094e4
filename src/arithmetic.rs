//! The Arithmetic Engine: `plus`, `minus` and `until` for every calendar.
//!
//! Days and weeks shift the epoch day. Months and the year-scaled units keep
//! the day of month and clamp it down to the end of a shorter target month.
//! Whole-unit differences use the same stepping, so `until` counts the
//! largest number of units that `plus` can add without passing the end date.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::calendar::Calendar;
use crate::consts::DAYS_IN_WEEK;
use crate::era::CalendarEra;
use crate::{CalendarDate, CalendarError, ChronoField, ChronoUnit, Period};

fn unsupported<C: Calendar>(unit: ChronoUnit) -> CalendarError {
    debug!(%unit, calendar = C::NAME, "rejected unsupported unit");
    CalendarError::UnsupportedUnit(unit)
}

impl<C: Calendar> CalendarDate<C> {
    /// Builds the date `(year, month, day)`, moving the day down to the last
    /// valid day of the month if needed.
    ///
    /// # Errors
    /// Returns `Overflow` for a year outside the calendar's range.
    pub(crate) fn resolve_previous_valid(year: i64, month: u8, day: u8) -> Result<Self, CalendarError> {
        let year = i32::try_from(year).map_err(|_| CalendarError::Overflow)?;
        if !(C::MIN_YEAR..=C::MAX_YEAR).contains(&year) {
            return Err(CalendarError::Overflow);
        }
        let resolved = C::resolve_previous_valid(year, month, day);
        if resolved.2 < day && resolved.1 == month {
            trace!(year, month, day, clamped_day = resolved.2, calendar = C::NAME, "clamped day to end of month");
        }
        Ok(Self::from_resolved(resolved))
    }

    /// True for the units every calendar in this crate defines
    pub const fn is_supported_unit(&self, unit: ChronoUnit) -> bool {
        unit.is_date_based()
    }

    /// Adds `amount` of `unit`.
    ///
    /// # Errors
    /// Returns `UnsupportedUnit` for a time-based unit or `Forever`,
    /// `Overflow` if the result leaves the calendar's range, and
    /// `InvalidValue` if adding eras leaves the era range.
    pub fn plus(&self, amount: i64, unit: ChronoUnit) -> Result<Self, CalendarError> {
        if let Some(years) = unit.years() {
            return self.plus_years(amount.checked_mul(years).ok_or(CalendarError::Overflow)?);
        }
        match unit {
            ChronoUnit::Days => self.plus_days(amount),
            ChronoUnit::Weeks => self.plus_weeks(amount),
            ChronoUnit::Months => self.plus_months(amount),
            ChronoUnit::Eras => self.plus_eras(amount),
            _ => Err(unsupported::<C>(unit)),
        }
    }

    /// Subtracts `amount` of `unit`.
    ///
    /// # Errors
    /// As [`CalendarDate::plus`].
    pub fn minus(&self, amount: i64, unit: ChronoUnit) -> Result<Self, CalendarError> {
        self.plus(amount.checked_neg().ok_or(CalendarError::Overflow)?, unit)
    }

    /// # Errors
    /// Returns `Overflow` if the result leaves the calendar's range.
    pub fn plus_days(&self, days: i64) -> Result<Self, CalendarError> {
        if days == 0 {
            return Ok(*self);
        }
        let epoch_day = self.to_epoch_day().checked_add(days).ok_or(CalendarError::Overflow)?;
        Self::of_epoch_day(epoch_day)
    }

    /// # Errors
    /// Returns `Overflow` if the result leaves the calendar's range.
    pub fn plus_weeks(&self, weeks: i64) -> Result<Self, CalendarError> {
        self.plus_days(weeks.checked_mul(DAYS_IN_WEEK).ok_or(CalendarError::Overflow)?)
    }

    /// Adds months through the proleptic month, clamping the day.
    ///
    /// # Errors
    /// Returns `Overflow` if the result leaves the calendar's range.
    pub fn plus_months(&self, months: i64) -> Result<Self, CalendarError> {
        if months == 0 {
            return Ok(*self);
        }
        let proleptic_month = self.proleptic_month().checked_add(months).ok_or(CalendarError::Overflow)?;
        let months_in_year = i64::from(C::MONTHS_IN_YEAR);
        let year = proleptic_month.div_euclid(months_in_year);
        let month = proleptic_month.rem_euclid(months_in_year) as u8 + 1;
        Self::resolve_previous_valid(year, month, self.day())
    }

    /// Adds years keeping the month, clamping the day.
    ///
    /// # Errors
    /// Returns `Overflow` if the result leaves the calendar's range.
    pub fn plus_years(&self, years: i64) -> Result<Self, CalendarError> {
        if years == 0 {
            return Ok(*self);
        }
        let year = i64::from(self.year()).checked_add(years).ok_or(CalendarError::Overflow)?;
        Self::resolve_previous_valid(year, self.month(), self.day())
    }

    /// Moves the era value by `eras`, keeping the year of era.
    ///
    /// # Errors
    /// Returns `InvalidValue` if no era has the resulting value.
    pub fn plus_eras(&self, eras: i64) -> Result<Self, CalendarError> {
        let era = self.era().value().checked_add(eras).ok_or(CalendarError::Overflow)?;
        self.with(ChronoField::Era, era)
    }

    /// Adds a period: years first, then months, then days.
    ///
    /// # Errors
    /// Returns `Overflow` if any step leaves the calendar's range.
    pub fn plus_period(&self, period: &Period) -> Result<Self, CalendarError> {
        self.plus_years(period.years())?.plus_months(period.months())?.plus_days(period.days())
    }

    /// # Errors
    /// Returns `Overflow` if any step leaves the calendar's range.
    pub fn minus_period(&self, period: &Period) -> Result<Self, CalendarError> {
        self.plus_period(&period.checked_neg().ok_or(CalendarError::Overflow)?)
    }

    /// Counts whole `unit`s from this date to `end`, negative if `end` is
    /// earlier.
    ///
    /// # Errors
    /// Returns `UnsupportedUnit` for a time-based unit or `Forever`.
    pub fn until(&self, end: &Self, unit: ChronoUnit) -> Result<i64, CalendarError> {
        if let Some(years) = unit.years() {
            return Ok(self.whole_years_until(end).0 / years);
        }
        match unit {
            ChronoUnit::Days => Ok(self.days_until(end)),
            ChronoUnit::Weeks => Ok(self.days_until(end) / DAYS_IN_WEEK),
            ChronoUnit::Months => Ok(self.whole_months_until(end).0),
            ChronoUnit::Eras => Ok(end.era().value() - self.era().value()),
            _ => Err(unsupported::<C>(unit)),
        }
    }

    /// Splits the distance to `end` into whole years, whole months and the
    /// remaining days, so that `self.plus_period(&p) == end`.
    pub fn period_until(&self, end: &Self) -> Period {
        let (years, after_years) = self.whole_years_until(end);
        let (months, after_months) = after_years.whole_months_until(end);
        Period::new(years, months, after_months.days_until(end))
    }

    fn days_until(&self, end: &Self) -> i64 {
        end.to_epoch_day() - self.to_epoch_day()
    }

    fn whole_months_until(&self, end: &Self) -> (i64, Self) {
        let estimate = end.proleptic_month() - self.proleptic_month();
        self.whole_steps_until(end, estimate, Self::plus_months)
    }

    fn whole_years_until(&self, end: &Self) -> (i64, Self) {
        let estimate = i64::from(end.year()) - i64::from(self.year());
        self.whole_steps_until(end, estimate, Self::plus_years)
    }

    /// Largest count `n` in the direction of `end` such that `step(self, n)`
    /// does not pass `end`, with the date it reaches.
    ///
    /// `estimate` may be off by a step or two either way; a step that fails
    /// counts as passing `end`.
    fn whole_steps_until(
        &self,
        end: &Self,
        estimate: i64,
        step: impl Fn(&Self, i64) -> Result<Self, CalendarError>,
    ) -> (i64, Self) {
        let direction = match end.cmp(self) {
            Ordering::Equal => return (0, *self),
            Ordering::Greater => 1,
            Ordering::Less => -1,
        };
        let within = |date: &Self| if direction > 0 { date <= end } else { date >= end };
        let reach = |count: i64| step(self, count).ok().filter(|date| within(date));

        let mut count = if estimate.signum() == direction { estimate } else { 0 };
        let mut reached = *self;
        while count != 0 {
            if let Some(date) = reach(count) {
                reached = date;
                break;
            }
            count -= direction;
        }
        while let Some(date) = reach(count + direction) {
            count += direction;
            reached = date;
        }
        (count, reached)
    }
}
