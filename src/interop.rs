//! Conversion to and from the standard proleptic Gregorian date,
//! [`chrono::NaiveDate`], through the epoch day.

use chrono::{Datelike, NaiveDate};

use crate::calendar::Calendar;
use crate::consts::DAYS_0001_TO_1970;
use crate::{CalendarDate, CalendarError};

/// Days from the day before 0001-01-01, chrono's day 0, to 1970-01-01
const CHRONO_DAYS_TO_EPOCH: i64 = DAYS_0001_TO_1970 + 1;

/// A date that can be placed on the epoch-day line.
///
/// Every calendar converts into every other through this trait, and through
/// it alone.
pub trait EpochDayDate {
    /// Days since 1970-01-01, negative before it
    fn epoch_day(&self) -> i64;
}

impl<C: Calendar> EpochDayDate for CalendarDate<C> {
    fn epoch_day(&self) -> i64 {
        self.to_epoch_day()
    }
}

impl EpochDayDate for NaiveDate {
    fn epoch_day(&self) -> i64 {
        i64::from(self.num_days_from_ce()) - CHRONO_DAYS_TO_EPOCH
    }
}

impl<C: Calendar> TryFrom<NaiveDate> for CalendarDate<C> {
    type Error = CalendarError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_date(&date)
    }
}

impl<C: Calendar> TryFrom<CalendarDate<C>> for NaiveDate {
    type Error = CalendarError;

    fn try_from(date: CalendarDate<C>) -> Result<Self, Self::Error> {
        let days = i32::try_from(date.to_epoch_day() + CHRONO_DAYS_TO_EPOCH).map_err(|_| CalendarError::Overflow)?;
        Self::from_num_days_from_ce_opt(days).ok_or(CalendarError::Overflow)
    }
}
