use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::calendar::Calendar;
use crate::era::CalendarEra;
use crate::interop::EpochDayDate;
use crate::CalendarError;

/// A date in calendar `C`.
///
/// Always holds a resolved date: a `(year, month, day)` the calendar accepts
/// and that denotes itself, so converting to an epoch day and back returns
/// the same value. Dates are immutable; every adjustment returns a new date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate<C: Calendar> {
    year:     i32,
    month:    u8,
    day:      u8,
    calendar: C,
}

impl<C: Calendar> CalendarDate<C> {
    /// Builds a date the caller has already validated and resolved
    pub(crate) fn from_resolved((year, month, day): (i32, u8, u8)) -> Self {
        debug_assert!(C::validate(year, month, day).is_ok());
        Self { year, month, day, calendar: C::default() }
    }

    /// Creates a date from a proleptic year, month and day.
    ///
    /// # Errors
    /// Returns `InvalidYear`, `InvalidMonth` or `InvalidDay` if the calendar
    /// does not accept the combination.
    pub fn of(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        C::validate(year, month, day).map(Self::from_resolved)
    }

    /// Creates a date from an era, year-of-era, month and day.
    ///
    /// # Errors
    /// Returns `InvalidYearOfEra` if `year_of_era` is below 1, and the errors
    /// of [`CalendarDate::of`] otherwise.
    pub fn of_year_of_era(era: C::Era, year_of_era: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::of(C::proleptic_year(era, year_of_era)?, month, day)
    }

    /// Creates a date from a proleptic year and day of year.
    ///
    /// # Errors
    /// Returns `InvalidYear` for a year outside the calendar's range, and
    /// `InvalidDayOfYear` for a day of year the year does not have.
    pub fn of_year_day(year: i32, day_of_year: u16) -> Result<Self, CalendarError> {
        if !(C::MIN_YEAR..=C::MAX_YEAR).contains(&year) {
            return Err(CalendarError::InvalidYear { calendar: C::NAME, year });
        }
        if day_of_year < 1 || day_of_year > C::length_of_year(year) {
            return Err(CalendarError::InvalidDayOfYear { calendar: C::NAME, year, day_of_year });
        }
        let (month, day) = C::date_of_year_day(year, day_of_year);
        Ok(Self::from_resolved((year, month, day)))
    }

    /// Creates the date falling on an epoch day (days since 1970-01-01).
    ///
    /// # Errors
    /// Returns `Overflow` if the epoch day is outside the calendar's range.
    pub fn of_epoch_day(epoch_day: i64) -> Result<Self, CalendarError> {
        if !(C::min_epoch_day()..=C::max_epoch_day()).contains(&epoch_day) {
            return Err(CalendarError::Overflow);
        }
        Ok(Self::from_resolved(C::epoch_day_to_date(epoch_day)))
    }

    /// Converts any date with an epoch day, from any calendar, into this one.
    ///
    /// # Errors
    /// Returns `Overflow` if the day is outside this calendar's range.
    pub fn from_date<D: EpochDayDate + ?Sized>(date: &D) -> Result<Self, CalendarError> {
        Self::of_epoch_day(date.epoch_day())
    }

    /// Converts this date into calendar `D`.
    ///
    /// # Errors
    /// Returns `Overflow` if the day is outside calendar `D`'s range.
    pub fn to_calendar<D: Calendar>(&self) -> Result<CalendarDate<D>, CalendarError> {
        CalendarDate::<D>::from_date(self)
    }

    /// Days since 1970-01-01
    pub fn to_epoch_day(&self) -> i64 {
        C::date_to_epoch_day(self.year, self.month, self.day)
    }

    /// Returns the proleptic year
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month of year, starting at 1
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of month, starting at 1
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the calendar descriptor
    pub const fn calendar(&self) -> C {
        self.calendar
    }

    pub fn day_of_year(&self) -> u16 {
        C::day_of_year(self.year, self.month, self.day)
    }

    /// Day of week from 1 to 7, or 0 for a day that belongs to no week
    pub fn day_of_week(&self) -> u8 {
        if self.is_special_day() { 0 } else { C::day_of_week(self.year, self.month, self.day) }
    }

    /// True for intercalary days, which belong to no week
    pub fn is_special_day(&self) -> bool {
        C::is_special_day(self.year, self.month, self.day)
    }

    pub fn era(&self) -> C::Era {
        C::Era::of_proleptic_year(self.year).0
    }

    pub fn year_of_era(&self) -> i32 {
        C::Era::of_proleptic_year(self.year).1
    }

    /// Months since year 0, month 1
    pub fn proleptic_month(&self) -> i64 {
        i64::from(self.year) * i64::from(C::MONTHS_IN_YEAR) + i64::from(self.month) - 1
    }

    pub fn is_leap_year(&self) -> bool {
        C::is_leap_year(i64::from(self.year))
    }

    pub fn length_of_month(&self) -> u8 {
        C::length_of_month(self.year, self.month)
    }

    pub fn length_of_year(&self) -> u16 {
        C::length_of_year(self.year)
    }

    pub const fn months_in_year(&self) -> u8 {
        C::MONTHS_IN_YEAR
    }
}

impl<C: Calendar> PartialOrd for CalendarDate<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Calendar> Ord for CalendarDate<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Resolved dates order by (year, month, day) exactly as by epoch day.
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl<C: Calendar> fmt::Display for CalendarDate<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = C::SEPARATOR;
        write!(
            f,
            "{} {} {}{separator}{:02}{separator}{:02}",
            C::NAME,
            self.era(),
            self.year_of_era(),
            self.month,
            self.day
        )
    }
}

impl<C: Calendar> FromStr for CalendarDate<C> {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::InvalidFormat("Empty date string".to_owned()));
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let [name, era, ymd] = parts.as_slice() else {
            return Err(CalendarError::InvalidFormat(format!(
                "Expected '<calendar> <era> <year>{sep}<month>{sep}<day>': {s}",
                sep = C::SEPARATOR
            )));
        };

        if *name != C::NAME {
            return Err(CalendarError::InvalidFormat(format!(
                "Expected calendar {}, found {name}",
                C::NAME
            )));
        }
        let era = C::Era::from_name(era)
            .ok_or_else(|| CalendarError::InvalidFormat(format!("Unknown {} era: {era}", C::NAME)))?;

        let components: Vec<&str> = ymd.split(C::SEPARATOR).collect();
        let [year, month, day] = components.as_slice() else {
            return Err(CalendarError::InvalidFormat(format!(
                "Expected 3 '{}'-separated components, found {}",
                C::SEPARATOR,
                components.len()
            )));
        };

        Self::of_year_of_era(era, parse_number(year)?, parse_number(month)?, parse_number(day)?)
    }
}

/// Helper to parse a date component with better error messages
fn parse_number<T: FromStr>(s: &str) -> Result<T, CalendarError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalendarError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>().map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
}

impl<C: Calendar> serde::Serialize for CalendarDate<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, C: Calendar> serde::Deserialize<'de> for CalendarDate<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
