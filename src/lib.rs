//! Alternative calendar systems interoperating through the epoch day.
//!
//! Five calendars are provided: the British cutover calendar, the
//! International Fixed calendar, the proleptic Julian calendar, and the
//! Symmetry010 and Symmetry454 perpetual calendars. Every calendar is a
//! zero-sized [`Calendar`] descriptor, and every date is a [`CalendarDate`]
//! over one of them, so construction, field access, arithmetic and period
//! computation behave the same way everywhere.
//!
//! ```
//! use alt_calendars::{BritishCutoverDate, ChronoUnit, InternationalFixedDate, JulianDate};
//!
//! let julian = JulianDate::of(2012, 6, 23)?;
//! assert_eq!(julian.to_string(), "Julian AD 2012-06-23");
//!
//! let gap = BritishCutoverDate::of(1752, 9, 3)?;
//! assert_eq!(gap.to_string(), "BritishCutover AD 1752-09-14");
//!
//! let fixed = InternationalFixedDate::from_date(&julian)?;
//! assert_eq!(fixed.plus(1, ChronoUnit::Days)?.to_string(), "Ifc CE 2012/07/20");
//! # Ok::<(), alt_calendars::CalendarError>(())
//! ```

mod arithmetic;
mod british;
mod calendar;
mod consts;
mod date;
mod era;
mod fields;
mod ifc;
mod interop;
mod iso;
mod julian;
mod period;
mod prelude;
mod range;
mod symmetry;
mod types;

pub use british::BritishCutover;
pub use calendar::Calendar;
pub use consts::*;
pub use date::CalendarDate;
pub use era::{AnyEra, CalendarEra, IfcEra, IsoEra, JulianEra};
pub use ifc::InternationalFixed;
pub use interop::EpochDayDate;
pub use julian::Julian;
pub use period::Period;
pub use range::ValueRange;
pub use symmetry::{Symmetry010, Symmetry454};
pub use types::{ChronoField, ChronoUnit};

/// A date in the British cutover calendar
pub type BritishCutoverDate = CalendarDate<BritishCutover>;
/// A date in the International Fixed calendar
pub type InternationalFixedDate = CalendarDate<InternationalFixed>;
/// A date in the proleptic Julian calendar
pub type JulianDate = CalendarDate<Julian>;
/// A date in the Symmetry010 calendar
pub type Symmetry010Date = CalendarDate<Symmetry010>;
/// A date in the Symmetry454 calendar
pub type Symmetry454Date = CalendarDate<Symmetry454>;

/// Error type for calendar operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Year outside the calendar's supported range.
    #[error("Invalid year for {calendar}: {year}")]
    InvalidYear { calendar: &'static str, year: i32 },

    /// Month outside `1..=months_in_year`.
    #[error("Invalid month for {calendar}: {month}")]
    InvalidMonth { calendar: &'static str, month: u8 },

    /// Day not accepted for the year and month.
    #[error("Invalid day for {calendar}: {day} in {year}-{month:02}")]
    InvalidDay {
        calendar: &'static str,
        year:     i32,
        month:    u8,
        day:      u8,
    },

    /// Day of year outside `1..=length_of_year`.
    #[error("Invalid day of year for {calendar}: {day_of_year} in {year}")]
    InvalidDayOfYear {
        calendar:    &'static str,
        year:        i32,
        day_of_year: u16,
    },

    /// Year-of-era below 1.
    #[error("Invalid year of era: {0} (must be at least 1)")]
    InvalidYearOfEra(i32),

    /// Field value outside the field's current range.
    #[error("Invalid value for {field}: {value} (valid values {range})")]
    InvalidValue {
        field: ChronoField,
        value: i64,
        range: ValueRange,
    },

    /// Range with its bounds the wrong way round.
    #[error("Invalid range: minimum {min} is greater than maximum {max}")]
    InvalidRange { min: i64, max: i64 },

    /// Field the calendar does not define.
    #[error("Unsupported field: {0}")]
    UnsupportedField(ChronoField),

    /// Arithmetic unit the calendar does not define.
    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(ChronoUnit),

    /// Era belonging to another calendar.
    #[error("Era {era} does not belong to the {calendar} calendar")]
    EraMismatch { era: AnyEra, calendar: &'static str },

    /// Result outside the calendar's supported range.
    #[error("Date arithmetic overflowed the supported range")]
    Overflow,

    /// Malformed text.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
}

impl CalendarError {
    /// True for the "not applicable" errors: unsupported fields and units
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedField(_) | Self::UnsupportedUnit(_))
    }

    /// True when an era of another calendar was supplied
    pub const fn is_era_mismatch(&self) -> bool {
        matches!(self, Self::EraMismatch { .. })
    }
}
