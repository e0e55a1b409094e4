use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Identifies a field that can be read from (or set on) a date.
///
/// The time-of-day and instant fields exist so callers can ask for them and
/// be told they are unsupported; no calendar in this crate carries a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum ChronoField {
    NanoOfSecond,
    MicroOfSecond,
    MilliOfSecond,
    SecondOfMinute,
    MinuteOfHour,
    HourOfDay,
    AmPmOfDay,
    DayOfWeek,
    AlignedDayOfWeekInMonth,
    AlignedDayOfWeekInYear,
    DayOfMonth,
    DayOfYear,
    EpochDay,
    AlignedWeekOfMonth,
    AlignedWeekOfYear,
    MonthOfYear,
    ProlepticMonth,
    YearOfEra,
    Year,
    Era,
    InstantSeconds,
    OffsetSeconds,
}

impl ChronoField {
    /// Every field, in declaration order
    pub const ALL: [Self; 22] = [
        Self::NanoOfSecond,
        Self::MicroOfSecond,
        Self::MilliOfSecond,
        Self::SecondOfMinute,
        Self::MinuteOfHour,
        Self::HourOfDay,
        Self::AmPmOfDay,
        Self::DayOfWeek,
        Self::AlignedDayOfWeekInMonth,
        Self::AlignedDayOfWeekInYear,
        Self::DayOfMonth,
        Self::DayOfYear,
        Self::EpochDay,
        Self::AlignedWeekOfMonth,
        Self::AlignedWeekOfYear,
        Self::MonthOfYear,
        Self::ProlepticMonth,
        Self::YearOfEra,
        Self::Year,
        Self::Era,
        Self::InstantSeconds,
        Self::OffsetSeconds,
    ];

    /// Returns true for the fields a date-only value carries
    pub const fn is_date_based(self) -> bool {
        matches!(
            self,
            Self::DayOfWeek
                | Self::AlignedDayOfWeekInMonth
                | Self::AlignedDayOfWeekInYear
                | Self::DayOfMonth
                | Self::DayOfYear
                | Self::EpochDay
                | Self::AlignedWeekOfMonth
                | Self::AlignedWeekOfYear
                | Self::MonthOfYear
                | Self::ProlepticMonth
                | Self::YearOfEra
                | Self::Year
                | Self::Era
        )
    }

    /// Fields whose value is tied to a weekday, and so collapse on
    /// intercalary days
    pub const fn is_week_based(self) -> bool {
        matches!(
            self,
            Self::DayOfWeek
                | Self::AlignedDayOfWeekInMonth
                | Self::AlignedDayOfWeekInYear
                | Self::AlignedWeekOfMonth
                | Self::AlignedWeekOfYear
        )
    }
}

/// Identifies a unit of date arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum ChronoUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
    Eras,
    Forever,
}

impl ChronoUnit {
    /// Returns true for the units date arithmetic understands
    pub const fn is_date_based(self) -> bool {
        matches!(
            self,
            Self::Days
                | Self::Weeks
                | Self::Months
                | Self::Years
                | Self::Decades
                | Self::Centuries
                | Self::Millennia
                | Self::Eras
        )
    }

    /// Number of years in one of this unit, for the year-scaled units
    pub(crate) const fn years(self) -> Option<i64> {
        match self {
            Self::Years => Some(1),
            Self::Decades => Some(10),
            Self::Centuries => Some(100),
            Self::Millennia => Some(1000),
            _ => None,
        }
    }
}
