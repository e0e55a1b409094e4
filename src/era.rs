//! Eras and the mapping between (era, year-of-era) and proleptic years.
//!
//! Each calendar owns a small closed set of eras. The Julian and British
//! cutover calendars share [`JulianEra`], the International Fixed calendar has
//! the single [`IfcEra`], and the Symmetry calendars use [`IsoEra`]. A date
//! API taking `C::Era` rejects foreign eras at compile time; [`AnyEra`] exists
//! for callers that pick the era at runtime, and is checked by identity.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::{CalendarError, prelude::*};

/// Behavior shared by every calendar's era set.
pub trait CalendarEra:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Into<AnyEra> + Send + Sync + 'static
{
    /// Every era of the calendar, ordered by numeric value
    const ALL: &'static [Self];

    /// Numeric value of the era, as reported by the `Era` field
    fn value(self) -> i64;

    /// Unwraps an [`AnyEra`] if it belongs to this era set
    fn from_any(era: AnyEra) -> Option<Self>;

    /// Converts a year-of-era in this era to a proleptic year.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYearOfEra` if `year_of_era` is below 1.
    fn proleptic_year(self, year_of_era: i32) -> Result<i32, CalendarError>;

    /// Splits a proleptic year into its era and year-of-era
    fn of_proleptic_year(year: i32) -> (Self, i32);

    /// Looks an era up by its numeric value
    fn from_value(value: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|era| era.value() == value)
    }

    /// Looks an era up by its display name
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|era| era.to_string() == name)
    }
}

fn check_year_of_era(year_of_era: i32) -> Result<i32, CalendarError> {
    if year_of_era < 1 {
        return Err(CalendarError::InvalidYearOfEra(year_of_era));
    }
    Ok(year_of_era)
}

/// Eras of the Julian and British cutover calendars
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum JulianEra {
    /// Before Christ, proleptic years 0 and below
    #[display(fmt = "BC")]
    Bc,
    /// Anno Domini, proleptic years 1 and above
    #[display(fmt = "AD")]
    Ad,
}

impl CalendarEra for JulianEra {
    const ALL: &'static [Self] = &[Self::Bc, Self::Ad];

    fn value(self) -> i64 {
        match self {
            Self::Bc => 0,
            Self::Ad => 1,
        }
    }

    fn from_any(era: AnyEra) -> Option<Self> {
        match era {
            AnyEra::Julian(era) => Some(era),
            AnyEra::Fixed(_) | AnyEra::Iso(_) => None,
        }
    }

    fn proleptic_year(self, year_of_era: i32) -> Result<i32, CalendarError> {
        let year_of_era = check_year_of_era(year_of_era)?;
        Ok(match self {
            Self::Ad => year_of_era,
            Self::Bc => 1 - year_of_era,
        })
    }

    fn of_proleptic_year(year: i32) -> (Self, i32) {
        if year >= 1 { (Self::Ad, year) } else { (Self::Bc, 1 - year) }
    }
}

/// The single era of the International Fixed calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum IfcEra {
    /// Common Era
    #[display(fmt = "CE")]
    Ce,
}

impl CalendarEra for IfcEra {
    const ALL: &'static [Self] = &[Self::Ce];

    fn value(self) -> i64 {
        1
    }

    fn from_any(era: AnyEra) -> Option<Self> {
        match era {
            AnyEra::Fixed(era) => Some(era),
            AnyEra::Julian(_) | AnyEra::Iso(_) => None,
        }
    }

    fn proleptic_year(self, year_of_era: i32) -> Result<i32, CalendarError> {
        check_year_of_era(year_of_era)
    }

    fn of_proleptic_year(year: i32) -> (Self, i32) {
        (Self::Ce, year)
    }
}

/// Eras of the Symmetry calendars, the ISO pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum IsoEra {
    /// Before Common Era, proleptic years 0 and below
    #[display(fmt = "BCE")]
    Bce,
    /// Common Era, proleptic years 1 and above
    #[display(fmt = "CE")]
    Ce,
}

impl CalendarEra for IsoEra {
    const ALL: &'static [Self] = &[Self::Bce, Self::Ce];

    fn value(self) -> i64 {
        match self {
            Self::Bce => 0,
            Self::Ce => 1,
        }
    }

    fn from_any(era: AnyEra) -> Option<Self> {
        match era {
            AnyEra::Iso(era) => Some(era),
            AnyEra::Julian(_) | AnyEra::Fixed(_) => None,
        }
    }

    fn proleptic_year(self, year_of_era: i32) -> Result<i32, CalendarError> {
        let year_of_era = check_year_of_era(year_of_era)?;
        Ok(match self {
            Self::Ce => year_of_era,
            Self::Bce => 1 - year_of_era,
        })
    }

    fn of_proleptic_year(year: i32) -> (Self, i32) {
        if year >= 1 { (Self::Ce, year) } else { (Self::Bce, 1 - year) }
    }
}

/// An era from any calendar, for callers choosing the era at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
pub enum AnyEra {
    Julian(JulianEra),
    Fixed(IfcEra),
    Iso(IsoEra),
}
