use std::fmt;

use serde::{Deserialize, Serialize};

/// A date-based amount of time: years, months and days.
///
/// The components are independent and keep their signs; a period is not
/// normalized, so `1 year` and `12 months` are different periods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    years:  i64,
    months: i64,
    days:   i64,
}

impl Period {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(years: i64, months: i64, days: i64) -> Self {
        Self { years, months, days }
    }

    pub const fn of_years(years: i64) -> Self {
        Self::new(years, 0, 0)
    }

    pub const fn of_months(months: i64) -> Self {
        Self::new(0, months, 0)
    }

    pub const fn of_days(days: i64) -> Self {
        Self::new(0, 0, days)
    }

    pub const fn years(&self) -> i64 {
        self.years
    }

    pub const fn months(&self) -> i64 {
        self.months
    }

    pub const fn days(&self) -> i64 {
        self.days
    }

    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Returns true if any component is negative
    pub const fn is_negative(&self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }

    /// Negates every component, or `None` if one is `i64::MIN`
    pub const fn checked_neg(&self) -> Option<Self> {
        match (self.years.checked_neg(), self.months.checked_neg(), self.days.checked_neg()) {
            (Some(years), Some(months), Some(days)) => Some(Self::new(years, months, days)),
            _ => None,
        }
    }
}

/// ISO-8601 style, e.g. `P1Y2M3D`, with zero components left out
impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("P0D");
        }
        f.write_str("P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}
