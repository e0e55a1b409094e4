use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CalendarError, ChronoField};

/// Separator between the bounds in the text form of a range
const RANGE_SEPARATOR: &str = "..=";

/// The currently valid bounds of a field (inclusive).
/// The minimum must be less than or equal to the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueRange {
    min: i64,
    max: i64,
}

impl ValueRange {
    /// Creates a new range with validation.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidRange` if min > max.
    pub fn new(min: i64, max: i64) -> Result<Self, CalendarError> {
        if min > max {
            return Err(CalendarError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Range built from bounds the caller already knows are ordered
    pub(crate) const fn of(min: i64, max: i64) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    /// Returns the smallest valid value
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Returns the largest valid value
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Returns both bounds as a tuple
    pub const fn bounds(&self) -> (i64, i64) {
        (self.min, self.max)
    }

    /// Checks if the range contains a given value
    pub const fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Checks that `value` is valid for `field`, returning it unchanged.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidValue` if the value is outside the range.
    pub fn check_valid_value(&self, value: i64, field: ChronoField) -> Result<i64, CalendarError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(CalendarError::InvalidValue { field, value, range: *self })
        }
    }
}

impl From<ValueRange> for (i64, i64) {
    fn from(range: ValueRange) -> Self {
        range.bounds()
    }
}

impl PartialEq<(i64, i64)> for ValueRange {
    fn eq(&self, other: &(i64, i64)) -> bool {
        self.bounds() == *other
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{RANGE_SEPARATOR}{}", self.min, self.max)
    }
}

impl FromStr for ValueRange {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let (min_str, max_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
            CalendarError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))
        })?;

        let parse = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| CalendarError::InvalidFormat(part.to_owned()))
        };

        Self::new(parse(min_str)?, parse(max_str)?)
    }
}

impl Serialize for ValueRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ValueRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
