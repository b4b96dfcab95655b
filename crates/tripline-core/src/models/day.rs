//! The day an itinerary entry belongs to.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TripError};

/// A trip day, always within `Day::MIN..=Day::MAX`.
///
/// Every itinerary operation is scoped to exactly one day, so the bound is
/// checked once here instead of at each store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Day(u8);

impl Day {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 13;
    pub const FIRST: Day = Day(Self::MIN);

    /// Validate a day number.
    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TripError::validation("day").with_reason(format!(
                "must be between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every day of the trip in ascending order.
    pub fn all() -> impl Iterator<Item = Day> {
        (Self::MIN..=Self::MAX).map(Day)
    }
}

impl Default for Day {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<i64> for Day {
    type Error = TripError;

    fn try_from(value: i64) -> Result<Self> {
        u8::try_from(value)
            .map_err(|_| {
                TripError::validation("day").with_reason(format!(
                    "must be between {} and {}, got {value}",
                    Self::MIN,
                    Self::MAX
                ))
            })
            .and_then(Self::new)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0
    }
}

impl From<Day> for i64 {
    fn from(day: Day) -> Self {
        i64::from(day.0)
    }
}
