//! Reorder direction.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TripError;

/// Which neighbour a place swaps with when moved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards order 1
    Up,
    /// Towards the end of the day
    Down,
}

impl FromStr for Direction {
    type Err = TripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(TripError::validation("direction")
                .with_reason(format!("expected 'up' or 'down', got '{s}'"))),
        }
    }
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}
