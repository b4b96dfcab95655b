//! Command-line argument wrappers using clap
//!
//! Each subcommand gets its own clap structure that converts into the
//! matching core parameter type:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Itinerary
//! ```
//!
//! The core parameter types carry no clap attributes. Day numbers and ids
//! are passed through unchecked here; the core validates them so that every
//! interface reports the same errors.
//!
//! `--day` is optional on every command. When it is absent the configured
//! default day is used, which is why the conversions take it as an argument
//! instead of implementing `From`.

use std::{fmt, path::PathBuf};

use clap::{Args, ValueEnum};
use tripline_core::params::{AddPlace, DayQuery, MovePlace, PlaceRef};

/// Selects a day
#[derive(Args)]
pub struct DayArgs {
    /// Day of the trip (1-13). Defaults to the configured default day
    #[arg(short, long)]
    pub day: Option<u8>,
}

impl DayArgs {
    pub fn into_params(self, default_day: u8) -> DayQuery {
        DayQuery {
            day: self.day.unwrap_or(default_day),
        }
    }
}

/// Append a place to a day
///
/// The new place always goes to the end of the day. Negative coordinates are
/// accepted as values, so `--lng -70.6` works without `=`.
#[derive(Args)]
pub struct AddArgs {
    /// Name of the place
    pub name: String,
    #[arg(long, allow_negative_numbers = true, help = "Latitude in degrees")]
    pub lat: f64,
    #[arg(long, allow_negative_numbers = true, help = "Longitude in degrees")]
    pub lng: f64,
    #[arg(short, long, help = "Free-form note shown with the place")]
    pub memo: Option<String>,
    #[arg(short, long, help = "Day of the trip (1-13)")]
    pub day: Option<u8>,
}

impl AddArgs {
    pub fn into_params(self, default_day: u8) -> AddPlace {
        AddPlace {
            day: self.day.unwrap_or(default_day),
            name: self.name,
            lat: self.lat,
            lng: self.lng,
            memo: self.memo,
        }
    }
}

/// Remove a place from a day
#[derive(Args)]
pub struct DeleteArgs {
    #[arg(help = "ID of the place to remove")]
    pub id: String,
    #[arg(short, long, help = "Day of the trip (1-13)")]
    pub day: Option<u8>,
}

impl DeleteArgs {
    pub fn into_params(self, default_day: u8) -> PlaceRef {
        PlaceRef {
            day: self.day.unwrap_or(default_day),
            id: self.id,
        }
    }
}

/// Swap a place with the neighbour before or after it
#[derive(Args)]
pub struct MoveArgs {
    #[arg(help = "ID of the place to move")]
    pub id: String,
    #[arg(value_enum, help = "Direction to move the place in")]
    pub direction: DirectionArg,
    #[arg(short, long, help = "Day of the trip (1-13)")]
    pub day: Option<u8>,
}

impl MoveArgs {
    pub fn into_params(self, default_day: u8) -> MovePlace {
        MovePlace {
            day: self.day.unwrap_or(default_day),
            id: self.id,
            direction: self.direction.to_string(),
        }
    }
}

/// Shorthand for `move <ID> up` and `move <ID> down`
#[derive(Args)]
pub struct StepArgs {
    #[arg(help = "ID of the place to move")]
    pub id: String,
    #[arg(short, long, help = "Day of the trip (1-13)")]
    pub day: Option<u8>,
}

impl StepArgs {
    pub fn into_move(self, direction: DirectionArg) -> MoveArgs {
        MoveArgs {
            id: self.id,
            direction,
            day: self.day,
        }
    }
}

/// Write a day's route as an HTML page
#[derive(Args)]
pub struct MapArgs {
    #[arg(short, long, help = "Day of the trip (1-13)")]
    pub day: Option<u8>,
    /// File to write. Defaults to day-N.html in the current directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl MapArgs {
    /// Splits into the day to render and the file to write it to.
    pub fn into_params(self, default_day: u8) -> (DayQuery, PathBuf) {
        let query = DayQuery {
            day: self.day.unwrap_or(default_day),
        };
        let output = self
            .output
            .unwrap_or_else(|| PathBuf::from(format!("day-{}.html", query.day)));
        (query, output)
    }
}

/// Command-line representation of move directions
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    /// Towards the start of the day
    Up,
    /// Towards the end of the day
    Down,
}

impl fmt::Display for DirectionArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionArg::Up => write!(f, "up"),
            DirectionArg::Down => write!(f, "down"),
        }
    }
}
