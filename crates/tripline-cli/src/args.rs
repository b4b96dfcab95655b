use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tripline_core::Backend;

use crate::cli::{AddArgs, DayArgs, DeleteArgs, MapArgs, MoveArgs, StepArgs};

/// Day-by-day trip itinerary planner
///
/// Keeps an ordered list of places for each of the thirteen days of a trip,
/// and turns a day into a route with public transit directions between
/// consecutive stops. Places live in a local SQLite file or behind a remote
/// JSON endpoint.
#[derive(Parser)]
#[command(version, about, name = "trip")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/tripline/trip_plan.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Storage backend; overrides the config file
    #[arg(long, global = true, value_enum)]
    pub backend: Option<BackendArg>,

    /// Endpoint for the remote backend
    #[arg(long, global = true)]
    pub remote_url: Option<String>,

    /// Seconds to wait for the remote backend
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Config file. Defaults to $XDG_CONFIG_HOME/tripline/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the trip CLI
#[derive(Subcommand)]
pub enum Commands {
    /// List the places planned for a day
    #[command(aliases = ["l", "ls"])]
    List(DayArgs),
    /// Append a place to the end of a day
    #[command(alias = "a")]
    Add(AddArgs),
    /// Remove a place and renumber the rest of the day
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
    /// Swap a place with its neighbour
    #[command(alias = "mv")]
    Move(MoveArgs),
    /// Move a place one position earlier
    Up(StepArgs),
    /// Move a place one position later
    Down(StepArgs),
    /// Show the route and transit links for a day
    #[command(alias = "r")]
    Route(DayArgs),
    /// Write the day's route as a standalone HTML map
    Map(MapArgs),
    /// Count the places planned on every day
    #[command(alias = "o")]
    Overview,
}

/// Command-line representation of the storage backends
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Sqlite,
    Remote,
}

impl From<BackendArg> for Backend {
    fn from(val: BackendArg) -> Self {
        match val {
            BackendArg::Sqlite => Backend::Sqlite,
            BackendArg::Remote => Backend::Remote,
        }
    }
}
