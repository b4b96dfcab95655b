//! Markdown formatting for itinerary output.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context such as "this place was just created" or
//! a trip-wide summary. Everything renders as markdown so the CLI can hand
//! it to a terminal renderer unchanged.
//!
//! - [`collections`]: trip-wide overview
//! - [`results`]: outcome of add, move, delete and map export
//! - [`datetime`]: timestamps in the local time zone
//!
//! ```rust
//! use tripline_core::{display::MapResult, models::Day};
//!
//! let result = MapResult { day: Day::FIRST, stops: 2, path: "day-1.html".into() };
//! assert_eq!(result.to_string(), "Wrote map for day 1 with 2 stops to day-1.html\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::TripOverview;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, MapResult, UpdateResult};
