//! Core library for the Tripline itinerary planner.
//!
//! A trip has thirteen days. Each day holds an ordered list of places; the
//! orders of a day are always `1..=N`, whatever was added, moved or removed.
//! A day's places can be composed into a map description with transit
//! directions between consecutive stops.
//!
//! # Layers
//!
//! - [`store`]: the [`PlaceStore`] contract and its SQLite, remote JSON and
//!   in-memory backends
//! - [`ordering`]: the reorder and renumber rules shared by local backends
//! - [`itinerary`]: the async, day-scoped API interfaces talk to
//! - [`route`] and [`map_html`]: map description and a standalone HTML page
//! - [`display`]: markdown output for terminals
//!
//! # Quick Start
//!
//! ```rust
//! use tripline_core::{
//!     params::{AddPlace, DayQuery, MovePlace},
//!     ItineraryBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let itinerary = ItineraryBuilder::new()
//!     .with_database_path("trip.db")
//!     .build()
//!     .await?;
//!
//! let museum = itinerary
//!     .add_place(&AddPlace {
//!         day: 3,
//!         name: "Museum".to_string(),
//!         lat: 37.1,
//!         lng: 127.1,
//!         memo: None,
//!     })
//!     .await?;
//!
//! let plan = itinerary
//!     .move_place(&MovePlace {
//!         day: 3,
//!         id: museum.id.to_string(),
//!         direction: "down".to_string(),
//!     })
//!     .await?;
//! println!("{plan}");
//!
//! let map = itinerary.route_map(&DayQuery { day: 3 }).await?;
//! println!("{map}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod itinerary;
pub mod map_html;
pub mod models;
pub mod ordering;
pub mod params;
pub mod route;
pub mod store;

// Re-export commonly used types
pub use config::{Backend, Settings};
pub use db::Database;
pub use display::{CreateResult, DeleteResult, MapResult, TripOverview, UpdateResult};
pub use error::{Result, TripError};
pub use itinerary::{Itinerary, ItineraryBuilder};
pub use models::{
    Coordinate, Day, DayPlan, DaySummary, Direction, Leg, Marker, NewPlace, Place, PlaceId,
    RouteMap,
};
pub use params::{AddPlace, DayQuery, MovePlace, PlaceRef};
pub use store::{MemoryStore, PlaceStore, RemoteStore, SqliteStore};
