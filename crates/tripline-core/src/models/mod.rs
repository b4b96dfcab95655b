//! Data models for the itinerary.
//!
//! A trip is split into [`Day`]s. Each day holds an ordered list of
//! [`Place`]s whose `order` values are always `1..=N`. The route composer
//! turns a day into a [`RouteMap`].
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so the data structures stay free of
//! presentation logic.
//!
//! # Examples
//!
//! ```rust
//! use tripline_core::models::{Day, NewPlace};
//!
//! let day = Day::new(3)?;
//! let draft = NewPlace::new("  Museum ", 37.1, 127.1, None)?;
//! assert_eq!(draft.name(), "Museum");
//! assert_eq!(day.get(), 3);
//! # Ok::<(), tripline_core::TripError>(())
//! ```

pub mod day;
pub mod direction;
pub mod place;
pub mod route;


pub use day::Day;
pub use direction::Direction;
pub use place::{Coordinate, DayPlan, DaySummary, NewPlace, Place, PlaceId};
pub use route::{Leg, Marker, RouteMap};
