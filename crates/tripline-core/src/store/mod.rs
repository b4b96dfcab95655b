//! Record stores holding the places of every day.
//!
//! The itinerary talks to storage only through [`PlaceStore`], so the local
//! SQLite file, the remote sheet API and the in-memory fake are
//! interchangeable. Implementations are synchronous; the itinerary runs them
//! on the blocking pool.

use crate::{
    error::Result,
    models::{Day, Direction, NewPlace, Place, PlaceId},
};

mod envelope;
pub mod memory;
pub mod remote;
pub mod sqlite;

pub use memory::MemoryStore;
pub use remote::RemoteStore;
pub use sqlite::SqliteStore;

/// CRUD contract over one trip's places, always scoped to a single day.
pub trait PlaceStore: Send + Sync {
    /// Short backend name used in log lines.
    fn backend(&self) -> &'static str;

    /// The day's places. Order is not guaranteed; callers sort.
    fn list(&self, day: Day) -> Result<Vec<Place>>;

    /// Append a place to the day. The store picks the id and `max + 1` order.
    fn add(&self, day: Day, place: &NewPlace) -> Result<Place>;

    /// Remove a place and renumber the rest of the day.
    ///
    /// Returns `false` when the id did not match anything on the day.
    fn delete(&self, day: Day, id: &PlaceId) -> Result<bool>;

    /// Swap a place with its neighbour and renumber the day.
    ///
    /// Returns `false` when nothing moved.
    fn move_place(&self, day: Day, id: &PlaceId, direction: Direction) -> Result<bool>;
}
