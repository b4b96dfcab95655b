//! High-level itinerary API.
//!
//! [`Itinerary`] is what interfaces talk to. It validates raw parameters,
//! scopes every call to one day and forwards it to the injected
//! [`PlaceStore`]. Store calls are synchronous (SQLite, blocking HTTP), so
//! each one runs on tokio's blocking pool.
//!
//! Mutations are never optimistic: after a delete or move the day is read
//! back from the store and that fresh list is returned.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use tripline_core::{
//!     params::{AddPlace, DayQuery},
//!     store::MemoryStore,
//!     ItineraryBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let itinerary = ItineraryBuilder::new()
//!     .with_store(Arc::new(MemoryStore::new()))
//!     .build()
//!     .await?;
//!
//! itinerary
//!     .add_place(&AddPlace {
//!         day: 3,
//!         name: "Museum".to_string(),
//!         lat: 37.1,
//!         lng: 127.1,
//!         memo: None,
//!     })
//!     .await?;
//!
//! let plan = itinerary.list_places(&DayQuery { day: 3 }).await?;
//! assert_eq!(plan.len(), 1);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tokio::task;

use crate::{
    error::{Result, TripError},
    store::PlaceStore,
};

pub mod builder;
pub mod place_ops;


pub use builder::ItineraryBuilder;

/// Day-scoped operations over one record store.
#[derive(Clone)]
pub struct Itinerary {
    store: Arc<dyn PlaceStore>,
}

impl Itinerary {
    pub fn new(store: Arc<dyn PlaceStore>) -> Self {
        Self { store }
    }

    /// Name of the backend in use (`sqlite`, `remote`, `memory`).
    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    /// Run a store call on the blocking pool.
    async fn run<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&dyn PlaceStore) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        task::spawn_blocking(move || op(store.as_ref()))
            .await
            .map_err(|e| TripError::Configuration {
                message: format!("Task join error: {e}"),
            })?
    }
}
