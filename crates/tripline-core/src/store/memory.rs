//! In-process store for tests and embedders.

use std::sync::{Mutex, MutexGuard, PoisonError};

use jiff::Timestamp;

use super::PlaceStore;
use crate::{
    error::Result,
    models::{Day, Direction, NewPlace, Place, PlaceId},
    ordering,
};

#[derive(Debug, Default)]
struct MemoryState {
    next_id: u64,
    places: Vec<Place>,
}

impl MemoryState {
    /// The day's places, sorted by order.
    fn day(&self, day: Day) -> Vec<Place> {
        let mut places: Vec<Place> = self
            .places
            .iter()
            .filter(|place| place.day == day)
            .cloned()
            .collect();
        ordering::sort_by_order(&mut places);
        places
    }

    /// Replace the day's places with `places`, renumbered in sequence.
    fn replace_day(&mut self, day: Day, mut places: Vec<Place>) {
        ordering::renumber_in_place(&mut places);
        self.places.retain(|place| place.day != day);
        self.places.extend(places);
    }
}

/// Keeps every place in a mutex-guarded vector. Ids are sequential integers
/// rendered as strings, like the SQLite backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PlaceStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    fn list(&self, day: Day) -> Result<Vec<Place>> {
        Ok(self.lock().day(day))
    }

    fn add(&self, day: Day, place: &NewPlace) -> Result<Place> {
        let mut state = self.lock();
        let order = ordering::next_order(&state.day(day));
        state.next_id += 1;

        let place = place.clone().into_place(
            PlaceId::new(state.next_id.to_string()),
            day,
            order,
            Some(Timestamp::now()),
        );
        state.places.push(place.clone());
        Ok(place)
    }

    fn delete(&self, day: Day, id: &PlaceId) -> Result<bool> {
        let mut state = self.lock();
        let mut places = state.day(day);
        let before = places.len();
        places.retain(|place| &place.id != id);
        let removed = places.len() != before;

        state.replace_day(day, places);
        Ok(removed)
    }

    fn move_place(&self, day: Day, id: &PlaceId, direction: Direction) -> Result<bool> {
        let mut state = self.lock();
        let mut places = state.day(day);
        let Some(target) = places.iter().find(|place| &place.id == id).cloned() else {
            return Ok(false);
        };

        if !ordering::shift(&mut places, &target, direction) {
            return Ok(false);
        }

        state.replace_day(day, places);
        Ok(true)
    }
}
