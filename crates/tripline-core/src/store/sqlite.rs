//! Local SQLite backend.

use std::path::{Path, PathBuf};

use super::PlaceStore;
use crate::{
    db::Database,
    error::Result,
    models::{Day, Direction, NewPlace, Place, PlaceId},
};

/// Opens a fresh connection for every call so nothing is held between
/// actions.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn open(&self) -> Result<Database> {
        Database::new(&self.db_path)
    }
}

impl PlaceStore for SqliteStore {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    fn list(&self, day: Day) -> Result<Vec<Place>> {
        self.open()?.list_places(day)
    }

    fn add(&self, day: Day, place: &NewPlace) -> Result<Place> {
        self.open()?.add_place(day, place)
    }

    fn delete(&self, day: Day, id: &PlaceId) -> Result<bool> {
        self.open()?.delete_place(day, id)
    }

    fn move_place(&self, day: Day, id: &PlaceId, direction: Direction) -> Result<bool> {
        self.open()?.move_place(day, id, direction)
    }
}
