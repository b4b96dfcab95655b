//! SQLite storage for itinerary places.
//!
//! A [`Database`] wraps one connection. The schema is created on open and
//! older files are migrated in place, so any `trip_plan` database written by
//! earlier releases can be opened directly.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod place_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database file and brings its schema up to date.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
