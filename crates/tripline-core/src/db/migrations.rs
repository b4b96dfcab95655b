//! Database schema initialization and migrations.

use log::info;

use crate::error::{DatabaseResultExt, Result, TripError};

const HAS_CREATED_AT_SQL: &str =
    "SELECT COUNT(*) FROM pragma_table_info('places') WHERE name = 'created_at'";
const ADD_CREATED_AT_SQL: &str = "ALTER TABLE places ADD COLUMN created_at TEXT";

impl super::Database {
    /// Creates the table and index if missing, then applies migrations.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Bring files written without timestamps up to the current layout.
    fn apply_migrations(&self) -> Result<()> {
        let has_created_at: bool = self
            .connection
            .query_row(HAS_CREATED_AT_SQL, [], |row| row.get(0))
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect places table")?;

        if !has_created_at {
            info!("Migrating places table: adding created_at column");
            self.connection
                .execute(ADD_CREATED_AT_SQL, [])
                .map_err(|e| {
                    TripError::database("Failed to add created_at column to places table")
                        .with_source(e)
                })?;
        }

        Ok(())
    }
}
