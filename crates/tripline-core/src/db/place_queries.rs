//! Place CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, Connection};

use crate::{
    error::{DatabaseResultExt, Result, TripError},
    models::{Day, Direction, NewPlace, Place, PlaceId},
    ordering,
};

const SELECT_PLACES_BY_DAY_SQL: &str = "SELECT id, day, ord, name, lat, lng, memo, created_at FROM places WHERE day = ?1 ORDER BY ord ASC, id ASC";
const SELECT_PLACE_IDS_BY_DAY_SQL: &str =
    "SELECT id FROM places WHERE day = ?1 ORDER BY ord ASC, id ASC";
const GET_NEXT_ORDER_SQL: &str = "SELECT COALESCE(MAX(ord), 0) + 1 FROM places WHERE day = ?1";
const INSERT_PLACE_SQL: &str = "INSERT INTO places (day, ord, name, lat, lng, memo, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const DELETE_PLACE_SQL: &str = "DELETE FROM places WHERE id = ?1 AND day = ?2";
const UPDATE_PLACE_ORDER_SQL: &str = "UPDATE places SET ord = ?1 WHERE id = ?2";

impl super::Database {
    /// Helper function to construct a Place from a database row
    fn build_place_from_row(row: &rusqlite::Row) -> rusqlite::Result<Place> {
        let day = Day::try_from(row.get::<_, i64>(1)?).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(1, Type::Integer, Box::new(e))
        })?;

        let order_value: i64 = row.get(2)?;
        let order = u32::try_from(order_value).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, Type::Integer, Box::new(e))
        })?;

        let created_at = row
            .get::<_, Option<String>>(7)?
            .map(|value| value.parse::<Timestamp>())
            .transpose()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e)))?;

        Ok(Place {
            id: PlaceId::from(row.get::<_, i64>(0)?),
            day,
            order,
            name: row.get(3)?,
            lat: row.get(4)?,
            lng: row.get(5)?,
            // Rows written by hand may carry NULL here
            memo: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
            created_at,
        })
    }

    /// SQLite ids are integers; anything else cannot match a row.
    fn row_id(id: &PlaceId) -> Option<i64> {
        id.as_str().trim().parse().ok()
    }

    fn ordered_ids(connection: &Connection, day: Day) -> Result<Vec<i64>> {
        let mut stmt = connection
            .prepare(SELECT_PLACE_IDS_BY_DAY_SQL)
            .db_context("Failed to prepare query")?;

        let ids = stmt
            .query_map(params![i64::from(day)], |row| row.get(0))
            .db_context("Failed to query place ids")?
            .collect::<rusqlite::Result<Vec<i64>>>()
            .db_context("Failed to read place ids")?;

        Ok(ids)
    }

    /// Store `ids` with orders `1..=N` in the given sequence.
    fn rewrite_orders(connection: &Connection, ids: &[i64]) -> Result<()> {
        let mut stmt = connection
            .prepare_cached(UPDATE_PLACE_ORDER_SQL)
            .db_context("Failed to prepare order update")?;

        for (id, order) in ordering::renumber(ids.iter().copied()) {
            stmt.execute(params![order, id])
                .db_context("Failed to update place order")?;
        }

        Ok(())
    }

    /// Lists the places of a day in ascending order.
    pub fn list_places(&self, day: Day) -> Result<Vec<Place>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLACES_BY_DAY_SQL)
            .db_context("Failed to prepare query")?;

        let places = stmt
            .query_map(params![i64::from(day)], Self::build_place_from_row)
            .db_context("Failed to query places")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read places")?;

        Ok(places)
    }

    /// Appends a place after the last one of the day.
    pub fn add_place(&mut self, day: Day, place: &NewPlace) -> Result<Place> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let next_order: i64 = tx
            .query_row(GET_NEXT_ORDER_SQL, params![i64::from(day)], |row| row.get(0))
            .db_context("Failed to get next place order")?;
        let order = u32::try_from(next_order).map_err(|_| {
            TripError::validation("order").with_reason(format!("day {} is full", day.get()))
        })?;

        let now = Timestamp::now();
        let coordinate = place.coordinate();

        tx.execute(
            INSERT_PLACE_SQL,
            params![
                i64::from(day),
                next_order,
                place.name(),
                coordinate.lat,
                coordinate.lng,
                place.memo(),
                now.to_string()
            ],
        )
        .map_err(|e| TripError::database("Failed to insert place").with_source(e))?;

        let id = tx.last_insert_rowid();

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(place
            .clone()
            .into_place(PlaceId::from(id), day, order, Some(now)))
    }

    /// Deletes a place from the day and closes the gap it leaves.
    ///
    /// Returns whether a row was removed. The remaining places are renumbered
    /// either way.
    pub fn delete_place(&mut self, day: Day, id: &PlaceId) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let removed = match Self::row_id(id) {
            Some(row_id) => {
                tx.execute(DELETE_PLACE_SQL, params![row_id, i64::from(day)])
                    .map_err(|e| TripError::database("Failed to delete place").with_source(e))?
                    > 0
            }
            None => false,
        };

        let remaining = Self::ordered_ids(&tx, day)?;
        Self::rewrite_orders(&tx, &remaining)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(removed)
    }

    /// Swaps a place with its neighbour and rewrites the day's orders.
    ///
    /// Returns `false` without writing when the id is not on the day or the
    /// place is already at the boundary.
    pub fn move_place(&mut self, day: Day, id: &PlaceId, direction: Direction) -> Result<bool> {
        let Some(row_id) = Self::row_id(id) else {
            return Ok(false);
        };

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut ids = Self::ordered_ids(&tx, day)?;
        if !ordering::shift(&mut ids, &row_id, direction) {
            return Ok(false);
        }

        Self::rewrite_orders(&tx, &ids)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(true)
    }
}
