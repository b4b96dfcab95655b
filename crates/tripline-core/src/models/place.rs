//! Place model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Day;
use crate::error::{Result, TripError};

/// Opaque place identifier assigned by the store.
///
/// SQLite hands out integer row ids while the remote sheet may use any
/// string, so ids are compared as text everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(String);

impl PlaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<i64> for PlaceId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for PlaceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PlaceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Reject NaN and infinities, which cannot be placed on a map.
    pub fn validated(lat: f64, lng: f64) -> Result<Self> {
        if !lat.is_finite() {
            return Err(TripError::validation("lat").with_reason("must be a finite number"));
        }
        if !lng.is_finite() {
            return Err(TripError::validation("lng").with_reason("must be a finite number"));
        }
        Ok(Self { lat, lng })
    }
}

/// A waypoint on one day of the itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Place {
    pub id: PlaceId,

    pub day: Day,

    /// 1-based position within the day
    pub order: u32,

    pub name: String,

    pub lat: f64,

    pub lng: f64,

    /// Free-form note, empty when absent
    #[serde(default)]
    pub memo: String,

    /// When the store recorded the place, if it tracks that
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl Place {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }

    /// Marker label, e.g. `"2. Cafe"`.
    pub fn label(&self) -> String {
        format!("{}. {}", self.order, self.name)
    }
}

/// A validated place that has not been stored yet.
///
/// Construction trims the name and memo and rejects an empty name or
/// non-finite coordinates, so stores can insert it as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlace {
    name: String,
    coordinate: Coordinate,
    memo: String,
}

impl NewPlace {
    pub fn new(name: &str, lat: f64, lng: f64, memo: Option<&str>) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TripError::validation("name").with_reason("must not be empty"));
        }
        let coordinate = Coordinate::validated(lat, lng)?;

        Ok(Self {
            name: name.to_string(),
            coordinate,
            memo: memo.map(str::trim).unwrap_or_default().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn memo(&self) -> &str {
        &self.memo
    }

    /// Materialise the stored place once the store has picked id and order.
    pub fn into_place(self, id: PlaceId, day: Day, order: u32, created_at: Option<Timestamp>) -> Place {
        Place {
            id,
            day,
            order,
            name: self.name,
            lat: self.coordinate.lat,
            lng: self.coordinate.lng,
            memo: self.memo,
            created_at,
        }
    }
}

/// One day's places, sorted ascending by order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    pub day: Day,
    pub places: Vec<Place>,
}

impl DayPlan {
    pub fn new(day: Day, places: Vec<Place>) -> Self {
        Self { day, places }
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Place> {
        self.places.iter()
    }

    pub fn contains(&self, id: &PlaceId) -> bool {
        self.places.iter().any(|place| &place.id == id)
    }

    /// Ids in display order.
    pub fn ids(&self) -> Vec<PlaceId> {
        self.places.iter().map(|place| place.id.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a DayPlan {
    type Item = &'a Place;
    type IntoIter = std::slice::Iter<'a, Place>;

    fn into_iter(self) -> Self::IntoIter {
        self.places.iter()
    }
}

/// Number of places planned on a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub day: Day,
    pub places: usize,
}
