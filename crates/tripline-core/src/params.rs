//! Parameter structures for itinerary operations
//!
//! These structures are the boundary between interfaces and the core. They
//! carry raw values (plain integers and strings) with no framework derives;
//! interface layers wrap them in their own types and convert with `From`.
//! Each structure validates itself into domain types, so a day outside the
//! trip or an empty name is rejected the same way no matter where it came
//! from.
//!
//! ```ignore
//! // In the CLI crate
//! #[derive(Args)]
//! pub struct AddArgs {
//!     pub name: String,
//!     // ... clap-specific attributes
//! }
//!
//! impl AddArgs {
//!     pub fn into_params(self, default_day: u8) -> AddPlace { ... }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::{Day, Direction, NewPlace, PlaceId},
};

/// Parameters for operations that only need a day.
///
/// Used by listing and route composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayQuery {
    /// Day of the trip (1 to 13)
    pub day: u8,
}

impl Default for DayQuery {
    fn default() -> Self {
        Self { day: Day::MIN }
    }
}

impl DayQuery {
    pub fn validate(&self) -> Result<Day> {
        Day::new(self.day)
    }
}

/// Parameters for adding a place to a day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddPlace {
    pub day: u8,
    /// Display name; surrounding whitespace is dropped
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub memo: Option<String>,
}

impl AddPlace {
    /// Validate into the target day and a place draft.
    ///
    /// # Errors
    ///
    /// * `TripError::Validation` - day outside the trip, empty name or a
    ///   non-finite coordinate
    pub fn validate(&self) -> Result<(Day, NewPlace)> {
        let day = Day::new(self.day)?;
        let place = NewPlace::new(&self.name, self.lat, self.lng, self.memo.as_deref())?;
        Ok((day, place))
    }
}

/// Parameters naming one place on a day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceRef {
    pub day: u8,
    /// Store-assigned id
    pub id: String,
}

impl PlaceRef {
    pub fn validate(&self) -> Result<(Day, PlaceId)> {
        let day = Day::new(self.day)?;
        Ok((day, PlaceId::new(self.id.trim())))
    }
}

/// Parameters for moving a place one slot up or down.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovePlace {
    pub day: u8,
    pub id: String,
    /// `"up"` or `"down"`, case-insensitive
    pub direction: String,
}

impl MovePlace {
    pub fn validate(&self) -> Result<(Day, PlaceId, Direction)> {
        let day = Day::new(self.day)?;
        let direction = self.direction.parse::<Direction>()?;
        Ok((day, PlaceId::new(self.id.trim()), direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_place_validates_every_field() {
        let params = AddPlace {
            day: 3,
            name: " Museum ".to_string(),
            lat: 37.1,
            lng: 127.1,
            memo: None,
        };
        let (day, place) = params.validate().unwrap();
        assert_eq!(day.get(), 3);
        assert_eq!(place.name(), "Museum");

        let params = AddPlace {
            day: 14,
            ..params
        };
        assert!(params.validate().unwrap_err().is_validation());
    }

    #[test]
    fn move_place_parses_direction() {
        let params = MovePlace {
            day: 2,
            id: " 7 ".to_string(),
            direction: "Down".to_string(),
        };
        let (day, id, direction) = params.validate().unwrap();
        assert_eq!(day.get(), 2);
        assert_eq!(id.as_str(), "7");
        assert_eq!(direction, Direction::Down);

        let params = MovePlace {
            direction: "left".to_string(),
            ..params
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn day_query_defaults_to_first_day() {
        assert_eq!(DayQuery::default().validate().unwrap(), Day::FIRST);
        assert!(DayQuery { day: 0 }.validate().is_err());
    }
}
