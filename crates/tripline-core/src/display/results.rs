//! Result wrapper types for displaying operation outcomes.
//!
//! Each wrapper prints a one-line confirmation followed by the resource as
//! it now exists in the store.

use std::{fmt, path::PathBuf};

use crate::models::{Day, DayPlan, Place, PlaceId};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use tripline_core::{
///     display::CreateResult,
///     models::{Day, Place, PlaceId},
/// };
///
/// let place = Place {
///     id: PlaceId::from(7),
///     day: Day::new(3)?,
///     order: 1,
///     name: "Museum".to_string(),
///     lat: 37.1,
///     lng: 127.1,
///     memo: String::new(),
///     created_at: None,
/// };
///
/// let output = CreateResult::new(place).to_string();
/// assert!(output.starts_with("Added place with ID: 7 to day 3"));
/// # Ok::<(), tripline_core::TripError>(())
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Place> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added place with ID: {} to day {}",
            self.resource.id, self.resource.day
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// The changes are what was requested; the resource shows what the store
/// holds afterwards.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<DayPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated day {}", self.resource.day)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes requested:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
///
/// `removed` is false when the id was not on the day. The resource is the
/// day as the store holds it afterwards either way.
pub struct DeleteResult<T> {
    pub id: PlaceId,
    pub removed: bool,
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(id: PlaceId, removed: bool, resource: T) -> Self {
        Self {
            id,
            removed,
            resource,
        }
    }
}

impl fmt::Display for DeleteResult<DayPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.removed {
            writeln!(
                f,
                "Removed place with ID: {} from day {}",
                self.id, self.resource.day
            )?;
        } else {
            writeln!(
                f,
                "No place with ID: {} on day {}; nothing removed",
                self.id, self.resource.day
            )?;
        }
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Outcome of writing a day's HTML map.
pub struct MapResult {
    pub day: Day,
    pub stops: usize,
    pub path: PathBuf,
}

impl fmt::Display for MapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stops = match self.stops {
            1 => "1 stop".to_string(),
            n => format!("{n} stops"),
        };
        writeln!(
            f,
            "Wrote map for day {} with {stops} to {}",
            self.day,
            self.path.display()
        )
    }
}
