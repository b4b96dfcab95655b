//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the data types carry no
//! presentation logic. All output is markdown.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    config::Backend,
    models::{Coordinate, Day, DayPlan, DaySummary, Direction, Leg, Place, PlaceId, RouteMap},
};

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.label())?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Location: {}", self.coordinate())?;
        if let Some(created_at) = &self.created_at {
            writeln!(f, "- Added: {}", LocalDateTime(created_at))?;
        }

        if !self.memo.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.memo)?;
        }

        writeln!(f)
    }
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Day {}", self.day)?;
        writeln!(f)?;

        if self.is_empty() {
            return writeln!(f, "No places planned for day {}.", self.day);
        }

        for place in self {
            write!(f, "{place}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.places {
            0 => writeln!(f, "- Day {}: no places", self.day),
            1 => writeln!(f, "- Day {}: 1 place", self.day),
            n => writeln!(f, "- Day {}: {n} places", self.day),
        }
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {}: {}", self.label, self.transit_url)
    }
}

impl fmt::Display for RouteMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Route")?;
        writeln!(f)?;
        writeln!(f, "- Center: {}", self.center)?;
        writeln!(f, "- Zoom: {}", self.zoom)?;
        writeln!(f, "- Stops: {}", self.markers.len())?;
        writeln!(f)?;

        if self.legs.is_empty() {
            return writeln!(f, "No legs: add at least two places to draw a route.");
        }

        writeln!(f, "### Transit links")?;
        writeln!(f)?;
        for leg in &self.legs {
            write!(f, "{leg}")?;
        }
        Ok(())
    }
}
