//! Collection wrapper types for trip-wide output.

use std::fmt;

use crate::models::DaySummary;

/// Per-day place counts for the whole trip.
///
/// # Examples
///
/// ```rust
/// use tripline_core::{
///     display::TripOverview,
///     models::{Day, DaySummary},
/// };
///
/// let overview = TripOverview(vec![DaySummary { day: Day::FIRST, places: 2 }]);
/// assert_eq!(overview.total_places(), 2);
/// assert!(overview.to_string().contains("- Day 1: 2 places"));
/// ```
pub struct TripOverview(pub Vec<DaySummary>);

impl TripOverview {
    /// Places across every day.
    pub fn total_places(&self) -> usize {
        self.0.iter().map(|summary| summary.places).sum()
    }
}

impl<'a> IntoIterator for &'a TripOverview {
    type Item = &'a DaySummary;
    type IntoIter = std::slice::Iter<'a, DaySummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TripOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Trip overview")?;
        writeln!(f)?;

        let total = self.total_places();
        if total == 0 {
            return writeln!(f, "No places planned yet.");
        }

        for summary in self {
            write!(f, "{summary}")?;
        }
        writeln!(f)?;
        writeln!(f, "Total: {total} places")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;

    #[test]
    fn empty_trip_has_message() {
        let overview = TripOverview(
            Day::all()
                .map(|day| DaySummary { day, places: 0 })
                .collect(),
        );
        assert_eq!(overview.0.len(), 13);
        assert!(overview.to_string().contains("No places planned yet."));
    }

    #[test]
    fn lists_every_day_and_total() {
        let overview = TripOverview(vec![
            DaySummary {
                day: Day::new(1).unwrap(),
                places: 2,
            },
            DaySummary {
                day: Day::new(2).unwrap(),
                places: 0,
            },
        ]);
        let output = overview.to_string();
        assert!(output.contains("- Day 1: 2 places"));
        assert!(output.contains("- Day 2: no places"));
        assert!(output.contains("Total: 2 places"));
        assert_eq!(overview.0[1].places, 0);
    }
}
