//! Declarative map description produced by the route composer.

use serde::Serialize;

use super::Coordinate;

/// Everything a map widget needs to draw one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMap {
    pub center: Coordinate,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    /// Present only when the day has at least two places
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_line: Option<Vec<Coordinate>>,
    pub legs: Vec<Leg>,
}

impl RouteMap {
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: Coordinate,
    pub order: u32,
    /// `"{order}. {name}"`
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// Consecutive pair of places with a transit deep link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    /// 1-based position of the origin
    pub from: usize,
    /// 1-based position of the destination
    pub to: usize,
    pub label: String,
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub transit_url: String,
}
