//! Route composition: one day's places as a map description.
//!
//! Pure and synchronous. Nothing here measures distances or reorders
//! places; the route follows the itinerary order exactly.

use crate::models::{Coordinate, Leg, Marker, Place, RouteMap};

/// Seoul City Hall, shown when a day has no places yet.
pub const DEFAULT_ORIGIN: Coordinate = Coordinate {
    lat: 37.5665,
    lng: 126.9780,
};

/// Zoom for the empty-day fallback view.
pub const DEFAULT_ZOOM: u8 = 12;

/// Zoom once a day has places.
pub const DAY_ZOOM: u8 = 13;

const TRANSIT_BASE_URL: &str = "https://www.google.com/maps/dir/?api=1";

/// Build the map description for places already sorted by order.
pub fn compose(places: &[Place]) -> RouteMap {
    let Some(center) = centroid(places) else {
        return RouteMap {
            center: DEFAULT_ORIGIN,
            zoom: DEFAULT_ZOOM,
            markers: Vec::new(),
            route_line: None,
            legs: Vec::new(),
        };
    };

    let markers = places
        .iter()
        .map(|place| Marker {
            position: place.coordinate(),
            order: place.order,
            label: place.label(),
            memo: (!place.memo.is_empty()).then(|| place.memo.clone()),
        })
        .collect();

    let route_line =
        (places.len() >= 2).then(|| places.iter().map(Place::coordinate).collect());

    let legs = places
        .windows(2)
        .enumerate()
        .map(|(index, pair)| {
            let (from, to) = (index + 1, index + 2);
            let origin = pair[0].coordinate();
            let destination = pair[1].coordinate();
            Leg {
                from,
                to,
                label: format!("segment {from}→{to}"),
                origin,
                destination,
                transit_url: transit_url(origin, destination),
            }
        })
        .collect();

    RouteMap {
        center,
        zoom: DAY_ZOOM,
        markers,
        route_line,
        legs,
    }
}

/// Arithmetic mean of all positions, `None` for no places.
fn centroid(places: &[Place]) -> Option<Coordinate> {
    if places.is_empty() {
        return None;
    }
    let count = places.len() as f64;
    let (lat, lng) = places
        .iter()
        .fold((0.0, 0.0), |(lat, lng), place| (lat + place.lat, lng + place.lng));
    Some(Coordinate::new(lat / count, lng / count))
}

/// Google Maps public-transit directions between two points.
pub fn transit_url(origin: Coordinate, destination: Coordinate) -> String {
    format!(
        "{TRANSIT_BASE_URL}&origin={},{}&destination={},{}&travelmode=transit",
        format_degrees(origin.lat),
        format_degrees(origin.lng),
        format_degrees(destination.lat),
        format_degrees(destination.lng)
    )
}

/// Shortest round-trip digits in plain decimal, never exponent form. Whole
/// numbers keep a trailing `.0`.
fn format_degrees(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, PlaceId};

    fn place(id: i64, order: u32, name: &str, lat: f64, lng: f64, memo: &str) -> Place {
        Place {
            id: PlaceId::from(id),
            day: Day::new(3).unwrap(),
            order,
            name: name.to_string(),
            lat,
            lng,
            memo: memo.to_string(),
            created_at: None,
        }
    }

    #[test]
    fn empty_day_uses_default_origin() {
        let map = compose(&[]);
        assert_eq!(map.center, DEFAULT_ORIGIN);
        assert_eq!(map.zoom, DEFAULT_ZOOM);
        assert!(map.markers.is_empty());
        assert!(map.route_line.is_none());
        assert!(map.legs.is_empty());
        assert!(map.is_empty());
    }

    #[test]
    fn single_place_has_marker_but_no_line() {
        let map = compose(&[place(1, 1, "Museum", 37.1, 127.1, "")]);
        assert_eq!(map.zoom, DAY_ZOOM);
        assert_eq!(map.center, Coordinate::new(37.1, 127.1));
        assert_eq!(map.markers.len(), 1);
        assert_eq!(map.markers[0].label, "1. Museum");
        assert!(map.markers[0].memo.is_none());
        assert!(map.route_line.is_none());
        assert!(map.legs.is_empty());
    }

    #[test]
    fn two_places_make_one_transit_leg() {
        let places = [
            place(1, 1, "Museum", 37.1, 127.1, "closes at 6"),
            place(2, 2, "Cafe", 37.2, 127.2, ""),
        ];
        let map = compose(&places);

        assert_eq!(map.legs.len(), 1);
        let leg = &map.legs[0];
        assert_eq!(leg.label, "segment 1→2");
        assert_eq!(
            leg.transit_url,
            "https://www.google.com/maps/dir/?api=1&origin=37.1,127.1&destination=37.2,127.2&travelmode=transit"
        );
        assert_eq!(map.route_line.as_ref().map(Vec::len), Some(2));
        assert_eq!(map.markers[0].memo.as_deref(), Some("closes at 6"));
        assert!((map.center.lat - 37.15).abs() < 1e-9);
        assert!((map.center.lng - 127.15).abs() < 1e-9);
    }

    #[test]
    fn legs_follow_positions() {
        let places = [
            place(9, 1, "A", 1.0, 1.0, ""),
            place(3, 2, "B", 2.0, 2.0, ""),
            place(5, 3, "C", 3.0, 3.0, ""),
        ];
        let map = compose(&places);
        let labels: Vec<&str> = map.legs.iter().map(|leg| leg.label.as_str()).collect();
        assert_eq!(labels, vec!["segment 1→2", "segment 2→3"]);
        assert_eq!(map.legs[1].origin, Coordinate::new(2.0, 2.0));
        assert_eq!(map.route_line.unwrap().len(), 3);
    }

    #[test]
    fn whole_degrees_keep_decimal_point() {
        let url = transit_url(Coordinate::new(37.0, 127.0), Coordinate::new(-33.8688, 151.2093));
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&origin=37.0,127.0&destination=-33.8688,151.2093&travelmode=transit"
        );
    }

    #[test]
    fn extreme_magnitudes_stay_plain_decimal() {
        let url = transit_url(Coordinate::new(0.00001, -0.00005), Coordinate::new(1e16, 127.0));
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&origin=0.00001,-0.00005&destination=10000000000000000.0,127.0&travelmode=transit"
        );
    }
}
