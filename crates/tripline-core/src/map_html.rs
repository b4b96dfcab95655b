//! Standalone Leaflet page for one day's route.
//!
//! The [`RouteMap`] is embedded as a JSON data block and drawn by a small
//! script. Place names and memos reach the DOM only through `textContent`,
//! and `<`, `>` and `&` are escaped inside the JSON so the data block cannot
//! terminate its own `<script>` element.

use serde::Serialize;

use crate::{
    error::Result,
    models::{Day, RouteMap},
};

const DATA_PLACEHOLDER: &str = "__TRIPLINE_ROUTE_DATA__";
const TITLE_PLACEHOLDER: &str = "__TRIPLINE_TITLE__";

const TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>__TRIPLINE_TITLE__</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>
  html, body { height: 100%; margin: 0; font-family: sans-serif; }
  #map { height: 100%; }
  .badge-icon { background: none; border: none; }
  .badge {
    width: 28px; height: 28px; border-radius: 50%;
    background: #1f6feb; color: #fff; border: 2px solid #fff;
    display: flex; align-items: center; justify-content: center;
    font-weight: bold; font-size: 13px; box-shadow: 0 1px 4px rgba(0, 0, 0, 0.4);
  }
</style>
</head>
<body>
<div id="map"></div>
<script type="application/json" id="route-data">__TRIPLINE_ROUTE_DATA__</script>
<script>
(function () {
  const data = JSON.parse(document.getElementById("route-data").textContent);
  const route = data.map;
  const latLng = (c) => [c.lat, c.lng];
  const text = (value) => {
    const span = document.createElement("span");
    span.textContent = value;
    return span;
  };

  const map = L.map("map").setView(latLng(route.center), route.zoom);
  L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", {
    maxZoom: 19,
    attribution: "&copy; OpenStreetMap contributors",
  }).addTo(map);

  for (const marker of route.markers) {
    const badge = document.createElement("div");
    badge.className = "badge";
    badge.textContent = String(marker.order);

    const popup = document.createElement("div");
    const title = document.createElement("b");
    title.textContent = marker.label;
    popup.appendChild(title);
    if (marker.memo) {
      popup.appendChild(document.createElement("br"));
      popup.appendChild(text(marker.memo));
    }

    L.marker(latLng(marker.position), {
      icon: L.divIcon({ className: "badge-icon", html: badge, iconSize: [28, 28], iconAnchor: [14, 14] }),
    })
      .bindTooltip(text(marker.label))
      .bindPopup(popup)
      .addTo(map);
  }

  if (route.route_line) {
    L.polyline(route.route_line.map(latLng), { weight: 5, opacity: 0.6 })
      .bindTooltip(text("full route"))
      .addTo(map);
  }

  for (const leg of route.legs) {
    const link = document.createElement("a");
    link.href = leg.transit_url;
    link.target = "_blank";
    link.rel = "noopener noreferrer";
    link.textContent = "Transit directions (" + leg.label + ")";

    L.polyline([latLng(leg.origin), latLng(leg.destination)], { weight: 10, opacity: 0.15 })
      .bindTooltip(text(leg.label))
      .bindPopup(link)
      .addTo(map);
  }
})();
</script>
</body>
</html>
"##;

#[derive(Serialize)]
struct Payload<'a> {
    day: u8,
    map: &'a RouteMap,
}

/// Render a self-contained HTML document showing `map`.
pub fn render(day: Day, map: &RouteMap) -> Result<String> {
    let json = serde_json::to_string(&Payload {
        day: day.get(),
        map,
    })?;

    // Only string contents can hold these characters, where \u escapes are
    // equivalent.
    let json = json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026");

    Ok(TEMPLATE
        .replace(TITLE_PLACEHOLDER, &format!("Day {} itinerary", day.get()))
        .replace(DATA_PLACEHOLDER, &json))
}
