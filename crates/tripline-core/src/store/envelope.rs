//! Validation of the remote store's JSON replies.
//!
//! Sheet-backed APIs are loose about types: numbers often come back as text,
//! ids may be numeric and `memo` may be null. Everything is coerced here so
//! the rest of the crate only ever sees a valid [`Place`].

use jiff::Timestamp;
use log::debug;
use serde::Deserialize;
use serde_json::{Number, Value};

use crate::{
    error::{Result, TripError},
    models::{Day, Place, PlaceId},
};

/// Largest integer an f64 holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(Number),
    Text(String),
}

impl Loose {
    fn describe(&self) -> String {
        match self {
            Loose::Number(n) => n.to_string(),
            Loose::Text(s) => format!("'{s}'"),
        }
    }

    fn to_f64(&self, field: &str) -> Result<f64> {
        let value = match self {
            Loose::Number(n) => n.as_f64(),
            Loose::Text(s) => s.trim().parse::<f64>().ok(),
        };

        value.filter(|v| v.is_finite()).ok_or_else(|| {
            TripError::invalid_response(format!("'{field}' is not a number: {}", self.describe()))
        })
    }

    fn to_whole(&self, field: &str) -> Result<i64> {
        let value = self.to_f64(field)?;
        if value.fract() != 0.0 || value.abs() > MAX_SAFE_INTEGER {
            return Err(TripError::invalid_response(format!(
                "'{field}' is not a whole number: {}",
                self.describe()
            )));
        }
        Ok(value as i64)
    }

    fn into_text(self) -> String {
        match self {
            Loose::Number(n) => n.to_string(),
            Loose::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(Number),
    Text(String),
}

impl RawId {
    fn into_place_id(self) -> Result<PlaceId> {
        let id = match self {
            RawId::Number(n) => match n.as_i64() {
                Some(whole) => whole.to_string(),
                // 5.0 from a sheet is still id 5
                None => match n.as_f64() {
                    Some(v) if v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER => {
                        (v as i64).to_string()
                    }
                    _ => n.to_string(),
                },
            },
            RawId::Text(s) => s.trim().to_string(),
        };

        if id.is_empty() {
            return Err(TripError::invalid_response("place has an empty id"));
        }
        Ok(PlaceId::new(id))
    }
}

#[derive(Debug, Deserialize)]
struct RawPlace {
    id: RawId,
    #[serde(default)]
    day: Option<Loose>,
    #[serde(alias = "ord")]
    order: Loose,
    name: Loose,
    lat: Loose,
    lng: Loose,
    #[serde(default)]
    memo: Option<Loose>,
    #[serde(default)]
    created_at: Option<Value>,
}

impl RawPlace {
    fn into_place(self, expected: Day) -> Result<Place> {
        let id = self.id.into_place_id()?;

        if let Some(raw_day) = &self.day {
            let day = Day::try_from(raw_day.to_whole("day")?).map_err(|_| {
                TripError::invalid_response(format!(
                    "place {} has day {} outside the trip",
                    id.as_str(),
                    raw_day.describe()
                ))
            })?;
            if day != expected {
                return Err(TripError::invalid_response(format!(
                    "place {} belongs to day {}, expected day {}",
                    id.as_str(),
                    day.get(),
                    expected.get()
                )));
            }
        }

        let order_value = self.order.to_whole("order")?;
        let order = u32::try_from(order_value)
            .ok()
            .filter(|order| *order >= 1)
            .ok_or_else(|| {
                TripError::invalid_response(format!(
                    "place {} has invalid order {order_value}",
                    id.as_str()
                ))
            })?;

        let name = self.name.into_text().trim().to_string();
        if name.is_empty() {
            return Err(TripError::invalid_response(format!(
                "place {} has an empty name",
                id.as_str()
            )));
        }

        let lat = self.lat.to_f64("lat")?;
        let lng = self.lng.to_f64("lng")?;
        let memo = self
            .memo
            .map(|memo| memo.into_text().trim().to_string())
            .unwrap_or_default();

        Ok(Place {
            id,
            day: expected,
            order,
            name,
            lat,
            lng,
            memo,
            created_at: parse_timestamp(self.created_at),
        })
    }
}

/// Timestamps are informational, so an unreadable one is dropped.
fn parse_timestamp(value: Option<Value>) -> Option<Timestamp> {
    match value? {
        Value::String(text) => match text.trim().parse::<Timestamp>() {
            Ok(timestamp) => Some(timestamp),
            Err(e) => {
                debug!("Ignoring unparseable created_at '{text}': {e}");
                None
            }
        },
        Value::Null => None,
        other => {
            debug!("Ignoring non-text created_at {other}");
            None
        }
    }
}

fn parse_raw_place(value: Value, day: Day) -> Result<Place> {
    let raw: RawPlace = serde_json::from_value(value)
        .map_err(|e| TripError::invalid_response(format!("malformed place: {e}")))?;
    raw.into_place(day)
}

/// Reads a flag the way sheets send it: a boolean, `"TRUE"`/`"false"` text,
/// or `1`/`0`. Anything else is `None`.
fn loose_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        Value::Number(n) => match n.as_f64() {
            Some(v) if v == 1.0 => Some(true),
            Some(v) if v == 0.0 => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Turn an `{"ok": false}` envelope into an error, whatever the HTTP status.
pub(super) fn check(value: Value) -> Result<Value> {
    if let Some(envelope) = value.as_object() {
        if envelope.get("ok").and_then(loose_flag) == Some(false) {
            let message = envelope
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("request failed without an error message");
            return Err(TripError::RemoteApi {
                message: message.to_string(),
            });
        }
    }
    Ok(value)
}

/// Whether a successful mutation reply says it changed anything.
///
/// Stores that do not report this are assumed to have applied the change.
pub(super) fn changed(value: &Value) -> bool {
    value
        .get("changed")
        .and_then(loose_flag)
        .unwrap_or(true)
}

/// Accepts a bare array or `{"ok": true, "places": [...]}`.
pub(super) fn parse_places(value: Value, day: Day) -> Result<Vec<Place>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut envelope) => match envelope.remove("places") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(TripError::invalid_response(
                    "expected a list of places or an object with a 'places' array",
                ))
            }
        },
        other => {
            return Err(TripError::invalid_response(format!(
                "expected a list of places, got {other}"
            )))
        }
    };

    items
        .into_iter()
        .map(|item| parse_raw_place(item, day))
        .collect()
}

/// Accepts a bare place object or `{"ok": true, "place": {...}}`.
pub(super) fn parse_place(value: Value, day: Day) -> Result<Place> {
    match value {
        Value::Object(mut envelope) if envelope.contains_key("place") => {
            let place = envelope.remove("place").unwrap_or(Value::Null);
            parse_raw_place(place, day)
        }
        Value::Object(_) => parse_raw_place(value, day),
        other => Err(TripError::invalid_response(format!(
            "expected a place object, got {other}"
        ))),
    }
}
