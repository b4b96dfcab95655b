//! Remote sheet-backed store reached over a JSON POST API.
//!
//! Every call is one `POST` to the configured endpoint with an
//! `{"action": ..., "day": ...}` body. The reply is either the payload
//! itself or an `{"ok": ..., ...}` envelope; see the `envelope` module for
//! the accepted shapes.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;

use super::{envelope, PlaceStore};
use crate::{
    error::{Result, TripError},
    models::{Day, Direction, NewPlace, Place, PlaceId},
};

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
enum Request<'a> {
    List {
        day: u8,
    },
    Add {
        day: u8,
        name: &'a str,
        lat: f64,
        lng: f64,
        memo: &'a str,
    },
    Delete {
        day: u8,
        id: &'a str,
    },
    Move {
        day: u8,
        id: &'a str,
        direction: Direction,
    },
}

impl Request<'_> {
    fn action(&self) -> &'static str {
        match self {
            Request::List { .. } => "list",
            Request::Add { .. } => "add",
            Request::Delete { .. } => "delete",
            Request::Move { .. } => "move",
        }
    }
}

/// HTTP client for the remote store.
///
/// A blocking client is built per call. The itinerary always calls stores
/// from the blocking pool, where that is safe.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    endpoint: String,
    timeout: Duration,
}

impl RemoteStore {
    /// Fails with a configuration error unless `endpoint` is an http(s) URL.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let endpoint = endpoint.into().trim().to_string();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(TripError::configuration(format!(
                "remote URL must start with http:// or https://, got '{endpoint}'"
            )));
        }
        if timeout.is_zero() {
            return Err(TripError::configuration(
                "remote timeout must be at least one second",
            ));
        }

        Ok(Self { endpoint, timeout })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn call(&self, request: &Request<'_>) -> Result<Value> {
        debug!(
            "Remote {} request to {} (timeout {:?})",
            request.action(),
            self.endpoint,
            self.timeout
        );

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| TripError::configuration(format!("Failed to build HTTP client: {e}")))?;

        let response = client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|source| TripError::StoreUnavailable {
                message: format!("{} request to {} failed", request.action(), self.endpoint),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|source| TripError::StoreUnavailable {
                message: format!("reading {} response failed", request.action()),
                source,
            })?;

        debug!(
            "Remote {} answered {} ({} bytes)",
            request.action(),
            status,
            body.len()
        );

        let value = match serde_json::from_str::<Value>(&body) {
            Ok(value) => envelope::check(value)?,
            Err(_) if !status.is_success() => {
                return Err(TripError::RemoteApi {
                    message: format!("HTTP status {status}"),
                })
            }
            Err(e) => {
                return Err(TripError::invalid_response(format!(
                    "{} response is not JSON: {e}",
                    request.action()
                )))
            }
        };

        if !status.is_success() {
            return Err(TripError::RemoteApi {
                message: format!("HTTP status {status}"),
            });
        }

        Ok(value)
    }
}

impl PlaceStore for RemoteStore {
    fn backend(&self) -> &'static str {
        "remote"
    }

    fn list(&self, day: Day) -> Result<Vec<Place>> {
        let value = self.call(&Request::List { day: day.get() })?;
        envelope::parse_places(value, day)
    }

    fn add(&self, day: Day, place: &NewPlace) -> Result<Place> {
        let coordinate = place.coordinate();
        let value = self.call(&Request::Add {
            day: day.get(),
            name: place.name(),
            lat: coordinate.lat,
            lng: coordinate.lng,
            memo: place.memo(),
        })?;
        envelope::parse_place(value, day)
    }

    fn delete(&self, day: Day, id: &PlaceId) -> Result<bool> {
        let value = self.call(&Request::Delete {
            day: day.get(),
            id: id.as_str(),
        })?;
        Ok(envelope::changed(&value))
    }

    fn move_place(&self, day: Day, id: &PlaceId, direction: Direction) -> Result<bool> {
        let value = self.call(&Request::Move {
            day: day.get(),
            id: id.as_str(),
            direction,
        })?;
        Ok(envelope::changed(&value))
    }
}
