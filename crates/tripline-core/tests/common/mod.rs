#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{mpsc, Arc, Mutex},
    thread::{self, JoinHandle},
};

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tokio::{net::TcpListener, sync::oneshot};
use tripline_core::{DayPlan, Itinerary, ItineraryBuilder, MemoryStore};

/// Helper function to create an itinerary over a temp SQLite file
pub async fn create_sqlite_itinerary() -> (TempDir, Itinerary) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("trip.db");
    let itinerary = ItineraryBuilder::new()
        .with_database_path(&db_path)
        .build()
        .await
        .expect("Failed to create itinerary");
    (temp_dir, itinerary)
}

/// Helper function to create an itinerary over the in-memory store
pub async fn create_memory_itinerary() -> Itinerary {
    ItineraryBuilder::new()
        .with_store(Arc::new(MemoryStore::new()))
        .build()
        .await
        .expect("Failed to create itinerary")
}

/// Orders of the plan are exactly 1..=N in display order.
pub fn assert_contiguous(plan: &DayPlan) {
    let orders: Vec<u32> = plan.iter().map(|place| place.order).collect();
    let expected: Vec<u32> = (1..=plan.len() as u32).collect();
    assert_eq!(orders, expected, "orders of day {} are not dense", plan.day);
}

/// Remote store stand-in: an axum app on a loopback port that answers each
/// POST with the next canned `(status, body)` and records the JSON it got.
pub struct FakeRemote {
    pub url: String,
    requests: Arc<Mutex<Vec<Value>>>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

#[derive(Clone)]
struct FakeState {
    responses: Arc<Mutex<VecDeque<(StatusCode, String)>>>,
    requests: Arc<Mutex<Vec<Value>>>,
}

async fn exec(State(state): State<FakeState>, Json(body): Json<Value>) -> impl IntoResponse {
    state.requests.lock().unwrap().push(body);
    let (status, payload) = state.responses.lock().unwrap().pop_front().unwrap_or((
        StatusCode::SERVICE_UNAVAILABLE,
        "no canned response left".to_string(),
    ));
    (status, [(header::CONTENT_TYPE, "application/json")], payload)
}

impl FakeRemote {
    pub fn start(responses: Vec<(u16, String)>) -> Self {
        let responses = responses
            .into_iter()
            .map(|(status, body)| (StatusCode::from_u16(status).unwrap(), body))
            .collect();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            responses: Arc::new(Mutex::new(responses)),
            requests: Arc::clone(&requests),
        };
        let app = Router::new().route("/exec", post(exec)).with_state(state);

        // The server gets its own runtime so blocking clients and
        // #[tokio::test] bodies can both talk to it.
        let (addr_tx, addr_rx) = mpsc::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build fake remote runtime");
            runtime.block_on(async move {
                let listener = TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("Failed to bind fake remote");
                addr_tx.send(listener.local_addr().unwrap()).unwrap();
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        shutdown_rx.await.ok();
                    })
                    .await
                    .expect("fake remote failed");
            });
        });
        let addr = addr_rx.recv().expect("fake remote did not start");

        Self {
            url: format!("http://{addr}/exec"),
            requests,
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    /// Request bodies received so far.
    pub fn request_bodies(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    /// Stop the server and return every request body it received.
    pub fn finish(mut self) -> Vec<Value> {
        self.stop();
        self.request_bodies()
    }

    fn stop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            shutdown.send(()).ok();
        }
        if let Some(handle) = self.handle.take() {
            handle.join().ok();
        }
    }
}

impl Drop for FakeRemote {
    fn drop(&mut self) {
        self.stop();
    }
}
