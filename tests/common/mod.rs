//! Shared helpers for integration tests: JSON fixtures and an in-process
//! mock of the Outbreaks Near Me API.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{MethodRouter, get},
};
use serde_json::Value;
use tokio::net::TcpListener;

use outbreaksnearme::{Client, ClientConfig};

pub const TEST_LATITUDE: f64 = 40.7152;
pub const TEST_LONGITUDE: f64 = -73.9877;

/// Load and parse a JSON fixture from `tests/fixtures/`.
pub fn load_fixture(filename: &str) -> Value {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), filename);
    let raw = std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{path}: {e}"));
    serde_json::from_str(&raw).unwrap()
}

/// Counts how many times a mock route was hit.
#[derive(Clone, Default)]
pub struct Hits(Arc<AtomicUsize>);

impl Hits {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// A GET route answering with `body` as JSON.
pub fn json_route(body: Value, hits: Hits) -> MethodRouter {
    get(move || async move {
        hits.record();
        Json(body)
    })
}

/// A GET route answering with a bare status code and empty body.
pub fn status_route(status: StatusCode, hits: Hits) -> MethodRouter {
    get(move || async move {
        hits.record();
        status
    })
}

/// A GET route that sleeps before answering, to observe cancellation.
pub fn slow_route(body: Value, delay: Duration, hits: Hits) -> MethodRouter {
    get(move || async move {
        hits.record();
        tokio::time::sleep(delay).await;
        Json(body)
    })
}

/// Serve `router` on an ephemeral local port and return its `/api` root.
pub async fn spawn_api(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}/api", addr)
}

/// A client pointed at `base_url`, optionally with an injected session.
pub fn test_client(base_url: &str, session: Option<reqwest::Client>) -> Client {
    Client::with_config(ClientConfig::default().with_base_url(base_url), session)
}

/// In-memory sink for formatted tracing output.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Install a debug-level subscriber writing into `logs` for the current thread.
pub fn capture_logs(logs: &LogBuffer) -> tracing::subscriber::DefaultGuard {
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::set_default(subscriber)
}
