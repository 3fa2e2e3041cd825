//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the BoardsOnFire client.
//!
//! # What this does NOT handle
//! - Mock server expectations (use wiremock directly in tests)

use std::io::Write;
use std::sync::{Arc, Mutex};

#[allow(unused_imports)]
pub use boardsonfire_client::testing::{MockTransport, load_fixture};
#[allow(unused_imports)]
pub use boardsonfire_client::{BoardsOnFireClient, ClientError, ObjectId};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// API key used by every test client.
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-api-key";

/// Build a client whose base URL points at `server`.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> BoardsOnFireClient {
    BoardsOnFireClient::builder()
        .domain("acme")
        .api_key(TEST_API_KEY)
        .base_url(format!("{}/api/v5", server.uri()))
        .build()
        .expect("test client should build")
}

/// In-memory sink for captured log output.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Install a thread-local subscriber that writes into the returned buffer.
///
/// Keep the guard alive for as long as logs should be captured.
#[allow(dead_code)]
pub fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}
