//! Testing utilities for BoardsOnFire client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use boardsonfire_client::testing::MockTransport;
//! use boardsonfire_client::{ListAllOptions, Organizations};
//! use serde_json::json;
//!
//! let transport = MockTransport::with_pages(vec![vec![json!({"id": 1})]]);
//! let orgs = Organizations::new(&transport)
//!     .list_all(ListAllOptions::new())
//!     .collect()
//!     .await?;
//! assert_eq!(transport.call_count(), 1);
//! ```

use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::transport::{ApiRequest, ResponseEnvelope, Transport};

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> Value {
    let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Scripted [`Transport`] that records every request it receives.
///
/// Responses are returned in the order they were queued. Once the queue is
/// empty every further call fails with [`ClientError::InvalidResponse`].
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<ResponseEnvelope>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one 200 response per page, each carrying the page as a JSON array.
    pub fn with_pages(pages: Vec<Vec<Value>>) -> Self {
        let transport = Self::new();
        for page in pages {
            transport.push_payload(Value::Array(page));
        }
        transport
    }

    /// Build `count` distinct records, `{"id": "<offset + i>"}`.
    pub fn records(offset: usize, count: usize) -> Vec<Value> {
        (offset..offset + count)
            .map(|i| serde_json::json!({ "id": i.to_string() }))
            .collect()
    }

    /// Queue a 200 response with `payload`.
    pub fn push_payload(&self, payload: Value) {
        self.push_response(ResponseEnvelope::new(200, HashMap::new()).with_payload(payload));
    }

    pub fn push_response(&self, envelope: ResponseEnvelope) {
        self.lock_responses().push_back(Ok(envelope));
    }

    pub fn push_error(&self, error: ClientError) {
        self.lock_responses().push_back(Err(error));
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<ResponseEnvelope>>> {
        self.responses.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ResponseEnvelope> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        self.lock_responses().pop_front().unwrap_or_else(|| {
            Err(ClientError::InvalidResponse(
                "MockTransport has no scripted response left".to_string(),
            ))
        })
    }
}
