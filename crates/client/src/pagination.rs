//! Page requests and the lazy multi-page listing stream.
//!
//! Responsibilities:
//! - Describe one page request ([`PageRequest`]) and where its parameters travel ([`Listing`]).
//! - Clamp single-page requests to [`MAX_PAGE_SIZE`] with a warning.
//! - Walk pages on demand with [`PageStream`], honoring an optional record limit.
//!
//! Does NOT handle:
//! - Endpoint naming for individual resources (see [`crate::resources`]).
//! - Retrying failed pages. A failed fetch ends the stream.
//!
//! Invariants:
//! - Pages are fetched one at a time in increasing page order.
//! - Records come out in the order the server returned them.
//! - A batch that is empty or shorter than the page size is the last one.
//!   An exactly full last page costs one extra request that returns nothing.
//! - Once the limit is reached no further request is issued.

use std::collections::VecDeque;

use futures::Stream;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::transport::{ApiRequest, Transport};

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: usize = 500;

/// Page size used by [`PageStream`] unless a smaller limit is requested.
pub const STREAM_PAGE_SIZE: usize = 100;

/// Sort direction for organizations and users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            other => Err(format!("unknown direction '{other}', expected ASC or DESC")),
        }
    }
}

/// Parameters of a single list request.
///
/// Absent optional fields are left out of both the query string and the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page_size: usize,
    /// 1-based page number.
    pub page: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Comma-joined organization IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_organization_ids: Option<String>,
}

impl PageRequest {
    pub fn new(page_size: usize, page: usize) -> Self {
        Self {
            page_size,
            page,
            order: None,
            direction: None,
            group: None,
            filter: None,
            target_organization_ids: None,
        }
    }

    /// Query string pairs, in a stable order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page_size".to_string(), self.page_size.to_string()),
            ("page".to_string(), self.page.to_string()),
        ];
        let optional = [
            ("order", self.order.clone()),
            ("direction", self.direction.map(|d| d.as_str().to_string())),
            ("group", self.group.clone()),
            ("filter", self.filter.clone()),
            ("target_organization_ids", self.target_organization_ids.clone()),
        ];
        pairs.extend(
            optional
                .into_iter()
                .filter_map(|(k, v)| v.map(|v| (k.to_string(), v))),
        );
        pairs
    }

    /// JSON body form. Page numbers stay numbers.
    pub fn to_body(&self) -> Result<Value> {
        serde_json::to_value(self)
            .map_err(|e| ClientError::InvalidRequest(format!("Cannot encode page request: {e}")))
    }
}

/// Where a listing sends its page parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamPlacement {
    Query,
    Body,
}

/// A listable endpoint: verb, path, and parameter placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub method: Method,
    pub endpoint: String,
    pub placement: ParamPlacement,
}

impl Listing {
    pub fn new(method: Method, endpoint: impl Into<String>, placement: ParamPlacement) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            placement,
        }
    }

    /// Build the request for one page.
    pub fn request(&self, page: &PageRequest) -> Result<ApiRequest> {
        let request = ApiRequest::new(self.method.clone(), self.endpoint.clone());
        Ok(match self.placement {
            ParamPlacement::Query => request.with_query(page.query_pairs()),
            ParamPlacement::Body => request.with_body(page.to_body()?),
        })
    }
}

/// Clamp a single-page size to [`MAX_PAGE_SIZE`], warning when it was too large.
pub fn clamp_page_size(requested: usize) -> usize {
    if requested > MAX_PAGE_SIZE {
        tracing::warn!(
            requested,
            max = MAX_PAGE_SIZE,
            "The maximum page size is {MAX_PAGE_SIZE}. Response is truncated. \
             Please consider using the list_all method for large datasets."
        );
        MAX_PAGE_SIZE
    } else {
        requested
    }
}

/// Fetch one page and decode its records.
///
/// # Errors
///
/// Transport errors pass through. A payload that is not a JSON array, or whose
/// elements do not decode as `R`, is [`ClientError::InvalidResponse`].
pub async fn fetch_page<T, R>(transport: &T, listing: &Listing, page: &PageRequest) -> Result<Vec<R>>
where
    T: Transport,
    R: DeserializeOwned,
{
    let envelope = transport.send(listing.request(page)?).await?;
    let payload = envelope.into_payload()?;
    if !payload.is_array() {
        return Err(ClientError::InvalidResponse(format!(
            "Expected a list of records from {}",
            listing.endpoint
        )));
    }

    serde_json::from_value(payload)
        .map_err(|e| ClientError::InvalidResponse(format!("Unexpected record shape: {e}")))
}

/// Lazy stream of records across pages.
///
/// Each call to [`PageStream::next`] returns a buffered record or fetches the
/// next page. Dropping the stream early needs no cleanup.
pub struct PageStream<'t, T: Transport, R> {
    transport: &'t T,
    listing: Listing,
    request: PageRequest,
    limit: Option<usize>,
    yielded: usize,
    buffer: VecDeque<R>,
    done: bool,
}

impl<'t, T: Transport, R: DeserializeOwned> PageStream<'t, T, R> {
    /// Create a stream starting at page 1.
    ///
    /// The page size is [`STREAM_PAGE_SIZE`], or the limit when that is
    /// smaller. A limit of zero means no limit. Any page settings already on
    /// `template` are replaced.
    pub fn new(
        transport: &'t T,
        listing: Listing,
        template: PageRequest,
        limit: Option<usize>,
    ) -> Self {
        let limit = limit.filter(|&l| l > 0);
        let request = PageRequest {
            page_size: STREAM_PAGE_SIZE.min(limit.unwrap_or(STREAM_PAGE_SIZE)),
            page: 1,
            ..template
        };

        Self {
            transport,
            listing,
            request,
            limit,
            yielded: 0,
            buffer: VecDeque::new(),
            done: false,
        }
    }

    /// Page size used for every request of this stream.
    pub fn page_size(&self) -> usize {
        self.request.page_size
    }

    /// Fetch the next record, requesting a new page when the buffer is empty.
    ///
    /// Returns `Ok(None)` once the limit is reached or the last page is drained.
    /// After an error the stream is finished.
    pub async fn next(&mut self) -> Result<Option<R>> {
        if self.limit.is_some_and(|limit| self.yielded >= limit) {
            self.done = true;
            self.buffer.clear();
            return Ok(None);
        }

        if self.buffer.is_empty() {
            if self.done {
                return Ok(None);
            }
            self.fill().await?;
        }

        let item = self.buffer.pop_front();
        if item.is_some() {
            self.yielded += 1;
        }
        Ok(item)
    }

    /// Collect all remaining records into a `Vec`.
    pub async fn collect(mut self) -> Result<Vec<R>> {
        let mut all = Vec::new();
        while let Some(item) = self.next().await? {
            all.push(item);
        }
        Ok(all)
    }

    /// Adapt into a [`futures::Stream`] of results.
    pub fn into_stream(self) -> impl Stream<Item = Result<R>> + 't
    where
        R: 't,
    {
        futures::stream::try_unfold(self, |mut stream| async move {
            Ok::<_, ClientError>(stream.next().await?.map(|item| (item, stream)))
        })
    }

    async fn fill(&mut self) -> Result<()> {
        let batch: Vec<R> = match fetch_page(self.transport, &self.listing, &self.request).await {
            Ok(batch) => batch,
            Err(e) => {
                self.done = true;
                return Err(e);
            }
        };

        tracing::debug!(
            endpoint = %self.listing.endpoint,
            page = self.request.page,
            records = batch.len(),
            "Fetched page"
        );

        if batch.len() < self.request.page_size {
            self.done = true;
        } else {
            self.request.page += 1;
        }
        self.buffer = VecDeque::from(batch);
        Ok(())
    }
}
