//! Resource collections: typed entry points for each API area.
//!
//! Responsibilities:
//! - Bind endpoints and verbs to list, get, and write operations.
//! - Hold the per-call option structs for listing.
//!
//! Does NOT handle:
//! - HTTP, headers, or status mapping (see [`crate::transport`]).
//! - Page walking (see [`crate::pagination::PageStream`]).
//!
//! Invariants:
//! - Collections borrow their transport and keep no state between calls.
//! - Names and IDs are encoded as single path segments.
//! - `create` and `upsert` validate before any request is sent.

mod datasources;
mod entities;
mod organizations;
mod users;

pub use datasources::DataSources;
pub use entities::Entities;
pub use organizations::Organizations;
pub use users::Users;

use crate::pagination::{Direction, PageRequest, clamp_page_size};

/// Options for a single page of organizations or users.
///
/// Unset fields fall back to the collection's defaults: page 1, direction
/// ascending, and a page size of 50 for organizations or 100 for users.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub page_size: Option<usize>,
    pub page: Option<usize>,
    pub order: Option<String>,
    pub direction: Option<Direction>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    fn into_page_request(self, default_page_size: usize) -> PageRequest {
        PageRequest {
            order: self.order,
            direction: Some(self.direction.unwrap_or_default()),
            ..PageRequest::new(
                clamp_page_size(self.page_size.unwrap_or(default_page_size)),
                self.page.unwrap_or(1),
            )
        }
    }
}

/// Options for walking every organization or user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAllOptions {
    /// Stop after this many records. `None` or zero means no limit.
    pub limit: Option<usize>,
    pub order: Option<String>,
    pub direction: Option<Direction>,
}

impl ListAllOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    fn into_template(self) -> (PageRequest, Option<usize>) {
        let template = PageRequest {
            order: self.order,
            direction: Some(self.direction.unwrap_or_default()),
            ..PageRequest::new(0, 1)
        };
        (template, self.limit)
    }
}

/// Options for a single page of entity or datasource objects.
///
/// Unset fields default to page 1 with 100 records. An empty organization
/// list is sent as an empty `target_organization_ids`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectListOptions {
    pub organizations: Vec<String>,
    pub page_size: Option<usize>,
    pub page: Option<usize>,
    pub order: Option<String>,
    pub group: Option<String>,
    pub filter: Option<String>,
}

impl ObjectListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn organizations<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.organizations = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    fn into_page_request(self) -> PageRequest {
        PageRequest {
            order: self.order,
            group: self.group,
            filter: self.filter,
            target_organization_ids: Some(self.organizations.join(",")),
            ..PageRequest::new(
                clamp_page_size(self.page_size.unwrap_or(OBJECT_PAGE_SIZE)),
                self.page.unwrap_or(1),
            )
        }
    }
}

/// Options for walking every object of an entity or datasource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectListAllOptions {
    /// Stop after this many records. `None` or zero means no limit.
    pub limit: Option<usize>,
    pub organizations: Vec<String>,
    pub order: Option<String>,
    pub group: Option<String>,
    pub filter: Option<String>,
}

impl ObjectListAllOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn organizations<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.organizations = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    fn into_template(self) -> (PageRequest, Option<usize>) {
        let template = PageRequest {
            order: self.order,
            group: self.group,
            filter: self.filter,
            target_organization_ids: Some(self.organizations.join(",")),
            ..PageRequest::new(0, 1)
        };
        (template, self.limit)
    }
}

/// Default page size for entity and datasource listings.
const OBJECT_PAGE_SIZE: usize = 100;
