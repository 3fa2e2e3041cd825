//! Users collection.

use reqwest::Method;

use super::{ListAllOptions, ListOptions};
use crate::error::Result;
use crate::models::User;
use crate::pagination::{Listing, PageStream, ParamPlacement, fetch_page};
use crate::path::encode_path_segment;
use crate::transport::{ApiRequest, Transport};

const ENDPOINT: &str = "users";
const DEFAULT_PAGE_SIZE: usize = 100;

/// Read access to users.
pub struct Users<'c, T: Transport> {
    transport: &'c T,
}

impl<'c, T: Transport> Users<'c, T> {
    pub fn new(transport: &'c T) -> Self {
        Self { transport }
    }

    fn listing() -> Listing {
        Listing::new(Method::GET, ENDPOINT, ParamPlacement::Query)
    }

    /// Fetch one page of users.
    ///
    /// Page sizes above 500 are clamped with a warning.
    pub async fn list(&self, options: ListOptions) -> Result<Vec<User>> {
        let page = options.into_page_request(DEFAULT_PAGE_SIZE);
        fetch_page(self.transport, &Self::listing(), &page).await
    }

    /// Walk every user, one page at a time.
    pub fn list_all(&self, options: ListAllOptions) -> PageStream<'c, T, User> {
        let (template, limit) = options.into_template();
        PageStream::new(self.transport, Self::listing(), template, limit)
    }

    /// Fetch one user by ID.
    pub async fn get(&self, id: &str) -> Result<User> {
        let endpoint = format!("{ENDPOINT}/{}", encode_path_segment(id));
        self.transport.send(ApiRequest::get(endpoint)).await?.decode()
    }
}
