//! Datasource objects collection.
//!
//! Listing sends its page parameters as the JSON body of a POST.

use reqwest::Method;
use serde::Serialize;

use super::{ObjectListAllOptions, ObjectListOptions};
use crate::error::Result;
use crate::models::{DataObject, ObjectId};
use crate::pagination::{Listing, PageStream, ParamPlacement, fetch_page};
use crate::path::encode_path_segment;
use crate::transport::{ApiRequest, Transport};
use crate::validation::{DATASOURCE_RULE, to_payload};

/// Read and write access to the rows of datasources.
pub struct DataSources<'c, T: Transport> {
    transport: &'c T,
}

impl<'c, T: Transport> DataSources<'c, T> {
    pub fn new(transport: &'c T) -> Self {
        Self { transport }
    }

    fn collection(datasource: &str) -> String {
        format!("datasources/{}/dataobjects", encode_path_segment(datasource))
    }

    fn object(datasource: &str, id: &str) -> String {
        format!("{}/{}", Self::collection(datasource), encode_path_segment(id))
    }

    fn listing(datasource: &str) -> Listing {
        Listing::new(
            Method::POST,
            format!("{}/list", Self::collection(datasource)),
            ParamPlacement::Body,
        )
    }

    /// Fetch one page of rows of `datasource`.
    ///
    /// Page sizes above 500 are clamped with a warning.
    pub async fn list(&self, datasource: &str, options: ObjectListOptions) -> Result<Vec<DataObject>> {
        let page = options.into_page_request();
        fetch_page(self.transport, &Self::listing(datasource), &page).await
    }

    /// Walk every row of `datasource`, one page at a time.
    pub fn list_all(
        &self,
        datasource: &str,
        options: ObjectListAllOptions,
    ) -> PageStream<'c, T, DataObject> {
        let (template, limit) = options.into_template();
        PageStream::new(self.transport, Self::listing(datasource), template, limit)
    }

    /// Fetch one row by ID.
    pub async fn get(&self, datasource: &str, id: &str) -> Result<DataObject> {
        self.transport
            .send(ApiRequest::get(Self::object(datasource, id)))
            .await?
            .decode()
    }

    /// Create a row. The payload must carry `organization_id` and `timestamp`.
    ///
    /// # Errors
    ///
    /// [`crate::ClientError::Validation`] before any request when a key is missing.
    pub async fn create<P: Serialize + ?Sized>(
        &self,
        datasource: &str,
        payload: &P,
    ) -> Result<DataObject> {
        let body = to_payload(payload)?;
        DATASOURCE_RULE.validate_create(&body)?;

        self.transport
            .send(ApiRequest::post(Self::collection(datasource)).with_body(body))
            .await?
            .decode()
    }

    /// Insert or update many rows at once and return their IDs.
    ///
    /// # Errors
    ///
    /// [`crate::ClientError::Validation`] before any request when `payload` is not
    /// an array or any element lacks `organization_id` or `timestamp`.
    pub async fn upsert<P: Serialize + ?Sized>(
        &self,
        datasource: &str,
        payload: &P,
    ) -> Result<Vec<ObjectId>> {
        let rows = to_payload(payload)?;
        DATASOURCE_RULE.validate_upsert(&rows)?;

        self.transport
            .send(ApiRequest::post(format!("{}/import", Self::collection(datasource))).with_body(rows))
            .await?
            .decode()
    }

    /// Patch a row. Only the fields in `payload` change.
    pub async fn update<P: Serialize + ?Sized>(
        &self,
        datasource: &str,
        id: &str,
        payload: &P,
    ) -> Result<DataObject> {
        let body = to_payload(payload)?;
        self.transport
            .send(ApiRequest::patch(Self::object(datasource, id)).with_body(body))
            .await?
            .decode()
    }

    /// Delete a row.
    pub async fn delete(&self, datasource: &str, id: &str) -> Result<()> {
        self.transport
            .send(ApiRequest::delete(Self::object(datasource, id)))
            .await?;
        Ok(())
    }
}
