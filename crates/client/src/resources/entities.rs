//! Entity objects collection.
//!
//! Listing sends its page parameters in the query string of a POST.

use reqwest::Method;
use serde::Serialize;
use serde_json::json;

use super::{ObjectListAllOptions, ObjectListOptions};
use crate::error::Result;
use crate::models::{EntityObject, ObjectId};
use crate::pagination::{Listing, PageStream, ParamPlacement, fetch_page};
use crate::path::encode_path_segment;
use crate::transport::{ApiRequest, Transport};
use crate::validation::{ENTITY_RULE, to_payload};

/// Read and write access to the objects of configurable entities.
pub struct Entities<'c, T: Transport> {
    transport: &'c T,
}

impl<'c, T: Transport> Entities<'c, T> {
    pub fn new(transport: &'c T) -> Self {
        Self { transport }
    }

    fn collection(entity: &str) -> String {
        format!("entities/{}/entityobjects", encode_path_segment(entity))
    }

    fn object(entity: &str, id: &str) -> String {
        format!("{}/{}", Self::collection(entity), encode_path_segment(id))
    }

    fn listing(entity: &str) -> Listing {
        Listing::new(
            Method::POST,
            format!("{}/list", Self::collection(entity)),
            ParamPlacement::Query,
        )
    }

    /// Fetch one page of objects of `entity`.
    ///
    /// Page sizes above 500 are clamped with a warning.
    pub async fn list(&self, entity: &str, options: ObjectListOptions) -> Result<Vec<EntityObject>> {
        let page = options.into_page_request();
        fetch_page(self.transport, &Self::listing(entity), &page).await
    }

    /// Walk every object of `entity`, one page at a time.
    pub fn list_all(
        &self,
        entity: &str,
        options: ObjectListAllOptions,
    ) -> PageStream<'c, T, EntityObject> {
        let (template, limit) = options.into_template();
        PageStream::new(self.transport, Self::listing(entity), template, limit)
    }

    /// Fetch one object by ID.
    pub async fn get(&self, entity: &str, id: &str) -> Result<EntityObject> {
        self.transport
            .send(ApiRequest::get(Self::object(entity, id)))
            .await?
            .decode()
    }

    /// Create an object. The payload must carry `organization_id`.
    ///
    /// # Errors
    ///
    /// [`crate::ClientError::Validation`] before any request when the key is missing.
    pub async fn create<P: Serialize + ?Sized>(
        &self,
        entity: &str,
        payload: &P,
    ) -> Result<EntityObject> {
        let body = to_payload(payload)?;
        ENTITY_RULE.validate_create(&body)?;

        self.transport
            .send(ApiRequest::post(Self::collection(entity)).with_body(body))
            .await?
            .decode()
    }

    /// Insert or update many objects at once and return their IDs.
    ///
    /// With `truncate`, the server deletes every object not in `payload`.
    ///
    /// # Errors
    ///
    /// [`crate::ClientError::Validation`] before any request when `payload` is not
    /// an array or any element lacks `organization_id`.
    pub async fn upsert<P: Serialize + ?Sized>(
        &self,
        entity: &str,
        payload: &P,
        truncate: bool,
    ) -> Result<Vec<ObjectId>> {
        let objects = to_payload(payload)?;
        ENTITY_RULE.validate_upsert(&objects)?;

        let body = json!({
            "entity_objects": objects,
            "delete_others": truncate,
        });
        self.transport
            .send(ApiRequest::post(format!("{}/import", Self::collection(entity))).with_body(body))
            .await?
            .decode()
    }

    /// Patch an object. Only the fields in `payload` change.
    pub async fn update<P: Serialize + ?Sized>(
        &self,
        entity: &str,
        id: &str,
        payload: &P,
    ) -> Result<EntityObject> {
        let body = to_payload(payload)?;
        self.transport
            .send(ApiRequest::patch(Self::object(entity, id)).with_body(body))
            .await?
            .decode()
    }

    /// Delete an object.
    pub async fn delete(&self, entity: &str, id: &str) -> Result<()> {
        self.transport
            .send(ApiRequest::delete(Self::object(entity, id)))
            .await?;
        Ok(())
    }
}
