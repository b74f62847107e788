//! Request extractors shared by the resource handlers.
//!
//! - [`RecordId`] reads the `id` query parameter (delete and get-by-id)
//! - [`ItemCode`] reads the `codigo` query parameter (get-by-code)
//! - [`JsonBody`] decodes a JSON request body into a resource shape
//!
//! All of them reject with [`Error`], so a bad request is answered with the same plain-text
//! messages as every other failure.

use crate::errors::{Error, Result};
use crate::types::Resource;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Resource a request body decodes into, used to phrase decode failures.
pub trait BodyResource {
    const RESOURCE: Resource;
}

/// First non-empty value of query parameter `name`.
///
/// An empty value (`?id=`) counts as absent.
fn query_param(parts: &Parts, name: &str) -> Result<Option<String>> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
        .map_err(|e| Error::Other(anyhow::anyhow!("Failed to parse query string: {e}")))?;

    Ok(pairs.into_iter().find(|(key, _)| key == name).map(|(_, value)| value).filter(|value| !value.is_empty()))
}

/// Parse a record identifier: an integer strictly greater than zero.
pub fn parse_record_id(raw: &str) -> Result<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Error::InvalidParameter {
            name: "id",
            value: raw.to_string(),
        }),
    }
}

/// Identifier taken from the `id` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        let raw = query_param(parts, "id")?.ok_or(Error::MissingParameter { name: "id" })?;
        parse_record_id(&raw).map(RecordId)
    }
}

/// Item code taken from the `codigo` query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCode(pub String);

impl<S> FromRequestParts<S> for ItemCode
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        query_param(parts, "codigo")?
            .map(ItemCode)
            .ok_or(Error::MissingParameter { name: "codigo" })
    }
}

/// JSON body decoded with `serde_json`.
///
/// Unlike `axum::Json` this doesn't look at `Content-Type`: clients posting JSON as
/// `text/plain` (or with no header at all) are accepted.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + BodyResource,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|source| Error::UnreadableBody {
                resource: T::RESOURCE,
                source,
            })?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|source| Error::MalformedBody {
                resource: T::RESOURCE,
                source,
            })
    }
}
