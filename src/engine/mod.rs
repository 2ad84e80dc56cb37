//! Pagination engine
//!
//! Turns one logical "fetch resource X" call into a correctly paginated
//! sequence of HTTP requests and merges the pages into a single payload.
//!
//! # Overview
//!
//! - GET list responses (`objects` + `meta`) are traversed page by page
//!   and concatenated in arrival order.
//! - Any other JSON payload, and every non-GET response, passes through
//!   as a single object.
//! - Non-JSON bodies pass through verbatim and are never paginated.
//!
//! Requests are issued serially: each page's termination decision depends
//! on the previous page's `meta`. Settings are taken from a per-call
//! [`FetchOptions`] snapshot, so client reconfiguration cannot affect a
//! traversal in flight.

mod types;

pub use types::{PageMeta, Payload};

use crate::auth::Credentials;
use crate::config::FetchOptions;
use crate::error::{Error, Result};
use crate::resource::{resolve, Descriptor};
use crate::transport::Transport;
use crate::types::{JsonValue, Method, Query};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// The resource-traversal engine
#[derive(Debug, Clone)]
pub struct Engine {
    transport: Arc<Transport>,
}

impl Engine {
    /// Create an engine over a transport
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Fetch a resource, transparently traversing pagination for GET
    /// list responses.
    ///
    /// The query's `offset` is initialized to 0 when absent, and `limit`
    /// defaults to the snapshot's page size so that offset advancement
    /// always matches the page size actually requested.
    pub async fn fetch(
        &self,
        credentials: &Credentials,
        method: Method,
        descriptor: &Descriptor,
        mut query: Query,
        body: Option<&JsonValue>,
        options: FetchOptions,
    ) -> Result<Payload> {
        let headers = build_headers(credentials, descriptor, body.is_some());

        let body_text = match body {
            Some(value) if descriptor.content().is_json() => Some(serde_json::to_string(value)?),
            Some(value) => Some(value.to_string()),
            None => None,
        };

        // Pagination parameters only make sense on GET list requests
        let limit = match query.get("limit").and_then(JsonValue::as_u64) {
            Some(limit) => limit,
            None => {
                let limit = u64::from(options.page_limit);
                if method.is_get() {
                    query.insert("limit".to_string(), json!(limit));
                }
                limit
            }
        };
        let mut offset = query
            .get("offset")
            .and_then(JsonValue::as_u64)
            .unwrap_or(0);

        let mut records: Vec<JsonValue> = Vec::new();
        let mut pages = 0usize;

        loop {
            if method.is_get() {
                query.insert("offset".to_string(), json!(offset));
            }
            let url = resolve(credentials.host(), descriptor, &query)?;

            let response = self
                .transport
                .send(
                    method,
                    &headers,
                    &url,
                    body_text.as_deref(),
                    options.retries,
                    options.trace_requests,
                )
                .await?;

            // Non-JSON payloads are returned verbatim and never paginated
            let mut page: JsonValue = match serde_json::from_slice(&response.body) {
                Ok(value) => value,
                Err(_) => return Ok(Payload::Raw(response.body)),
            };

            // Pagination applies only to GET list responses
            if !method.is_get() {
                return Ok(Payload::Object(page));
            }
            if page.get("objects").is_none() {
                return Ok(Payload::Object(page));
            }

            let objects = page
                .get_mut("objects")
                .map(JsonValue::take)
                .unwrap_or(JsonValue::Null);
            let JsonValue::Array(objects) = objects else {
                return Err(Error::protocol(format!(
                    "expected 'objects' to be a sequence in {} response",
                    descriptor.kind().name()
                )));
            };

            let meta = PageMeta::from_body(&page);
            pages += 1;
            debug!(
                "page {}: {} records from {}",
                pages,
                objects.len(),
                descriptor.kind().name()
            );
            records.extend(objects);

            if let Some(cap) = options.record_ceiling() {
                if records.len() >= cap {
                    records.truncate(cap);
                    debug!("record ceiling {} reached, stopping traversal", cap);
                    break;
                }
            }

            // Primary termination: the server reports no further page
            if !meta.has_next() {
                break;
            }

            // Offset advances by the page size actually requested,
            // whether or not the caller supplied `limit`. A zero limit
            // still advances so a misbehaving server cannot pin the loop.
            offset += limit.max(1);

            // Secondary safety bound against servers whose `next` never
            // goes null: never read past the reported total.
            if let Some(total) = meta.total_count {
                if offset >= total {
                    break;
                }
            }
        }

        debug!(
            "traversal of {} complete: {} records in {} pages",
            descriptor.kind().name(),
            records.len(),
            pages
        );
        Ok(Payload::Records(records))
    }
}

/// Assemble request headers: the two auth headers always, content
/// negotiation only for JSON endpoints.
fn build_headers(
    credentials: &Credentials,
    descriptor: &Descriptor,
    has_body: bool,
) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = credentials
        .auth_headers()
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();

    if descriptor.content().is_json() {
        headers.push(("Accept".to_string(), "application/json".to_string()));
        if has_body {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
    }

    headers
}
