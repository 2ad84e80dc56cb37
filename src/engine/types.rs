//! Engine types
//!
//! The engine's output payload and the pagination metadata extracted from
//! list responses.

use crate::types::JsonValue;
use bytes::Bytes;

/// What one logical fetch produced.
///
/// List GETs aggregate into `Records`; everything else passes through as
/// a single JSON object or as the raw body.
#[derive(Debug, Clone)]
pub enum Payload {
    /// Concatenation of all pages' `objects`, in fetch order
    Records(Vec<JsonValue>),
    /// A single JSON payload that is not a paginated list
    Object(JsonValue),
    /// A non-JSON body, returned verbatim
    Raw(Bytes),
}

impl Payload {
    /// Check if this is an aggregated record list
    pub fn is_records(&self) -> bool {
        matches!(self, Self::Records(_))
    }

    /// Check if this is a single JSON object
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Check if this is a raw passthrough body
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }

    /// The aggregated records, if this is a record list
    pub fn into_records(self) -> Option<Vec<JsonValue>> {
        match self {
            Self::Records(records) => Some(records),
            _ => None,
        }
    }

    /// The single JSON payload, if present
    pub fn into_object(self) -> Option<JsonValue> {
        match self {
            Self::Object(value) => Some(value),
            _ => None,
        }
    }

    /// The raw body, if this is a passthrough payload
    pub fn into_raw(self) -> Option<Bytes> {
        match self {
            Self::Raw(body) => Some(body),
            _ => None,
        }
    }
}

/// Pagination metadata from a list response's `meta` object
#[derive(Debug, Clone, Default)]
pub struct PageMeta {
    /// Non-null `meta.next`, verbatim. Presence alone drives the primary
    /// termination decision.
    pub next: Option<JsonValue>,
    /// `meta.total_count` when numeric
    pub total_count: Option<u64>,
}

impl PageMeta {
    /// Extract metadata from a parsed page body
    pub fn from_body(body: &JsonValue) -> Self {
        let meta = body.get("meta");
        let next = meta
            .and_then(|m| m.get("next"))
            .filter(|v| !v.is_null())
            .cloned();
        let total_count = meta
            .and_then(|m| m.get("total_count"))
            .and_then(JsonValue::as_u64);
        Self { next, total_count }
    }

    /// Whether the server reports another page
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}
