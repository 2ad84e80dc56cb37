//! Resource façade
//!
//! [`Client`] owns the account credentials and settings and exposes one
//! thin function per logical operation. Each operation assembles a
//! descriptor and query from caller-supplied fields and delegates to the
//! pagination engine; nothing here touches the wire directly.

mod activities;
mod members;
mod subtitles;
mod tasks;
mod videos;

pub use activities::ActivityFilters;
pub use subtitles::last_version_number;
pub use tasks::TaskFilters;
pub use videos::VideoFilters;

use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::engine::{Engine, Payload};
use crate::error::{Error, Result};
use crate::log::{ApiLogger, NoopLogger};
use crate::resource::Descriptor;
use crate::transport::Transport;
use crate::types::{JsonValue, Method, Query};
use regex::Regex;
use std::sync::Arc;
use std::sync::LazyLock;

/// Video identifiers are exactly 12 alphanumeric characters
static VIDEO_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{12}$").expect("static regex"));

/// Check a video identifier's shape without touching the network
pub fn is_valid_video_id(id: &str) -> bool {
    VIDEO_ID_REGEX.is_match(id)
}

/// Client for the subtitle platform API
#[derive(Debug)]
pub struct Client {
    credentials: Credentials,
    config: ClientConfig,
    engine: Engine,
    logger: Arc<dyn ApiLogger>,
}

impl Client {
    /// Create a client with default configuration and a no-op logger
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Self::with_logger(credentials, config, Arc::new(NoopLogger))
    }

    /// Create a client with custom configuration and an injected logger
    pub fn with_logger(
        credentials: Credentials,
        config: ClientConfig,
        logger: Arc<dyn ApiLogger>,
    ) -> Result<Self> {
        let transport = Arc::new(Transport::new(&config, Arc::clone(&logger))?);
        let engine = Engine::new(transport);
        Ok(Self {
            credentials,
            config,
            engine,
            logger,
        })
    }

    /// The active account credentials
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Replace the account as an atomic triple.
    ///
    /// Partial transitions (key swapped under a held identity, or the
    /// other way round) are rejected before anything changes.
    pub fn set_account(&mut self, new: Credentials) -> Result<()> {
        self.credentials.check_transition(&new)?;
        self.logger
            .notice(&format!("account changed to {}", new.user()));
        self.credentials = new;
        Ok(())
    }

    /// Delegate one operation to the engine with a fresh settings snapshot
    pub(crate) async fn fetch(
        &self,
        method: Method,
        descriptor: &Descriptor,
        query: Query,
        body: Option<&JsonValue>,
    ) -> Result<Payload> {
        self.engine
            .fetch(
                &self.credentials,
                method,
                descriptor,
                query,
                body,
                self.config.snapshot(),
            )
            .await
    }

    /// Fetch an aggregated list; anything else is a protocol violation
    pub(crate) async fn fetch_list(
        &self,
        descriptor: &Descriptor,
        query: Query,
    ) -> Result<Vec<JsonValue>> {
        match self.fetch(Method::Get, descriptor, query, None).await? {
            Payload::Records(records) => Ok(records),
            Payload::Object(value) => Err(Error::protocol(format!(
                "expected a paginated list from {}, got: {value}",
                descriptor.kind().name()
            ))),
            Payload::Raw(_) => Err(Error::protocol(format!(
                "expected a paginated list from {}, got a non-JSON body",
                descriptor.kind().name()
            ))),
        }
    }

    /// Fetch a single JSON payload. Empty bodies (e.g. DELETE responses)
    /// come back as `Value::Null`.
    pub(crate) async fn fetch_object(
        &self,
        method: Method,
        descriptor: &Descriptor,
        query: Query,
        body: Option<&JsonValue>,
    ) -> Result<JsonValue> {
        match self.fetch(method, descriptor, query, body).await? {
            Payload::Object(value) => Ok(value),
            Payload::Raw(bytes) if bytes.is_empty() => Ok(JsonValue::Null),
            Payload::Raw(_) => Err(Error::protocol(format!(
                "expected JSON from {}, got a non-JSON body",
                descriptor.kind().name()
            ))),
            Payload::Records(_) => Err(Error::protocol(format!(
                "unexpected paginated list from {}",
                descriptor.kind().name()
            ))),
        }
    }
}

/// Paging window for list operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paging {
    /// Records per page; the configured page size when absent
    pub limit: Option<u64>,
    /// Starting position; 0 when absent
    pub offset: Option<u64>,
}

impl Paging {
    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the starting offset
    #[must_use]
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub(crate) fn apply(&self, query: &mut Query) {
        if let Some(limit) = self.limit {
            query.insert("limit".to_string(), limit.into());
        }
        if let Some(offset) = self.offset {
            query.insert("offset".to_string(), offset.into());
        }
    }
}

#[cfg(test)]
mod tests;
