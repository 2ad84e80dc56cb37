//! Client configuration
//!
//! [`ClientConfig`] holds the read-mostly settings owned by a client
//! instance. Each traversal snapshots the values it needs into
//! [`FetchOptions`] at the start of the call, so reconfiguring a client
//! never changes the behavior of a traversal already in flight.

use std::time::Duration;

/// Configuration for a [`crate::client::Client`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Retry budget for one request: total attempts = retries + 1
    pub retries: u32,
    /// Page size requested when the caller does not supply a `limit`.
    /// Kept modest since very large pages can time out upstream.
    pub page_limit: u32,
    /// Ceiling on records aggregated by one traversal (0 = unlimited)
    pub max_records: usize,
    /// Per-request timeout
    pub timeout: Duration,
    /// Accept invalid TLS certificates (self-signed test hosts only)
    pub accept_invalid_certs: bool,
    /// Emit a log line per request/response through the injected logger
    pub trace_requests: bool,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            retries: 10,
            page_limit: 10,
            max_records: 0,
            timeout: Duration::from_secs(60),
            accept_invalid_certs: false,
            trace_requests: false,
            user_agent: format!("subplat-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Snapshot the traversal-relevant settings for one fetch call
    pub fn snapshot(&self) -> FetchOptions {
        FetchOptions {
            retries: self.retries,
            page_limit: self.page_limit,
            max_records: self.max_records,
            trace_requests: self.trace_requests,
        }
    }
}

/// Builder for [`ClientConfig`]
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the retry budget
    pub fn retries(mut self, retries: u32) -> Self {
        self.config.retries = retries;
        self
    }

    /// Set the default page size
    pub fn page_limit(mut self, limit: u32) -> Self {
        self.config.page_limit = limit;
        self
    }

    /// Set the record ceiling per traversal (0 = unlimited)
    pub fn max_records(mut self, max: usize) -> Self {
        self.config.max_records = max;
        self
    }

    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Accept invalid TLS certificates (self-signed test hosts only)
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config.accept_invalid_certs = accept;
        self
    }

    /// Log every request/response through the injected logger
    pub fn trace_requests(mut self, trace: bool) -> Self {
        self.config.trace_requests = trace;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Per-call snapshot of the settings a traversal depends on
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    /// Retry budget for each request in the traversal
    pub retries: u32,
    /// Effective page size when the query carries no `limit`
    pub page_limit: u32,
    /// Record ceiling (0 = unlimited)
    pub max_records: usize,
    /// Per-request trace logging
    pub trace_requests: bool,
}

impl FetchOptions {
    /// Ceiling as an Option for bounds checks
    pub fn record_ceiling(&self) -> Option<usize> {
        if self.max_records == 0 {
            None
        } else {
            Some(self.max_records)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.retries, 10);
        assert_eq!(config.page_limit, 10);
        assert_eq!(config.max_records, 0);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(!config.accept_invalid_certs);
        assert!(!config.trace_requests);
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::builder()
            .retries(3)
            .page_limit(25)
            .max_records(1000)
            .timeout(Duration::from_secs(30))
            .accept_invalid_certs(true)
            .trace_requests(true)
            .user_agent("test-agent/1.0")
            .build();

        assert_eq!(config.retries, 3);
        assert_eq!(config.page_limit, 25);
        assert_eq!(config.max_records, 1000);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.accept_invalid_certs);
        assert!(config.trace_requests);
        assert_eq!(config.user_agent, "test-agent/1.0");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut config = ClientConfig::default();
        let snapshot = config.snapshot();
        config.retries = 0;
        config.page_limit = 99;

        assert_eq!(snapshot.retries, 10);
        assert_eq!(snapshot.page_limit, 10);
    }

    #[test]
    fn test_record_ceiling() {
        let mut options = ClientConfig::default().snapshot();
        assert_eq!(options.record_ceiling(), None);
        options.max_records = 50;
        assert_eq!(options.record_ceiling(), Some(50));
    }
}
