//! Transport implementation over reqwest

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::log::ApiLogger;
use crate::types::Method;
use bytes::Bytes;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Spacing between retry attempts
const RETRY_DELAY: Duration = Duration::from_millis(250);

/// A raw response: status line plus unparsed body
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Unparsed response body
    pub body: Bytes,
}

impl TransportResponse {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP transport with a bounded retry budget.
///
/// Does not interpret response bodies and does not treat non-2xx statuses
/// as failures; both are the engine's concern.
pub struct Transport {
    client: reqwest::Client,
    logger: Arc<dyn ApiLogger>,
}

impl Transport {
    /// Build a transport from client configuration
    pub fn new(config: &ClientConfig, logger: Arc<dyn ApiLogger>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self { client, logger })
    }

    /// Send one request, retrying transport-level failures up to
    /// `retries` times. Total attempts are at most `retries + 1`; once
    /// the budget is spent the last failure surfaces as
    /// [`Error::RetriesExhausted`].
    pub async fn send(
        &self,
        method: Method,
        headers: &[(String, String)],
        url: &Url,
        body: Option<&str>,
        retries: u32,
        trace: bool,
    ) -> Result<TransportResponse> {
        let mut attempt: u32 = 0;
        let mut last_error: Option<reqwest::Error> = None;

        while attempt <= retries {
            if attempt > 0 {
                tokio::time::sleep(RETRY_DELAY).await;
            }

            let mut req = self.client.request(method.into(), url.clone());
            for (key, value) in headers {
                req = req.header(key.as_str(), value.as_str());
            }
            if let Some(body) = body {
                req = req.body(body.to_owned());
            }

            if trace {
                self.logger.debug(&format!("{method} {url}"));
            }

            match req.send().await {
                Ok(response) => {
                    let status = response.status().as_u16();
                    match response.bytes().await {
                        Ok(bytes) => {
                            debug!("{} {} -> {} ({} bytes)", method, url, status, bytes.len());
                            if trace {
                                self.logger.debug(&format!(
                                    "{method} {url} -> {status} ({} bytes)",
                                    bytes.len()
                                ));
                            }
                            return Ok(TransportResponse {
                                status,
                                body: bytes,
                            });
                        }
                        // Body cut off mid-read is a transport failure too
                        Err(e) => {
                            warn!(
                                "response body read failed, attempt {}/{}: {}",
                                attempt + 1,
                                retries + 1,
                                e
                            );
                            last_error = Some(e);
                            attempt += 1;
                        }
                    }
                }
                Err(e) => {
                    warn!(
                        "request failed, attempt {}/{}: {}",
                        attempt + 1,
                        retries + 1,
                        e
                    );
                    last_error = Some(e);
                    attempt += 1;
                }
            }
        }

        let message = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no response obtained".to_string());
        if trace {
            self.logger
                .error(&format!("{method} {url} failed: {message}"));
        }
        Err(Error::RetriesExhausted {
            attempts: retries + 1,
            message,
        })
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport").finish_non_exhaustive()
    }
}
