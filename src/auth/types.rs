//! Credential types
//!
//! A validated account triple and the request headers derived from it.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Header carrying the account username
pub const USERNAME_HEADER: &str = "X-api-username";

/// Header carrying the account API key
pub const API_KEY_HEADER: &str = "X-api-key";

/// API keys are exactly 40 lowercase hex characters
static API_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]{40}$").expect("static regex"));

/// A validated account triple: host, user, API key.
///
/// The triple is the account identity. There are no per-field setters;
/// replacing credentials on a client goes through
/// [`Credentials::check_transition`] so that partial changes are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    host: String,
    user: String,
    apikey: String,
}

impl Credentials {
    /// Create credentials, validating the API key shape.
    ///
    /// The host is normalized to end with a trailing slash so that URL
    /// templates can append resource paths directly.
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        apikey: impl Into<String>,
    ) -> Result<Self> {
        let host = host.into();
        let user = user.into();
        let apikey = apikey.into();

        if host.is_empty() {
            return Err(Error::config("host must not be empty"));
        }
        if user.is_empty() {
            return Err(Error::config("user must not be empty"));
        }
        if !API_KEY_REGEX.is_match(&apikey) {
            return Err(Error::invalid_api_key(&apikey));
        }

        let host = if host.ends_with('/') {
            host
        } else {
            format!("{host}/")
        };

        Ok(Self { host, user, apikey })
    }

    /// API root, always with a trailing slash
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Account username
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Account API key
    pub fn apikey(&self) -> &str {
        &self.apikey
    }

    /// The two auth headers sent with every request
    pub fn auth_headers(&self) -> [(&'static str, &str); 2] {
        [
            (USERNAME_HEADER, self.user.as_str()),
            (API_KEY_HEADER, self.apikey.as_str()),
        ]
    }

    /// Validate a credential replacement.
    ///
    /// The triple changes as a unit: a new value that swaps the key while
    /// keeping (host, user), or swaps (host, user) while keeping the key,
    /// is a partial transition and is rejected. Identical or fully new
    /// triples pass.
    pub fn check_transition(&self, new: &Credentials) -> Result<()> {
        let identity_changed = self.host != new.host || self.user != new.user;
        let key_changed = self.apikey != new.apikey;

        if identity_changed != key_changed {
            let message = if key_changed {
                "API key changed while host and user were held fixed"
            } else {
                "host/user changed while the API key was held fixed"
            };
            return Err(Error::inconsistent_account(message));
        }

        Ok(())
    }
}
