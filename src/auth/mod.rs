//! Account credentials
//!
//! The platform authenticates every request with two custom headers
//! carrying the username and a 40-character API key. Credentials are an
//! atomic (host, user, apikey) triple: they are validated at construction
//! and only replaceable as a whole.

mod types;

pub use types::{Credentials, API_KEY_HEADER, USERNAME_HEADER};

#[cfg(test)]
mod tests;
