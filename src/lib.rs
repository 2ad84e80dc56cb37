//! # Subplat client
//!
//! A client library for the Subplat subtitle-platform REST API.
//! It authenticates with static credentials, builds resource URLs from a
//! static template table, issues HTTP requests with a bounded retry
//! budget, and transparently paginates list resources into one result.
//!
//! ## Features
//!
//! - **Paginated traversal**: offset/limit list responses are merged
//!   across requests, in arrival order, with safe termination bounds
//! - **Raw passthrough**: non-JSON payloads (subtitle tracks in SRT and
//!   friends) are returned verbatim, never paginated
//! - **Bounded retries**: transport-level failures retry up to a
//!   configured budget; HTTP statuses are data, not retry triggers
//! - **Atomic accounts**: credentials are a validated (host, user, key)
//!   triple, replaceable only as a whole
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use subplat_client::{Client, Credentials, VideoFilters, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let credentials = Credentials::new(
//!         "https://platform.example.com/api/",
//!         "alice",
//!         "0123456789abcdef0123456789abcdef01234567",
//!     )?;
//!     let client = Client::new(credentials)?;
//!
//!     // All pages, one call
//!     let videos = client.get_videos(&VideoFilters::default().team("my-team")).await?;
//!
//!     for video in &videos {
//!         println!("{}", video["title"]);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Resource Façade                        │
//! │  videos · languages · subtitles · tasks · members ·         │
//! │  users · activities                                         │
//! └─────────────────────────────┬───────────────────────────────┘
//!                               │
//! ┌─────────────────────────────┴───────────────────────────────┐
//! │                      Pagination Engine                      │
//! │  headers · offset loop · page merge · termination           │
//! └──────────┬─────────────────────────────────────┬────────────┘
//!            │                                     │
//! ┌──────────┴───────────┐            ┌────────────┴────────────┐
//! │     URL Resolver     │            │        Transport        │
//! │ templates · encoding │            │  one request · retries  │
//! └──────────────────────┘            └─────────────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Logger interface and default implementations
pub mod log;

/// Account credentials
pub mod auth;

/// Resource descriptors and URL resolution
pub mod resource;

/// HTTP transport with bounded retries
pub mod transport;

/// Pagination engine
pub mod engine;

/// Resource façade
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::Credentials;
pub use client::{
    is_valid_video_id, last_version_number, ActivityFilters, Client, Paging, TaskFilters,
    VideoFilters,
};
pub use config::{ClientConfig, FetchOptions};
pub use engine::{PageMeta, Payload};
pub use error::{Error, Result};
pub use log::{ApiLogger, NoopLogger, Severity, TracingLogger};
pub use resource::{ContentType, Descriptor, ResourceKind};
pub use types::Method;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
