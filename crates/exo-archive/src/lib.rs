//! # exo-archive
//!
//! NASA Exoplanet Archive access for Exoscope.
//!
//! - [`ArchiveClient`] issues ADQL queries against the archive's TAP sync
//!   endpoint and parses the JSON rows.
//! - [`QueryCache`] memoizes results per `(search, limit)` for a time window,
//!   against an injectable [`Clock`].
//! - [`ExoplanetService`] ties them together and never fails: when the
//!   archive is unavailable it serves a fixed set of sample planets.

pub mod cache;
pub mod client;
pub mod clock;
pub mod fallback;
pub mod query;
pub mod service;

mod error;
mod http;

pub use cache::{CacheKey, QueryCache};
pub use client::{ArchiveClient, ArchiveSource, ClientSettings};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::ArchiveError;
pub use query::{ArchiveQuery, DEFAULT_ENDPOINT};
pub use service::ExoplanetService;
