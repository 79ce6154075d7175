//! Centralized error handling for the playlist aggregator
//!
//! Errors are scoped as narrowly as the work they describe:
//!
//! - **Source errors**: one feed could not be fetched or decoded. The source is
//!   skipped and every other source keeps going.
//! - **Pipeline errors**: the run as a whole cannot produce a playlist.
//! - **Application errors**: configuration, I/O and client construction
//!   failures surfaced to the binary.
//!
//! Probe failures are not errors at all; they are recorded as a
//! [`HealthStatus`](crate::models::HealthStatus) on the channel.

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Source Results
pub type SourceResult<T> = Result<T, SourceError>;
