//! Error type definitions for the playlist aggregator

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Source handling errors that escaped their source
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Run-level pipeline failures
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// File system errors while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client construction errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization of reports and configuration dumps
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Failures confined to a single source.
///
/// Every variant here is absorbed by the pipeline: the source contributes zero
/// channels and is reported in the run summary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Upstream answered with a non-success status
    #[error("HTTP error: {status} - {url}")]
    Http { status: u16, url: String },

    /// Transport failure: DNS, TLS, connection reset, timeout
    #[error("Network error: {url} - {message}")]
    Network { url: String, message: String },

    /// Payload could not be decompressed or decoded
    #[error("Decode error: {url} - {message}")]
    Decode { url: String, message: String },

    /// Payload decoded but did not match the expected schema
    #[error("Parse error: {source_type} - {message}")]
    Parse { source_type: String, message: String },

    /// A structured-feed descriptor was requested but the shared feed is unavailable
    #[error("Structured feed unavailable: {message}")]
    FeedUnavailable { message: String },
}

/// Run-level failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Nothing left to probe or render after merging all sources
    #[error("No channels collected from {sources_attempted} sources and {curated} curated entries; nothing to probe or render")]
    EmptyAggregate {
        sources_attempted: usize,
        curated: usize,
    },
}

impl AppError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

impl SourceError {
    /// Create a network error with an already obfuscated URL
    pub fn network<U: Into<String>, M: Into<String>>(url: U, message: M) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode<U: Into<String>, M: Into<String>>(url: U, message: M) -> Self {
        Self::Decode {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse<S: Into<String>, M: Into<String>>(source_type: S, message: M) -> Self {
        Self::Parse {
            source_type: source_type.into(),
            message: message.into(),
        }
    }

    /// Short label used in run summaries
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::Http { .. } => "http",
            SourceError::Network { .. } => "network",
            SourceError::Decode { .. } => "decode",
            SourceError::Parse { .. } => "parse",
            SourceError::FeedUnavailable { .. } => "feed_unavailable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_kind_labels() {
        let err = SourceError::Http {
            status: 404,
            url: "https://example.com/a.m3u".to_string(),
        };
        assert_eq!(err.kind(), "http");
        assert_eq!(err.to_string(), "HTTP error: 404 - https://example.com/a.m3u");

        let err = SourceError::network("https://example.com", "connection reset");
        assert_eq!(err.kind(), "network");
    }

    #[test]
    fn test_source_error_converts_into_app_error() {
        let app: AppError = SourceError::parse("structured_feed", "missing regions").into();
        assert!(matches!(app, AppError::Source(SourceError::Parse { .. })));
    }

    #[test]
    fn test_empty_aggregate_message_mentions_counts() {
        let err = PipelineError::EmptyAggregate {
            sources_attempted: 3,
            curated: 0,
        };
        let message = err.to_string();
        assert!(message.contains("3 sources"));
        assert!(message.contains("0 curated"));
    }
}
