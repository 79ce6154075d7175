use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// How a source's channel list is obtained
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FetchKind {
    /// A remote M3U playlist downloaded as text
    PlainText { url: String },
    /// A region slice of the shared compressed JSON channel feed
    StructuredFeed,
}

/// A single entry in the source catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    pub key: String,
    pub name: String,
    pub kind: FetchKind,
    pub region: String,
}

impl SourceDescriptor {
    pub fn plain_text(key: &str, name: &str, url: &str, region: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            kind: FetchKind::PlainText {
                url: url.to_string(),
            },
            region: region.to_string(),
        }
    }

    pub fn structured_feed(key: &str, name: &str, region: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            kind: FetchKind::StructuredFeed,
            region: region.to_string(),
        }
    }
}

/// Result of probing a stream endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "code", rename_all = "snake_case")]
pub enum HealthStatus {
    #[default]
    Unknown,
    Live,
    HttpError(u16),
    NetworkError,
}

impl HealthStatus {
    pub fn is_live(&self) -> bool {
        matches!(self, HealthStatus::Live)
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, HealthStatus::Unknown)
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Unknown => write!(f, "UNKNOWN"),
            HealthStatus::Live => write!(f, "OK"),
            HealthStatus::HttpError(code) => write!(f, "HTTP_{code}"),
            HealthStatus::NetworkError => write!(f, "ERROR"),
        }
    }
}

/// One normalized channel, independent of the source format it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRecord {
    pub name: String,
    pub url: String,
    pub source_name: String,
    pub region: String,
    /// Category label as published by the source, may be empty
    pub original_category: String,
    pub logo: String,
    /// Metadata line as published (or synthesized) for this entry
    pub extinf: String,
    #[serde(default)]
    health: HealthStatus,
}

impl ChannelRecord {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        source_name: impl Into<String>,
        region: impl Into<String>,
        original_category: impl Into<String>,
        logo: impl Into<String>,
        extinf: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            source_name: source_name.into(),
            region: region.into(),
            original_category: original_category.into(),
            logo: logo.into(),
            extinf: extinf.into(),
            health: HealthStatus::Unknown,
        }
    }

    pub fn health(&self) -> HealthStatus {
        self.health
    }

    pub fn has_logo(&self) -> bool {
        !self.logo.trim().is_empty()
    }

    /// Record the probe outcome. Only the first transition out of
    /// `Unknown` is kept; later attempts are ignored.
    pub fn set_health(&mut self, status: HealthStatus) -> bool {
        if self.health.is_terminal() {
            warn!(
                "Ignoring health transition {} -> {} for '{}'",
                self.health, status, self.name
            );
            return false;
        }
        self.health = status;
        true
    }
}

/// A live record with its final category assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedChannel {
    pub record: ChannelRecord,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ChannelRecord {
        ChannelRecord::new(
            "News One",
            "http://a.test/one.m3u8",
            "Test",
            "BR",
            "",
            "",
            "#EXTINF:-1,News One",
        )
    }

    #[test]
    fn test_health_transitions_once() {
        let mut channel = record();
        assert_eq!(channel.health(), HealthStatus::Unknown);

        assert!(channel.set_health(HealthStatus::HttpError(404)));
        assert!(!channel.set_health(HealthStatus::Live));
        assert_eq!(channel.health(), HealthStatus::HttpError(404));
    }

    #[test]
    fn test_health_status_display() {
        assert_eq!(HealthStatus::Live.to_string(), "OK");
        assert_eq!(HealthStatus::HttpError(503).to_string(), "HTTP_503");
        assert_eq!(HealthStatus::NetworkError.to_string(), "ERROR");
    }

    #[test]
    fn test_has_logo_ignores_whitespace() {
        let mut channel = record();
        assert!(!channel.has_logo());
        channel.logo = "  ".to_string();
        assert!(!channel.has_logo());
        channel.logo = "http://a.test/logo.png".to_string();
        assert!(channel.has_logo());
    }
}
