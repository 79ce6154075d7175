//! Source fetching and normalization into channel records

use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::config::StructuredFeedConfig;
use crate::errors::{SourceError, SourceResult};
use crate::models::{ChannelRecord, FetchKind, SourceDescriptor};
use crate::utils::{HttpFetch, UrlUtils};

pub mod m3u_parser;
pub mod structured_feed;

pub use m3u_parser::parse_playlist;
pub use structured_feed::StructuredFeed;

/// Downloaded, not yet normalized, content for one descriptor
#[derive(Debug, Clone)]
pub enum RawPayload {
    Playlist(String),
    Feed(Arc<StructuredFeed>),
}

/// Downloads source payloads. The shared structured feed is fetched at most
/// once per fetcher, on first use, and its outcome (including a failure) is
/// reused for every structured-feed descriptor.
pub struct SourceFetcher {
    http: Arc<dyn HttpFetch>,
    feed_config: StructuredFeedConfig,
    feed: OnceCell<SourceResult<Arc<StructuredFeed>>>,
}

impl SourceFetcher {
    pub fn new(http: Arc<dyn HttpFetch>, feed_config: StructuredFeedConfig) -> Self {
        Self {
            http,
            feed_config,
            feed: OnceCell::new(),
        }
    }

    pub async fn fetch(&self, descriptor: &SourceDescriptor) -> SourceResult<RawPayload> {
        match &descriptor.kind {
            FetchKind::PlainText { url } => {
                info!(
                    "Downloading {} from {}",
                    descriptor.name,
                    UrlUtils::obfuscate_credentials(url)
                );
                let content = self.http.fetch_text(url).await?;
                debug!(
                    "{}: {} metadata lines",
                    descriptor.name,
                    content.matches("#EXTINF").count()
                );
                Ok(RawPayload::Playlist(content))
            }
            FetchKind::StructuredFeed => {
                let feed = self
                    .structured_feed()
                    .await
                    .map_err(|e| SourceError::FeedUnavailable {
                        message: e.to_string(),
                    })?;
                Ok(RawPayload::Feed(feed))
            }
        }
    }

    /// Turn a payload into records tagged with the descriptor's name and region
    pub fn normalize(&self, descriptor: &SourceDescriptor, payload: &RawPayload) -> Vec<ChannelRecord> {
        match payload {
            RawPayload::Playlist(content) => {
                parse_playlist(content, &descriptor.name, &descriptor.region)
            }
            RawPayload::Feed(feed) => feed.channels_for_region(
                &descriptor.region,
                &descriptor.name,
                &self.feed_config.stream_base_url,
            ),
        }
    }

    /// Fetch and normalize one descriptor
    pub async fn collect(&self, descriptor: &SourceDescriptor) -> SourceResult<Vec<ChannelRecord>> {
        let payload = self.fetch(descriptor).await?;
        Ok(self.normalize(descriptor, &payload))
    }

    async fn structured_feed(&self) -> SourceResult<Arc<StructuredFeed>> {
        self.feed
            .get_or_init(|| async {
                let url = &self.feed_config.url;
                info!(
                    "Downloading structured channel feed from {}",
                    UrlUtils::obfuscate_credentials(url)
                );
                let result = async {
                    let bytes = self.http.fetch_bytes(url).await?;
                    StructuredFeed::from_slice(&bytes, &self.feed_config.default_slug)
                }
                .await;

                match result {
                    Ok(feed) => {
                        info!("Structured feed loaded ({} regions)", feed.region_count());
                        Ok(Arc::new(feed))
                    }
                    Err(e) => {
                        warn!("Structured feed unavailable: {}", e);
                        Err(e)
                    }
                }
            })
            .await
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct FakeHttp {
        bodies: HashMap<String, Vec<u8>>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl HttpFetch for FakeHttp {
        async fn fetch_text(&self, url: &str) -> SourceResult<String> {
            let bytes = self.fetch_bytes(url).await?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }

        async fn fetch_bytes(&self, url: &str) -> SourceResult<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.bodies.get(url).cloned().ok_or(SourceError::Http {
                status: 404,
                url: url.to_string(),
            })
        }
    }

    fn feed_config() -> StructuredFeedConfig {
        StructuredFeedConfig {
            url: "http://feed.test/channels.json.gz".to_string(),
            ..StructuredFeedConfig::default()
        }
    }

    #[tokio::test]
    async fn test_plain_text_source_is_parsed() {
        let mut http = FakeHttp::default();
        http.bodies.insert(
            "http://a.test/list.m3u".to_string(),
            b"#EXTM3U\n#EXTINF:-1 group-title=\"News\",One\nhttp://a.test/1\n".to_vec(),
        );
        let fetcher = SourceFetcher::new(Arc::new(http), feed_config());
        let descriptor = SourceDescriptor::plain_text("a", "Source A", "http://a.test/list.m3u", "BR");

        let records = fetcher.collect(&descriptor).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source_name, "Source A");
        assert_eq!(records[0].original_category, "News");
    }

    #[tokio::test]
    async fn test_plain_text_failure_is_reported() {
        let fetcher = SourceFetcher::new(Arc::new(FakeHttp::default()), feed_config());
        let descriptor = SourceDescriptor::plain_text("a", "Source A", "http://a.test/missing.m3u", "BR");

        let err = fetcher.collect(&descriptor).await.unwrap_err();
        assert_eq!(err.kind(), "http");
    }

    #[tokio::test]
    async fn test_structured_feed_fetched_once() {
        let http = Arc::new(FakeHttp {
            bodies: HashMap::from([(
                "http://feed.test/channels.json.gz".to_string(),
                br#"{"regions": {"us": {"channels": {"A": {"name": "Alpha"}}}}}"#.to_vec(),
            )]),
            calls: AtomicUsize::new(0),
        });
        let fetcher = SourceFetcher::new(http.clone(), feed_config());

        let us = fetcher
            .collect(&SourceDescriptor::structured_feed("us", "Feed US", "us"))
            .await
            .unwrap();
        let gb = fetcher
            .collect(&SourceDescriptor::structured_feed("gb", "Feed UK", "gb"))
            .await
            .unwrap();

        assert_eq!(us.len(), 1);
        assert_eq!(us[0].url, "https://jmp2.uk/stvp-A");
        assert!(gb.is_empty());
        assert_eq!(http.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_structured_feed_failure_is_cached() {
        let http = Arc::new(FakeHttp::default());
        let fetcher = SourceFetcher::new(http.clone(), feed_config());

        for region in ["us", "gb", "ca"] {
            let err = fetcher
                .collect(&SourceDescriptor::structured_feed(region, region, region))
                .await
                .unwrap_err();
            assert_eq!(err.kind(), "feed_unavailable");
        }
        assert_eq!(http.calls.load(Ordering::SeqCst), 1);
    }
}
