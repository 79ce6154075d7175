use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

use crate::config::defaults::SLUG_ID_PLACEHOLDER;
use crate::errors::{SourceError, SourceResult};
use crate::models::ChannelRecord;

/// The shared JSON channel feed, keyed by region
#[derive(Debug, Clone, Deserialize)]
pub struct StructuredFeed {
    #[serde(default)]
    regions: HashMap<String, FeedRegion>,
    /// Stream path template containing `{id}`
    #[serde(default)]
    slug: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FeedRegion {
    #[serde(default)]
    channels: BTreeMap<String, FeedChannel>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FeedChannel {
    name: Option<String>,
    chno: Option<Value>,
    group: Option<String>,
    logo: Option<String>,
}

impl StructuredFeed {
    /// Decode the (already decompressed) feed document. A feed without its
    /// own `slug` template falls back to `default_slug`.
    pub fn from_slice(bytes: &[u8], default_slug: &str) -> SourceResult<Self> {
        let mut feed: StructuredFeed = serde_json::from_slice(bytes)
            .map_err(|e| SourceError::parse("structured_feed", e.to_string()))?;
        if feed.slug.is_none() {
            feed.slug = Some(default_slug.to_string());
        }
        Ok(feed)
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Channel records for one region, ordered by channel id.
    /// Unknown regions produce an empty list.
    pub fn channels_for_region(
        &self,
        region: &str,
        source_name: &str,
        stream_base_url: &str,
    ) -> Vec<ChannelRecord> {
        let Some(region_info) = self.regions.get(region) else {
            return Vec::new();
        };
        let slug_template = self.slug.as_deref().unwrap_or_default();

        region_info
            .channels
            .iter()
            .map(|(id, channel)| {
                let name = channel.name.as_deref().unwrap_or("Unknown");
                let group = channel.group.as_deref().unwrap_or("Other");
                let logo = channel.logo.as_deref().unwrap_or_default();
                let chno = channel_number(channel.chno.as_ref());

                let url = format!(
                    "{stream_base_url}{}",
                    slug_template.replace(SLUG_ID_PLACEHOLDER, id)
                );
                let extinf = format!(
                    "#EXTINF:-1 tvg-id=\"{id}\" tvg-name=\"{name}\" tvg-logo=\"{logo}\" tvg-chno=\"{chno}\" group-title=\"{group}\",{name}"
                );

                ChannelRecord::new(name, url, source_name, region, group, logo, extinf)
            })
            .collect()
    }
}

fn channel_number(chno: Option<&Value>) -> String {
    match chno {
        None | Some(Value::Null) => "0".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"{
        "regions": {
            "us": {
                "name": "United States",
                "channels": {
                    "USBC2": {"name": "Beta", "chno": 1021, "group": "News", "logo": "http://logo.test/b.png"},
                    "USAB1": {"name": "Alpha", "chno": "7", "group": "Music"},
                    "USZZ9": {}
                }
            }
        }
    }"#;

    #[test]
    fn test_channels_ordered_by_id_with_defaults() {
        let feed = StructuredFeed::from_slice(FEED.as_bytes(), "stvp-{id}").unwrap();
        let channels = feed.channels_for_region("us", "Samsung TV Plus US", "https://jmp2.uk/");

        let names: Vec<_> = channels.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Unknown"]);

        assert_eq!(channels[0].url, "https://jmp2.uk/stvp-USAB1");
        assert_eq!(channels[0].original_category, "Music");
        assert_eq!(
            channels[1].extinf,
            "#EXTINF:-1 tvg-id=\"USBC2\" tvg-name=\"Beta\" tvg-logo=\"http://logo.test/b.png\" tvg-chno=\"1021\" group-title=\"News\",Beta"
        );
        assert_eq!(
            channels[2].extinf,
            "#EXTINF:-1 tvg-id=\"USZZ9\" tvg-name=\"Unknown\" tvg-logo=\"\" tvg-chno=\"0\" group-title=\"Other\",Unknown"
        );
        assert_eq!(channels[2].original_category, "Other");
        assert!(channels.iter().all(|c| c.region == "us"));
    }

    #[test]
    fn test_feed_slug_overrides_default() {
        let feed = StructuredFeed::from_slice(
            br#"{"slug": "live/{id}.m3u8", "regions": {"gb": {"channels": {"GB1": {"name": "One"}}}}}"#,
            "stvp-{id}",
        )
        .unwrap();
        let channels = feed.channels_for_region("gb", "Samsung TV Plus UK", "https://jmp2.uk/");
        assert_eq!(channels[0].url, "https://jmp2.uk/live/GB1.m3u8");
    }

    #[test]
    fn test_unknown_region_is_empty() {
        let feed = StructuredFeed::from_slice(FEED.as_bytes(), "stvp-{id}").unwrap();
        assert!(!feed.channels_for_region("us", "Samsung TV Plus US", "https://jmp2.uk/").is_empty());
        assert!(feed.channels_for_region("ca", "Samsung TV Plus CA", "https://jmp2.uk/").is_empty());
    }

    #[test]
    fn test_invalid_document_is_parse_error() {
        let err = StructuredFeed::from_slice(b"not json", "stvp-{id}").unwrap_err();
        assert_eq!(err.kind(), "parse");
    }
}
