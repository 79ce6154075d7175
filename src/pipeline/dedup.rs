use std::collections::HashSet;
use tracing::info;

use crate::models::ChannelRecord;

/// Endpoint identity: the URL up to the first `?`, with at most one trailing
/// `/` removed. Comparison is exact and case-sensitive.
pub fn canonical_key(url: &str) -> &str {
    let without_query = url.split_once('?').map_or(url, |(base, _)| base);
    without_query.strip_suffix('/').unwrap_or(without_query)
}

#[derive(Debug, Clone, Default)]
pub struct DedupOutcome {
    pub retained: Vec<ChannelRecord>,
    pub removed: usize,
}

/// Keep the first record seen for each canonical key, preserving encounter
/// order.
pub fn deduplicate(records: Vec<ChannelRecord>) -> DedupOutcome {
    let total = records.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(total);

    let retained: Vec<ChannelRecord> = records
        .into_iter()
        .filter(|record| seen.insert(canonical_key(&record.url).to_string()))
        .collect();

    let removed = total - retained.len();
    if removed > 0 {
        info!("Removed {} duplicate channels", removed);
    }
    info!("Unique channels: {}", retained.len());

    DedupOutcome { retained, removed }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, url: &str) -> ChannelRecord {
        ChannelRecord::new(name, url, "S", "US", "", "", format!("#EXTINF:-1,{name}"))
    }

    #[test]
    fn test_canonical_key() {
        assert_eq!(canonical_key("http://a.test/s.m3u8?x=1"), "http://a.test/s.m3u8");
        assert_eq!(canonical_key("http://a.test/live/"), "http://a.test/live");
        assert_eq!(canonical_key("http://a.test/live//"), "http://a.test/live/");
        assert_eq!(canonical_key("http://a.test/live/?a=b?c"), "http://a.test/live");
        assert_ne!(canonical_key("http://A.test/x"), canonical_key("http://a.test/x"));
    }

    #[test]
    fn test_first_seen_wins() {
        let outcome = deduplicate(vec![
            record("First", "http://a.test/stream.m3u8?x=1"),
            record("Other", "http://b.test/other.m3u8"),
            record("Second", "http://a.test/stream.m3u8"),
            record("Third", "http://a.test/stream.m3u8/"),
        ]);

        assert_eq!(outcome.removed, 2);
        let names: Vec<_> = outcome.retained.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Other"]);
        assert_eq!(outcome.retained[0].url, "http://a.test/stream.m3u8?x=1");
    }

    #[test]
    fn test_empty_input() {
        let outcome = deduplicate(Vec::new());
        assert!(outcome.retained.is_empty());
        assert_eq!(outcome.removed, 0);
    }
}
