//! Line-oriented parser for plain-text M3U playlists.
//!
//! Parsing never fails: malformed metadata yields defaulted fields and an
//! entry without a stream locator is dropped.

use crate::models::ChannelRecord;
use crate::utils::url::UrlUtils;

const EXTINF_PREFIX: &str = "#EXTINF";
const UNKNOWN_NAME: &str = "Unknown";

/// Parse playlist text into channel records tagged with their origin.
///
/// A `#EXTINF` line opens a pending entry (replacing any earlier pending one)
/// and the next line carrying a `scheme://` locator closes it. Other comment
/// lines and stray text in between are skipped.
pub fn parse_playlist(content: &str, source_name: &str, region: &str) -> Vec<ChannelRecord> {
    let mut channels = Vec::new();
    let mut pending: Option<&str> = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with(EXTINF_PREFIX) {
            pending = Some(line);
            continue;
        }

        if line.starts_with('#') || !UrlUtils::is_stream_uri(line) {
            continue;
        }

        if let Some(extinf) = pending.take() {
            channels.push(ChannelRecord::new(
                display_name(extinf),
                line,
                source_name,
                region,
                extract_attribute(extinf, "group-title"),
                extract_attribute(extinf, "tvg-logo"),
                extinf,
            ));
        }
    }

    channels
}

/// Text after the last comma, or `Unknown` when the line has none
pub fn display_name(extinf: &str) -> String {
    match extinf.rfind(',') {
        Some(pos) => extinf[pos + 1..].trim().to_string(),
        None => UNKNOWN_NAME.to_string(),
    }
}

/// Value of a `name="value"` attribute, or an empty string when the attribute
/// is missing or its quotes are unbalanced
pub fn extract_attribute(line: &str, name: &str) -> String {
    let needle = format!("{name}=\"");
    let mut search_from = 0;

    while let Some(found) = line[search_from..].find(&needle) {
        let start = search_from + found;
        let at_boundary = is_attribute_boundary(&line[..start]);

        let value_start = start + needle.len();
        if at_boundary {
            return line[value_start..]
                .find('"')
                .map(|end| line[value_start..value_start + end].to_string())
                .unwrap_or_default();
        }
        search_from = value_start;
    }

    String::new()
}

/// Whether an attribute name may start right after `prefix`
pub(crate) fn is_attribute_boundary(prefix: &str) -> bool {
    prefix
        .chars()
        .next_back()
        .map_or(true, |c| c.is_whitespace() || c == ':' || c == ',')
}
