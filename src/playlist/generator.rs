use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::info;

use crate::errors::AppResult;
use crate::ingestor::m3u_parser::is_attribute_boundary;
use crate::models::ClassifiedChannel;

const GROUP_ATTR: &str = "group-title=\"";
const EXTINF_TAG: &str = "#EXTINF:";

/// Set the `group-title` value of a metadata line.
///
/// Every existing `group-title="..."` value is replaced in place. When the line
/// has none, the attribute is inserted right after the `#EXTINF:<duration>`
/// token.
pub fn set_group_title(line: &str, category: &str) -> String {
    let mut output = String::with_capacity(line.len() + category.len() + 16);
    let mut copied = 0;
    let mut search_from = 0;

    while let Some(found) = line[search_from..].find(GROUP_ATTR) {
        let start = search_from + found;
        let value_start = start + GROUP_ATTR.len();
        if !is_attribute_boundary(&line[..start]) {
            search_from = value_start;
            continue;
        }
        let Some(value_len) = line[value_start..].find('"') else {
            break;
        };
        output.push_str(&line[copied..value_start]);
        output.push_str(category);
        output.push('"');
        copied = value_start + value_len + 1;
        search_from = copied;
    }
    output.push_str(&line[copied..]);

    if copied > 0 {
        return output;
    }

    let Some(tag_rest) = line.strip_prefix(EXTINF_TAG) else {
        return line.to_string();
    };
    let duration_end = EXTINF_TAG.len()
        + tag_rest
            .find(|c: char| c.is_whitespace() || c == ',')
            .unwrap_or(tag_rest.len());

    format!(
        "{} group-title=\"{}\"{}",
        &line[..duration_end],
        category,
        &line[duration_end..]
    )
}

/// Render the final playlist document
pub fn render_playlist(channels: &[ClassifiedChannel], generated_at: DateTime<Utc>) -> String {
    let mut lines = Vec::with_capacity(channels.len() * 2 + 4);
    lines.push("#EXTM3U".to_string());
    lines.push(format!(
        "# Updated: {}",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    lines.push(format!("# Channels: {}", channels.len()));
    lines.push(String::new());

    for channel in channels {
        lines.push(set_group_title(&channel.record.extinf, &channel.category));
        lines.push(channel.record.url.clone());
    }

    lines.join("\n")
}

/// Write the rendered playlist, creating parent directories as needed
pub async fn write_playlist(path: &Path, content: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, content).await?;
    info!("Playlist written to {} ({} bytes)", path.display(), content.len());
    Ok(())
}
