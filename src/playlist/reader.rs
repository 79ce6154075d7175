//! Reads a rendered playlist the way playback clients do and groups it into
//! category rows.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::ingestor::m3u_parser::extract_attribute;

/// Label used for entries without a category
pub const UNCATEGORIZED_ROW: &str = "Outros";
const BR_ROW_PREFIX: &str = "BR ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistEntry {
    pub name: String,
    pub url: String,
    pub logo: String,
    pub group: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    pub label: String,
    /// `"{label} ({count})"` with the uncapped count
    pub title: String,
    pub total: usize,
    pub entries: Vec<PlaylistEntry>,
}

/// Parse entries: each `#EXTINF:` line is paired with the next non-blank line
/// when that line starts with `http`.
pub fn read_playlist(content: &str) -> Vec<PlaylistEntry> {
    let lines: Vec<&str> = content.lines().collect();
    let mut entries = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim();
        if !line.starts_with("#EXTINF:") {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < lines.len() && lines[j].trim().is_empty() {
            j += 1;
        }
        if j >= lines.len() {
            break;
        }

        let url = lines[j].trim();
        if url.starts_with("http") {
            let name = line.rsplit(',').next().unwrap_or(line).trim();
            entries.push(PlaylistEntry {
                name: name.to_string(),
                url: url.to_string(),
                logo: extract_attribute(line, "tvg-logo"),
                group: extract_attribute(line, "group-title"),
            });
        }
        i = j + 1;
    }

    entries
}

/// Group entries into rows: `BR ` rows first, then the other rows, each set
/// sorted by label, and the uncategorized row last. Entries in a row are
/// sorted by name and capped at `max_per_row`.
pub fn group_rows(entries: &[PlaylistEntry], max_per_row: usize) -> Vec<CategoryRow> {
    let mut by_group: BTreeMap<&str, Vec<&PlaylistEntry>> = BTreeMap::new();
    for entry in entries {
        let label = if entry.group.is_empty() {
            UNCATEGORIZED_ROW
        } else {
            entry.group.as_str()
        };
        by_group.entry(label).or_default().push(entry);
    }

    let uncategorized = by_group.remove(UNCATEGORIZED_ROW);
    let (br_rows, other_rows): (Vec<_>, Vec<_>) = by_group
        .into_iter()
        .partition(|(label, _)| label.starts_with(BR_ROW_PREFIX));

    br_rows
        .into_iter()
        .chain(other_rows)
        .chain(uncategorized.map(|members| (UNCATEGORIZED_ROW, members)))
        .map(|(label, mut members)| {
            members.sort_by(|a, b| a.name.cmp(&b.name));
            let total = members.len();
            CategoryRow {
                label: label.to_string(),
                title: format!("{label} ({total})"),
                total,
                entries: members.into_iter().take(max_per_row).cloned().collect(),
            }
        })
        .collect()
}
