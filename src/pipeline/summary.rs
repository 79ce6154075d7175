use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::errors::{AppError, AppResult, SourceError};
use crate::models::{ChannelRecord, ClassifiedChannel, HealthStatus, SourceDescriptor};

/// Outcome of one catalog source
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourceStatus {
    Ok { channels: usize },
    Failed { kind: String, message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    pub key: String,
    pub name: String,
    pub region: String,
    #[serde(flatten)]
    pub status: SourceStatus,
}

impl SourceReport {
    pub fn collected(descriptor: &SourceDescriptor, channels: usize) -> Self {
        Self::new(descriptor, SourceStatus::Ok { channels })
    }

    pub fn failed(descriptor: &SourceDescriptor, error: &SourceError) -> Self {
        Self::new(
            descriptor,
            SourceStatus::Failed {
                kind: error.kind().to_string(),
                message: error.to_string(),
            },
        )
    }

    fn new(descriptor: &SourceDescriptor, status: SourceStatus) -> Self {
        Self {
            key: descriptor.key.clone(),
            name: descriptor.name.clone(),
            region: descriptor.region.clone(),
            status,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProbeBreakdown {
    pub live: usize,
    /// Failed probes keyed by HTTP status
    pub http_errors: BTreeMap<u16, usize>,
    pub network_errors: usize,
}

impl ProbeBreakdown {
    pub fn from_records(records: &[ChannelRecord]) -> Self {
        let mut breakdown = Self::default();
        for record in records {
            match record.health() {
                HealthStatus::Live => breakdown.live += 1,
                HealthStatus::HttpError(code) => *breakdown.http_errors.entry(code).or_default() += 1,
                HealthStatus::NetworkError => breakdown.network_errors += 1,
                HealthStatus::Unknown => {}
            }
        }
        breakdown
    }

    pub fn tested(&self) -> usize {
        self.live + self.network_errors + self.http_errors.values().sum::<usize>()
    }
}

/// Report of one aggregation run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    pub sources: Vec<SourceReport>,
    pub curated: usize,
    pub total_collected: usize,
    pub duplicates_removed: usize,
    pub unique: usize,
    pub with_logo: usize,
    pub without_logo: usize,
    pub probes: ProbeBreakdown,
    pub live_percentage: f64,
    pub categories: BTreeMap<String, usize>,
}

impl RunSummary {
    pub fn new(generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            sources: Vec::new(),
            curated: 0,
            total_collected: 0,
            duplicates_removed: 0,
            unique: 0,
            with_logo: 0,
            without_logo: 0,
            probes: ProbeBreakdown::default(),
            live_percentage: 0.0,
            categories: BTreeMap::new(),
        }
    }

    pub fn failed_sources(&self) -> usize {
        self.sources
            .iter()
            .filter(|s| matches!(s.status, SourceStatus::Failed { .. }))
            .count()
    }

    pub fn record_unique(&mut self, unique: &[ChannelRecord], removed: usize) {
        self.duplicates_removed = removed;
        self.unique = unique.len();
        self.with_logo = unique.iter().filter(|r| r.has_logo()).count();
        self.without_logo = self.unique - self.with_logo;
    }

    pub fn record_probes(&mut self, checked: &[ChannelRecord]) {
        self.probes = ProbeBreakdown::from_records(checked);
        let tested = self.probes.tested();
        self.live_percentage = if tested == 0 {
            0.0
        } else {
            self.probes.live as f64 * 100.0 / tested as f64
        };
    }

    pub fn record_categories(&mut self, channels: &[ClassifiedChannel]) {
        self.categories.clear();
        for channel in channels {
            *self.categories.entry(channel.category.clone()).or_default() += 1;
        }
    }

    pub fn log(&self) {
        info!(
            "Sources: {} attempted, {} failed; {} curated entries",
            self.sources.len(),
            self.failed_sources(),
            self.curated
        );
        info!(
            "Collected {} channels, {} duplicates removed, {} unique ({} with logo, {} without)",
            self.total_collected, self.duplicates_removed, self.unique, self.with_logo, self.without_logo
        );
        info!(
            "Live: {}/{} ({:.1}%), network errors: {}, HTTP errors: {:?}",
            self.probes.live,
            self.probes.tested(),
            self.live_percentage,
            self.probes.network_errors,
            self.probes.http_errors
        );
        for (category, count) in &self.categories {
            info!("  {}: {}", category, count);
        }
    }

    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| AppError::serialization(e.to_string()))
    }

    pub async fn write_json(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(path, self.to_json()?).await?;
        info!("Run summary written to {}", path.display());
        Ok(())
    }
}
