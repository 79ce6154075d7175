//! End-to-end aggregation run: fetch, normalize, merge, deduplicate, verify,
//! classify and render.

use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::classification::Classifier;
use crate::config::Config;
use crate::errors::{AppResult, PipelineError};
use crate::ingestor::SourceFetcher;
use crate::models::ClassifiedChannel;
use crate::playlist::render_playlist;
use crate::sources::{curated_records, CuratedChannel, SourceRegistry};
use crate::utils::{HttpFetch, StandardHttpClient};

pub mod dedup;
pub mod health;
pub mod summary;

pub use dedup::{canonical_key, deduplicate, DedupOutcome};
pub use health::{HealthChecker, HttpStreamProber, StreamProbe};
pub use summary::{ProbeBreakdown, RunSummary, SourceReport, SourceStatus};

/// Everything a run produces
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub playlist: String,
    pub channels: Vec<ClassifiedChannel>,
    pub summary: RunSummary,
}

pub struct PlaylistPipeline {
    fetcher: SourceFetcher,
    health: HealthChecker,
    classifier: Classifier,
    target_regions: Vec<String>,
}

impl PlaylistPipeline {
    /// Pipeline with explicit download and probe implementations
    pub fn new(
        config: &Config,
        http: Arc<dyn HttpFetch>,
        probe: Arc<dyn StreamProbe>,
    ) -> AppResult<Self> {
        Ok(Self {
            fetcher: SourceFetcher::new(http, config.structured_feed.clone()),
            health: HealthChecker::new(
                probe,
                config.health_check.worker_count(),
                config.health_check.progress_interval,
            ),
            classifier: Classifier::builtin()?,
            target_regions: config.target_regions.clone(),
        })
    }

    /// Pipeline backed by real HTTP clients
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let http = StandardHttpClient::new(config.fetch.timeout, &config.fetch.user_agent)?;
        let probe = HttpStreamProber::new(config.health_check.timeout, &config.fetch.user_agent)?;
        Self::new(config, Arc::new(http), Arc::new(probe))
    }

    pub async fn run(
        &self,
        registry: &SourceRegistry,
        curated: &[CuratedChannel],
    ) -> AppResult<PipelineOutput> {
        let generated_at = Utc::now();
        let mut summary = RunSummary::new(generated_at);

        info!("Collecting channels");
        let mut collected = Vec::new();
        for descriptor in registry.active(&self.target_regions) {
            match self.fetcher.collect(descriptor).await {
                Ok(records) => {
                    info!("{}: {} channels", descriptor.name, records.len());
                    summary.sources.push(SourceReport::collected(descriptor, records.len()));
                    collected.extend(records);
                }
                Err(e) => {
                    warn!("Skipping source '{}': {}", descriptor.name, e);
                    summary.sources.push(SourceReport::failed(descriptor, &e));
                }
            }
        }

        if !curated.is_empty() {
            info!("Adding {} curated channels", curated.len());
        }
        collected.extend(curated_records(curated));
        summary.curated = curated.len();
        summary.total_collected = collected.len();
        info!("Total collected: {}", collected.len());

        let DedupOutcome { retained, removed } = deduplicate(collected);
        summary.record_unique(&retained, removed);

        if retained.is_empty() {
            return Err(PipelineError::EmptyAggregate {
                sources_attempted: summary.sources.len(),
                curated: curated.len(),
            }
            .into());
        }

        let checked = self.health.check_all(retained).await;
        summary.record_probes(&checked);

        let live: Vec<_> = checked.into_iter().filter(|r| r.health().is_live()).collect();
        let channels = self.classifier.order(live);
        summary.record_categories(&channels);

        let playlist = render_playlist(&channels, generated_at);
        info!("Rendered playlist with {} live channels", channels.len());

        Ok(PipelineOutput {
            playlist,
            channels,
            summary,
        })
    }
}
