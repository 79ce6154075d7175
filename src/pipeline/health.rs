//! Concurrent liveness verification of stream endpoints

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, warn};

use crate::errors::AppResult;
use crate::models::{ChannelRecord, HealthStatus};
use crate::utils::UrlUtils;

/// Single liveness check of one stream URL. Implementations never retry.
#[async_trait]
pub trait StreamProbe: Send + Sync {
    async fn probe(&self, url: &str) -> HealthStatus;
}

/// Probe that issues one GET and reads only the first body chunk
pub struct HttpStreamProber {
    client: Client,
}

impl HttpStreamProber {
    pub fn new(timeout: Duration, user_agent: &str) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl StreamProbe for HttpStreamProber {
    async fn probe(&self, url: &str) -> HealthStatus {
        let mut response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!(
                    "Probe failed for {}: {}",
                    UrlUtils::obfuscate_credentials(url),
                    UrlUtils::obfuscate_credentials(&e.to_string())
                );
                return HealthStatus::NetworkError;
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            return HealthStatus::HttpError(status.as_u16());
        }

        // Dropping the response after the first data closes the connection
        loop {
            match response.chunk().await {
                Ok(Some(chunk)) if !chunk.is_empty() => return HealthStatus::Live,
                Ok(Some(_)) => continue,
                Ok(None) => return HealthStatus::HttpError(status.as_u16()),
                Err(e) => {
                    debug!(
                        "Probe body read failed for {}: {}",
                        UrlUtils::obfuscate_credentials(url),
                        e
                    );
                    return HealthStatus::NetworkError;
                }
            }
        }
    }
}

/// Fixed-size worker pool that probes every record exactly once
pub struct HealthChecker {
    probe: Arc<dyn StreamProbe>,
    workers: usize,
    progress_interval: usize,
}

impl HealthChecker {
    pub fn new(probe: Arc<dyn StreamProbe>, workers: usize, progress_interval: usize) -> Self {
        Self {
            probe,
            workers: workers.max(1),
            progress_interval: progress_interval.max(1),
        }
    }

    /// Probe all records concurrently and return them in their input order
    /// with a terminal health status set.
    pub async fn check_all(&self, mut records: Vec<ChannelRecord>) -> Vec<ChannelRecord> {
        let total = records.len();
        if total == 0 {
            return records;
        }

        let workers = self.workers.min(total);
        info!("Testing {} channels with {} workers", total, workers);

        let (job_tx, job_rx) = mpsc::unbounded_channel::<(usize, String)>();
        for (index, record) in records.iter().enumerate() {
            // receiver is alive until the workers below finish
            let _ = job_tx.send((index, record.url.clone()));
        }
        drop(job_tx);

        let job_rx = Arc::new(Mutex::new(job_rx));
        let (result_tx, mut result_rx) = mpsc::unbounded_channel::<(usize, HealthStatus)>();

        let handles: Vec<_> = (0..workers)
            .map(|worker_id| {
                let probe = Arc::clone(&self.probe);
                let job_rx = Arc::clone(&job_rx);
                let result_tx = result_tx.clone();
                tokio::spawn(async move {
                    loop {
                        let job = job_rx.lock().await.recv().await;
                        let Some((index, url)) = job else {
                            break;
                        };
                        let status = probe.probe(&url).await;
                        if result_tx.send((index, status)).is_err() {
                            break;
                        }
                    }
                    debug!("Probe worker {} finished", worker_id);
                })
            })
            .collect();
        drop(result_tx);

        let mut statuses: Vec<Option<HealthStatus>> = vec![None; total];
        let mut completed = 0usize;
        let mut live = 0usize;

        while let Some((index, status)) = result_rx.recv().await {
            statuses[index] = Some(status);
            completed += 1;
            if status.is_live() {
                live += 1;
            }
            if completed % self.progress_interval == 0 || completed == total {
                info!("Progress: {}/{} ({} OK)", completed, total, live);
            }
        }

        for handle in handles {
            if let Err(e) = handle.await {
                warn!("Probe worker terminated abnormally: {}", e);
            }
        }

        for (record, status) in records.iter_mut().zip(statuses) {
            let status = status.unwrap_or_else(|| {
                warn!("No probe result for '{}', marking as network error", record.name);
                HealthStatus::NetworkError
            });
            record.set_health(status);
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedProbe {
        outcomes: HashMap<String, HealthStatus>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl StreamProbe for ScriptedProbe {
        async fn probe(&self, url: &str) -> HealthStatus {
            self.calls.fetch_add(1, Ordering::SeqCst);
            // later urls finish first so completion order differs from input order
            let delay = 20u64.saturating_sub(url.len() as u64 % 20);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            self.outcomes
                .get(url)
                .copied()
                .unwrap_or(HealthStatus::NetworkError)
        }
    }

    fn record(i: usize) -> ChannelRecord {
        let url = format!("http://a.test/{}", "x".repeat(i));
        ChannelRecord::new(format!("Channel {i}"), url, "S", "US", "", "", "#EXTINF:-1,x")
    }

    #[tokio::test]
    async fn test_check_all_preserves_input_order() {
        let records: Vec<_> = (0..12).map(record).collect();
        let outcomes = records
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let status = match i % 3 {
                    0 => HealthStatus::Live,
                    1 => HealthStatus::HttpError(404),
                    _ => HealthStatus::NetworkError,
                };
                (r.url.clone(), status)
            })
            .collect();
        let probe = Arc::new(ScriptedProbe {
            outcomes,
            calls: AtomicUsize::new(0),
        });

        let checker = HealthChecker::new(probe.clone(), 4, 5);
        let checked = checker.check_all(records.clone()).await;

        assert_eq!(probe.calls.load(Ordering::SeqCst), 12);
        let names: Vec<_> = checked.iter().map(|r| r.name.clone()).collect();
        let expected: Vec<_> = records.iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, expected);

        for (i, record) in checked.iter().enumerate() {
            let expected = match i % 3 {
                0 => HealthStatus::Live,
                1 => HealthStatus::HttpError(404),
                _ => HealthStatus::NetworkError,
            };
            assert_eq!(record.health(), expected);
        }
    }

    #[tokio::test]
    async fn test_check_all_empty() {
        let probe = Arc::new(ScriptedProbe {
            outcomes: HashMap::new(),
            calls: AtomicUsize::new(0),
        });
        let checker = HealthChecker::new(probe, 8, 100);
        assert!(checker.check_all(Vec::new()).await.is_empty());
    }
}
