use std::sync::Arc;

use pipeline_logging::{pipeline_debug, pipeline_info};
use tokio::sync::{mpsc, Semaphore};
use wordcount_core::{decode_listing, select_batch, FanIn, Identifier, ItemReport, RunSummary};

use crate::fetch::{read_body, Fetcher, ReqwestFetcher};
use crate::worker::{spawn_worker, Reporter, WorkerContext};
use crate::{FatalError, ItemResolver, OutputOrder, PipelineConfig, WordCounter};

/// Fetches the listing, fans out one worker per selected identifier and
/// collects exactly one report from each.
pub struct Coordinator {
    config: PipelineConfig,
    fetcher: Arc<dyn Fetcher>,
}

impl Coordinator {
    pub fn new(config: PipelineConfig) -> Result<Self, FatalError> {
        let fetcher = ReqwestFetcher::new(config.fetch.clone()).map_err(FatalError::Client)?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    pub fn with_fetcher(config: PipelineConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        Self { config, fetcher }
    }

    /// Run the pipeline once, passing every report to `on_report`.
    ///
    /// Returns after the last expected report has been handed over. Workers
    /// are not joined; each one has finished its work once it has reported.
    pub async fn run<F>(&self, mut on_report: F) -> Result<RunSummary, FatalError>
    where
        F: FnMut(&ItemReport),
    {
        let listing = self.fetch_listing().await?;
        let batch = select_batch(&listing, self.config.fan_out, self.config.short_listing)?;
        pipeline_info!(
            "listing has {} identifiers, processing {}",
            listing.len(),
            batch.len()
        );

        let mut reports = self.fan_out(batch);
        let mut fan_in = FanIn::new(batch.len());
        while !fan_in.is_complete() {
            let Some(report) = reports.recv().await else {
                return Err(FatalError::ResultsLost {
                    received: fan_in.received(),
                    expected: fan_in.expected(),
                });
            };
            pipeline_debug!(
                "report for item {} received, {} outstanding",
                report.id,
                fan_in.remaining() - 1
            );
            if self.config.order == OutputOrder::Arrival {
                on_report(&report);
            }
            fan_in.accept(report);
        }

        let summary = fan_in.summary();
        if self.config.order == OutputOrder::ById {
            fan_in.into_sorted().iter().for_each(&mut on_report);
        }
        pipeline_info!(
            "run finished: {} succeeded, {} failed",
            summary.succeeded,
            summary.failed
        );
        Ok(summary)
    }

    /// Run the pipeline once and return every report line, in the configured order.
    pub async fn collect_lines(&self) -> Result<Vec<String>, FatalError> {
        let mut lines = Vec::with_capacity(self.config.fan_out);
        self.run(|report| lines.push(report.to_string())).await?;
        Ok(lines)
    }

    async fn fetch_listing(&self) -> Result<Vec<Identifier>, FatalError> {
        let url = self.config.endpoints.top_stories();
        let body = self
            .fetcher
            .open(url.as_str())
            .await
            .map_err(FatalError::ListingUnreachable)?;
        let bytes = read_body(body)
            .await
            .map_err(FatalError::ListingUnreachable)?;
        Ok(decode_listing(&bytes)?)
    }

    /// Spawn one worker per identifier, all writing into the returned channel.
    fn fan_out(&self, batch: &[Identifier]) -> mpsc::UnboundedReceiver<ItemReport> {
        let (tx, rx) = mpsc::unbounded_channel();
        let context = Arc::new(WorkerContext {
            resolver: ItemResolver::new(self.fetcher.clone(), self.config.endpoints.clone()),
            counter: WordCounter::with_mode(self.fetcher.clone(), self.config.count_mode),
            permits: Arc::new(Semaphore::new(self.config.concurrency.max(1))),
        });

        for &id in batch {
            spawn_worker(id, context.clone(), Reporter::new(id, tx.clone()));
        }
        pipeline_debug!("spawned {} workers", batch.len());
        rx
    }
}
