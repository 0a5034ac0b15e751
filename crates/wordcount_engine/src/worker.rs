use std::sync::Arc;

use pipeline_logging::{pipeline_debug, pipeline_error, pipeline_warn};
use tokio::sync::{mpsc, Semaphore};
use wordcount_core::{Identifier, ItemError, ItemReport, WordCount};

use crate::{ItemResolver, WordCounter};

/// Resolve one identifier and count the words of the document it links to.
pub async fn process_one(
    id: Identifier,
    resolver: &ItemResolver,
    counter: &WordCounter,
) -> ItemReport {
    let outcome = async {
        let url = resolver.resolve(id).await?;
        let words = counter.count_words(&url).await?;
        Ok::<_, ItemError>(WordCount { url, words })
    }
    .await;
    ItemReport { id, outcome }
}

/// Write half of the result channel for a single worker.
///
/// Delivers exactly one report: either the one passed to [`Reporter::deliver`],
/// or an abandoned report from `Drop` when the worker ends any other way.
pub(crate) struct Reporter {
    id: Identifier,
    tx: Option<mpsc::UnboundedSender<ItemReport>>,
}

impl Reporter {
    pub(crate) fn new(id: Identifier, tx: mpsc::UnboundedSender<ItemReport>) -> Self {
        Self { id, tx: Some(tx) }
    }

    pub(crate) fn deliver(mut self, report: ItemReport) {
        if let Some(tx) = self.tx.take() {
            if tx.send(report).is_err() {
                pipeline_debug!("receiver gone, dropping report for item {}", self.id);
            }
        }
    }
}

impl Drop for Reporter {
    fn drop(&mut self) {
        if let Some(tx) = self.tx.take() {
            pipeline_error!("worker for item {} ended without a result", self.id);
            let _ = tx.send(ItemReport::abandoned(self.id));
        }
    }
}

/// Shared, read-only collaborators handed to every worker.
pub(crate) struct WorkerContext {
    pub(crate) resolver: ItemResolver,
    pub(crate) counter: WordCounter,
    pub(crate) permits: Arc<Semaphore>,
}

pub(crate) fn spawn_worker(
    id: Identifier,
    context: Arc<WorkerContext>,
    reporter: Reporter,
) {
    tokio::spawn(async move {
        let Ok(_permit) = context.permits.clone().acquire_owned().await else {
            return;
        };
        let report = process_one(id, &context.resolver, &context.counter).await;
        if let Err(err) = &report.outcome {
            pipeline_warn!("item {} failed: {}", id, err);
        }
        reporter.deliver(report);
    });
}
