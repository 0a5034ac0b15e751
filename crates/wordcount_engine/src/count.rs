use std::sync::Arc;

use futures_util::StreamExt;
use pipeline_logging::{pipeline_debug, pipeline_warn};
use wordcount_core::{parallel_count_words, ItemError, WordTally};

use crate::fetch::{BodyStream, Fetcher};
use crate::CountMode;

/// Fetches a document and counts its whitespace-delimited words.
#[derive(Clone)]
pub struct WordCounter {
    fetcher: Arc<dyn Fetcher>,
    mode: CountMode,
}

impl WordCounter {
    pub fn with_mode(fetcher: Arc<dyn Fetcher>, mode: CountMode) -> Self {
        Self { fetcher, mode }
    }

    /// An empty or unparsable `url` fails like an unreachable one. A read
    /// failure mid-stream discards the partial count.
    pub async fn count_words(&self, url: &str) -> Result<u64, ItemError> {
        let body = self
            .fetcher
            .open(url)
            .await
            .map_err(|err| ItemError::DocumentUnreachable {
                url: url.to_string(),
                cause: err.to_string(),
            })?;

        match self.mode {
            CountMode::Streaming => stream_count(url, body).await,
            CountMode::Parallel { chunk_size } => parallel_count(url, body, chunk_size).await,
        }
    }
}

async fn stream_count(url: &str, mut body: BodyStream) -> Result<u64, ItemError> {
    let mut tally = WordTally::new();
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|err| {
            pipeline_debug!("word count stream failed after {} words: {}", tally.words(), err);
            word_count_error(url)
        })?;
        tally.feed(&chunk);
    }
    Ok(tally.finish())
}

async fn parallel_count(
    url: &str,
    mut body: BodyStream,
    chunk_size: usize,
) -> Result<u64, ItemError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|err| {
            pipeline_debug!("body read failed after {} bytes: {}", bytes.len(), err);
            word_count_error(url)
        })?;
        bytes.extend_from_slice(&chunk);
    }

    // CPU-bound, so it runs on the blocking pool.
    tokio::task::spawn_blocking(move || parallel_count_words(&bytes, chunk_size))
        .await
        .map_err(|err| {
            pipeline_warn!("parallel count for {} did not complete: {}", url, err);
            word_count_error(url)
        })
}

fn word_count_error(url: &str) -> ItemError {
    ItemError::WordCount {
        url: url.to_string(),
    }
}
