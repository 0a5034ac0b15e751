//! Prints the word count of the documents linked from the current top stories.

use anyhow::Context;
use log::LevelFilter;
use pipeline_logging::{pipeline_info, LogDestination};
use wordcount_engine::{Coordinator, PipelineConfig};

fn main() -> anyhow::Result<()> {
    pipeline_logging::initialize(LevelFilter::Warn, LogDestination::Terminal);

    let config = PipelineConfig::default();
    println!("Getting the top {} items!", config.fan_out);

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    let outcome = Coordinator::new(config)
        .and_then(|coordinator| runtime.block_on(coordinator.run(|report| println!("{report}"))));

    match outcome {
        Ok(summary) => pipeline_info!(
            "{} of {} items counted",
            summary.succeeded,
            summary.expected
        ),
        // Fatal errors go to stdout; the exit code stays 0.
        Err(err) => println!("{err}"),
    }
    Ok(())
}
