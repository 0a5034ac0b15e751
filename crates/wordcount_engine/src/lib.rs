//! Word-count engine: remote fetching and the fan-out/fan-in pipeline.
mod config;
mod coordinator;
mod count;
mod fetch;
mod resolve;
mod types;
mod worker;

pub use config::{CountMode, OutputOrder, PipelineConfig, DEFAULT_FAN_OUT};
pub use coordinator::Coordinator;
pub use count::WordCounter;
pub use fetch::{read_body, BodyStream, FetchSettings, Fetcher, ReqwestFetcher};
pub use resolve::ItemResolver;
pub use types::{FailureKind, FatalError, FetchError};
pub use worker::process_one;

pub use wordcount_core::{
    Endpoints, Identifier, ItemError, ItemReport, RunSummary, ShortListing, WordCount,
    DEFAULT_PARALLEL_CHUNK,
};
