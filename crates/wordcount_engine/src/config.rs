use wordcount_core::{Endpoints, ShortListing};

use crate::FetchSettings;

/// Number of listing entries processed per run.
pub const DEFAULT_FAN_OUT: usize = 20;

/// How report lines reach the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputOrder {
    /// Hand each report over as soon as it is read from the channel.
    #[default]
    Arrival,
    /// Collect every report, then hand them over sorted by identifier.
    ById,
}

/// How a worker counts the words of its document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountMode {
    /// Count chunks as they arrive, never holding the whole body.
    #[default]
    Streaming,
    /// Buffer the body, then count it with recursive splits on the rayon pool.
    Parallel { chunk_size: usize },
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub endpoints: Endpoints,
    /// Leading listing entries to process, one worker each.
    pub fan_out: usize,
    /// Workers allowed to run at once. Values below 1 are treated as 1.
    pub concurrency: usize,
    pub short_listing: ShortListing,
    pub order: OutputOrder,
    pub count_mode: CountMode,
    pub fetch: FetchSettings,
}

impl PipelineConfig {
    pub fn with_endpoints(endpoints: Endpoints) -> Self {
        Self {
            endpoints,
            ..Self::default()
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            fan_out: DEFAULT_FAN_OUT,
            concurrency: DEFAULT_FAN_OUT,
            short_listing: ShortListing::default(),
            order: OutputOrder::default(),
            count_mode: CountMode::default(),
            fetch: FetchSettings::default(),
        }
    }
}
