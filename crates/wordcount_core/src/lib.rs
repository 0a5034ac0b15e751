//! Word-count core: pure domain types, decoding and fan-in state. No I/O.
mod batch;
mod decode;
mod endpoints;
mod fan_in;
mod report;
mod tally;

pub use batch::{select_batch, ShortListing, ShortListingError};
pub use decode::{decode_item, decode_listing, DecodeError, Item};
pub use endpoints::{Endpoints, HACKER_NEWS_API_BASE};
pub use fan_in::{FanIn, RunSummary};
pub use report::{ItemError, ItemReport, WordCount};
pub use tally::{parallel_count_words, WordTally, DEFAULT_PARALLEL_CHUNK};

/// Integer key naming a remote item in the listing.
pub type Identifier = u64;
