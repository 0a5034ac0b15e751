use std::fmt;

use wordcount_core::{DecodeError, ShortListingError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub url: String,
    pub kind: FailureKind,
    pub message: String,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.url.is_empty() {
            write!(f, "{}: {}", self.kind, self.message)
        } else {
            write!(f, "{} - {}: {}", self.url, self.kind, self.message)
        }
    }
}

impl std::error::Error for FetchError {}

impl FetchError {
    pub(crate) fn new(url: impl Into<String>, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    /// The connection broke while the body was being read.
    Body,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::Body => write!(f, "body read error"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Errors that stop a whole run. No item output is produced after one of these.
#[derive(Debug, thiserror::Error)]
pub enum FatalError {
    #[error("Unable to build the http client: {0}")]
    Client(FetchError),
    #[error("Unable to connect to the hacker news API: {0}")]
    ListingUnreachable(FetchError),
    #[error("Unable to read the hacker news listing: {0}")]
    ListingDecode(#[from] DecodeError),
    #[error("Not enough hacker news items: {0}")]
    ShortListing(#[from] ShortListingError),
    #[error("Result channel closed after {received} of {expected} results")]
    ResultsLost { received: usize, expected: usize },
}
