use std::fmt;

use crate::Identifier;

/// A successfully counted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub url: String,
    pub words: u64,
}

/// Why one item produced no word count. Each variant renders as the
/// diagnostic line printed in place of a count.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    #[error("Unable to connect to the hacker news API for item {id}, error: {cause}")]
    ItemUnreachable { id: Identifier, cause: String },
    #[error("Unable to decode hacker news item {id}, error: {cause}")]
    ItemDecode { id: Identifier, cause: String },
    #[error("{url} - Error unable to connect, {cause}")]
    DocumentUnreachable { url: String, cause: String },
    #[error("{url} - Error in word count")]
    WordCount { url: String },
    #[error("Item {id} - Error worker stopped without reporting")]
    Abandoned { id: Identifier },
}

/// The single result a worker delivers for its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemReport {
    pub id: Identifier,
    pub outcome: Result<WordCount, ItemError>,
}

impl ItemReport {
    pub fn counted(id: Identifier, url: impl Into<String>, words: u64) -> Self {
        Self {
            id,
            outcome: Ok(WordCount {
                url: url.into(),
                words,
            }),
        }
    }

    pub fn failed(id: Identifier, error: ItemError) -> Self {
        Self {
            id,
            outcome: Err(error),
        }
    }

    pub fn abandoned(id: Identifier) -> Self {
        Self::failed(id, ItemError::Abandoned { id })
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

impl fmt::Display for ItemReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(WordCount { url, words }) => write!(f, "{url} - {words} words"),
            Err(err) => write!(f, "{err}"),
        }
    }
}
