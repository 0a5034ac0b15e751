use serde::Deserialize;

use crate::Identifier;

/// Metadata record for one identifier. Only the linked document is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub url: Option<String>,
}

impl Item {
    /// The linked document URL, empty when the item has none.
    pub fn into_url(self) -> String {
        self.url.unwrap_or_default()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid listing: {0}")]
    Listing(String),
    #[error("invalid item: {0}")]
    Item(String),
}

/// Decode the listing body: a top-level JSON array of identifiers.
pub fn decode_listing(bytes: &[u8]) -> Result<Vec<Identifier>, DecodeError> {
    serde_json::from_slice(bytes).map_err(|err| DecodeError::Listing(err.to_string()))
}

/// Decode an item body. A missing or null `url` is not an error; a body that is
/// not a JSON object (the API answers `null` for unknown ids) is.
pub fn decode_item(bytes: &[u8]) -> Result<Item, DecodeError> {
    serde_json::from_slice(bytes).map_err(|err| DecodeError::Item(err.to_string()))
}
