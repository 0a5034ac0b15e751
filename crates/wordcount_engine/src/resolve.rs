use std::sync::Arc;

use pipeline_logging::pipeline_debug;
use wordcount_core::{decode_item, Endpoints, Identifier, ItemError};

use crate::fetch::{read_body, Fetcher};

/// Looks up the document URL an item links to.
#[derive(Clone)]
pub struct ItemResolver {
    fetcher: Arc<dyn Fetcher>,
    endpoints: Endpoints,
}

impl ItemResolver {
    pub fn new(fetcher: Arc<dyn Fetcher>, endpoints: Endpoints) -> Self {
        Self { fetcher, endpoints }
    }

    /// The item's `url`, empty when the item has none.
    pub async fn resolve(&self, id: Identifier) -> Result<String, ItemError> {
        let item_url = self.endpoints.item(id);
        pipeline_debug!("resolving item {} via {}", id, item_url);

        let connect_error = |cause: String| ItemError::ItemUnreachable { id, cause };
        let body = self
            .fetcher
            .open(item_url.as_str())
            .await
            .map_err(|err| connect_error(err.to_string()))?;
        let bytes = read_body(body)
            .await
            .map_err(|err| connect_error(err.to_string()))?;

        let item = decode_item(&bytes).map_err(|err| ItemError::ItemDecode {
            id,
            cause: err.to_string(),
        })?;
        Ok(item.into_url())
    }
}
