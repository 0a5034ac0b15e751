use crate::Identifier;

/// What to do when the listing holds fewer identifiers than the fan-out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShortListing {
    /// Abort the run before any item is fetched.
    #[default]
    Fail,
    /// Process every identifier that is available.
    Clamp,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("listing returned {available} identifiers, {required} required")]
pub struct ShortListingError {
    pub available: usize,
    pub required: usize,
}

/// The leading `fan_out` identifiers of the listing, in listing order.
pub fn select_batch(
    ids: &[Identifier],
    fan_out: usize,
    policy: ShortListing,
) -> Result<&[Identifier], ShortListingError> {
    if ids.len() >= fan_out {
        return Ok(&ids[..fan_out]);
    }
    match policy {
        ShortListing::Clamp => Ok(ids),
        ShortListing::Fail => Err(ShortListingError {
            available: ids.len(),
            required: fan_out,
        }),
    }
}
