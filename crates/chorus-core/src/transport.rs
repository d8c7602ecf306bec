use async_trait::async_trait;

use crate::error::Result;
use crate::record::{EntityKey, Record};

/// The only primitive in the client that goes over the network.
///
/// Implementations issue one request per call and report failures through
/// the error taxonomy: a missing target is [`Error::NotFound`], a
/// credentials problem is [`Error::Unauthorized`], everything else
/// (including timeouts) is [`Error::Transport`]. Retrying, rate limiting
/// and timeouts are the implementation's business, not the caller's.
///
/// [`Error::NotFound`]: crate::Error::NotFound
/// [`Error::Unauthorized`]: crate::Error::Unauthorized
/// [`Error::Transport`]: crate::Error::Transport
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, key: &EntityKey) -> Result<Record>;
}
