//! Relationship resolution: store first, transport on a miss.
//!
//! Nothing here runs until polled. A single resolution is an `async fn`; a
//! multi-valued one is a [`Stream`] that resolves one key per poll, so a
//! consumer that stops early never causes the remaining keys to be fetched.
//! Dropping either one abandons it; only the request already in flight (if
//! any) is affected, and nothing is retried.
//!
//! Independent resolutions carry no ordering between each other. Two
//! relationships requested concurrently from the same entity may complete in
//! either order; only the elements of one stream are ordered.

use std::sync::Arc;

use futures_util::stream::{self, BoxStream, StreamExt};
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::record::{EntityKey, FromRecord};
use crate::store::Store;
use crate::transport::Transport;

#[derive(Clone)]
pub struct Resolver {
    store: Arc<dyn Store>,
    transport: Arc<dyn Transport>,
}

impl Resolver {
    pub fn new(store: Arc<dyn Store>, transport: Arc<dyn Transport>) -> Self {
        Self { store, transport }
    }

    /// Resolve one entity. A store hit completes without touching the
    /// transport; a miss issues exactly one fetch.
    pub async fn resolve<R: FromRecord>(&self, key: EntityKey) -> Result<R> {
        // The store lookup finishes before any await point.
        if let Some(record) = self.store.get(&key) {
            tracing::trace!(%key, "store hit");
            return Ok(R::from_record(record)?);
        }

        tracing::debug!(%key, "store miss, fetching");
        let record = self.transport.fetch(&key).await.map_err(|e| {
            tracing::debug!(%key, error = %e, "fetch failed");
            e
        })?;
        Ok(R::from_record(record)?)
    }

    /// Resolve `keys` in order, one per poll. The first failure is yielded
    /// and ends the stream; elements already yielded stay valid.
    pub fn resolve_each<R>(&self, keys: Vec<EntityKey>) -> BoxStream<'static, Result<R>>
    where
        R: FromRecord + Send + 'static,
    {
        let state = Some((self.clone(), keys.into_iter()));
        stream::unfold(state, |state| async move {
            let (resolver, mut keys) = state?;
            let key = keys.next()?;
            match resolver.resolve::<R>(key).await {
                Ok(item) => Some((Ok(item), Some((resolver, keys)))),
                Err(e) => Some((Err(e), None)),
            }
        })
        .boxed()
    }

    /// Like [`resolve_each`](Self::resolve_each), but the stream ends
    /// cleanly as soon as `cancel` fires. A resolution in flight at that
    /// moment is abandoned and no later key is fetched.
    pub fn resolve_each_until<R>(
        &self,
        keys: Vec<EntityKey>,
        cancel: CancellationToken,
    ) -> BoxStream<'static, Result<R>>
    where
        R: FromRecord + Send + 'static,
    {
        self.resolve_each(keys)
            .take_until(cancel.cancelled_owned())
            .boxed()
    }
}
