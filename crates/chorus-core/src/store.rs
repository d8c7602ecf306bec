use std::time::Duration;

use chorus_util::Snowflake;
use moka::sync::Cache;

use crate::config::CacheConfig;
use crate::record::{EntityKey, Record};

/// Already-known entities, looked up without I/O.
///
/// The store is written by whoever keeps it fresh (typically a gateway
/// event dispatcher); the resolver only reads. Implementations must be safe
/// to share across threads. A hit carries no freshness guarantee.
pub trait Store: Send + Sync {
    fn get(&self, key: &EntityKey) -> Option<Record>;
}

/// Bounded in-memory [`Store`] with optional time-to-live.
pub struct MemoryStore {
    records: Cache<EntityKey, Record>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_config(&CacheConfig::default())
    }

    pub fn with_config(config: &CacheConfig) -> Self {
        Self::build(config.max_capacity, config.time_to_live())
    }

    fn build(max_capacity: u64, time_to_live: Option<Duration>) -> Self {
        let mut builder = Cache::builder()
            .max_capacity(max_capacity)
            .support_invalidation_closures();
        if let Some(ttl) = time_to_live {
            builder = builder.time_to_live(ttl);
        }
        Self {
            records: builder.build(),
        }
    }

    /// Insert or overwrite the record stored under `key`.
    pub fn insert(&self, key: EntityKey, record: Record) {
        self.records.insert(key, record);
    }

    /// Insert a record under the key it derives for itself. Guild-scoped
    /// records without an embedded guild id need `guild_id`; returns the
    /// key used, or `None` if no key could be derived.
    pub fn put(&self, guild_id: Option<Snowflake>, record: Record) -> Option<EntityKey> {
        let Some(key) = record.key(guild_id) else {
            tracing::warn!(kind = %record.kind(), "record has no guild context, not stored");
            return None;
        };
        self.records.insert(key, record);
        Some(key)
    }

    pub fn remove(&self, key: &EntityKey) {
        self.records.invalidate(key);
    }

    /// Drop every entry scoped to `guild_id` (the guild itself included).
    pub fn remove_guild(&self, guild_id: Snowflake) {
        if let Err(e) = self
            .records
            .invalidate_entries_if(move |key, _| key.guild_id() == Some(guild_id))
        {
            tracing::warn!(%guild_id, error = %e, "failed to invalidate guild entries");
        }
    }

    pub fn clear(&self) {
        self.records.invalidate_all();
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &EntityKey) -> Option<Record> {
        self.records.get(key)
    }
}
