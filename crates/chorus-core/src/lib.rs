//! Typed entities for a real-time chat API and lazy resolution of the
//! relationships between them.
//!
//! Payloads are decoded into response records (`chorus-models`), wrapped
//! into entities such as [`Member`] or [`Guild`], and related entities are
//! fetched on demand through a [`Store`] (checked first) and a
//! [`Transport`] (used on a miss).

pub mod client;
pub mod config;
pub mod entity;
pub mod error;
pub mod permissions;
pub mod record;
pub mod resolver;
pub mod store;
pub mod transport;

pub use chorus_models as models;
pub use chorus_util::Snowflake;

pub use client::Client;
pub use config::{ApiConfig, CacheConfig, ClientConfig, ConfigError};
pub use entity::{Guild, GuildEmoji, Member, Presence, Role, User, UserLike, VoiceState};
pub use error::{Error, Result};
pub use record::{EntityKey, EntityKind, FromRecord, Record};
pub use resolver::Resolver;
pub use store::{MemoryStore, Store};
pub use transport::Transport;

pub use tokio_util::sync::CancellationToken;
