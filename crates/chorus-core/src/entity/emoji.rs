use chorus_models::EmojiResponse;
use chorus_util::Snowflake;
use chrono::{DateTime, Utc};
use futures_util::stream::{BoxStream, StreamExt};
use tokio_util::sync::CancellationToken;

use super::{Guild, Role, User};
use crate::client::Client;
use crate::error::Result;
use crate::record::EntityKey;

/// A custom emoji owned by a guild.
#[derive(Debug, Clone)]
pub struct GuildEmoji {
    client: Client,
    guild_id: Snowflake,
    data: EmojiResponse,
}

impl GuildEmoji {
    pub fn new(client: Client, guild_id: Snowflake, data: EmojiResponse) -> Self {
        Self {
            client,
            guild_id,
            data,
        }
    }

    pub fn record(&self) -> &EmojiResponse {
        &self.data
    }

    pub fn id(&self) -> Snowflake {
        self.data.id
    }

    pub fn guild_id(&self) -> Snowflake {
        self.guild_id
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    /// Roles allowed to use this emoji. Empty means everyone may.
    pub fn role_ids(&self) -> &[Snowflake] {
        &self.data.roles
    }

    /// The creator, when the payload included one.
    pub fn user(&self) -> Option<User> {
        self.data
            .user
            .clone()
            .map(|data| User::new(self.client.clone(), data))
    }

    pub fn requires_colons(&self) -> bool {
        self.data.require_colons
    }

    pub fn is_managed(&self) -> bool {
        self.data.managed
    }

    /// `<:name:id>`, the form used to embed the emoji in message content.
    pub fn as_format(&self) -> String {
        format!("<:{}:{}>", self.data.name, self.data.id)
    }

    pub fn image_url(&self) -> String {
        format!("{}/emojis/{}.png", self.client.cdn_url(), self.data.id)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.data.id.created_at()
    }

    pub async fn guild(&self) -> Result<Guild> {
        let data = self
            .client
            .resolver()
            .resolve(EntityKey::Guild(self.guild_id))
            .await?;
        Ok(Guild::new(self.client.clone(), data))
    }

    /// The whitelisted roles, fetched one at a time as the stream is polled.
    pub fn roles(&self) -> BoxStream<'static, Result<Role>> {
        let client = self.client.clone();
        let guild_id = self.guild_id;
        self.client
            .resolver()
            .resolve_each(self.role_keys())
            .map(move |res| res.map(|data| Role::new(client.clone(), guild_id, data)))
            .boxed()
    }

    pub fn roles_until(&self, cancel: CancellationToken) -> BoxStream<'static, Result<Role>> {
        let client = self.client.clone();
        let guild_id = self.guild_id;
        self.client
            .resolver()
            .resolve_each_until(self.role_keys(), cancel)
            .map(move |res| res.map(|data| Role::new(client.clone(), guild_id, data)))
            .boxed()
    }

    fn role_keys(&self) -> Vec<EntityKey> {
        self.data
            .roles
            .iter()
            .map(|&role_id| EntityKey::Role {
                guild_id: self.guild_id,
                role_id,
            })
            .collect()
    }
}
