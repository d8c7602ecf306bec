use chorus_models::GuildResponse;
use chorus_util::Snowflake;
use chrono::{DateTime, Utc};

use super::{GuildEmoji, Member, Role};
use crate::client::Client;
use crate::error::Result;
use crate::record::EntityKey;

#[derive(Debug, Clone)]
pub struct Guild {
    client: Client,
    data: GuildResponse,
}

impl Guild {
    pub fn new(client: Client, data: GuildResponse) -> Self {
        Self { client, data }
    }

    pub fn record(&self) -> &GuildResponse {
        &self.data
    }

    pub fn id(&self) -> Snowflake {
        self.data.id
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn icon_hash(&self) -> Option<&str> {
        self.data.icon_hash.as_deref()
    }

    pub fn icon_url(&self) -> Option<String> {
        let hash = self.icon_hash()?;
        Some(format!(
            "{}/icons/{}/{}.png",
            self.client.cdn_url(),
            self.data.id,
            hash
        ))
    }

    pub fn owner_id(&self) -> Snowflake {
        self.data.owner_id
    }

    pub fn region(&self) -> Option<&str> {
        self.data.region.as_deref()
    }

    pub fn afk_channel_id(&self) -> Option<Snowflake> {
        self.data.afk_channel_id
    }

    /// Approximate member count, only sent with some payloads.
    pub fn member_count(&self) -> Option<u64> {
        self.data.member_count
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.data.id.created_at()
    }

    pub async fn owner(&self) -> Result<Member> {
        self.member(self.data.owner_id).await
    }

    pub async fn member(&self, user_id: Snowflake) -> Result<Member> {
        let data = self
            .client
            .resolver()
            .resolve(EntityKey::Member {
                guild_id: self.data.id,
                user_id,
            })
            .await?;
        Ok(Member::new(self.client.clone(), self.data.id, data))
    }

    pub async fn role(&self, role_id: Snowflake) -> Result<Role> {
        let data = self
            .client
            .resolver()
            .resolve(EntityKey::Role {
                guild_id: self.data.id,
                role_id,
            })
            .await?;
        Ok(Role::new(self.client.clone(), self.data.id, data))
    }

    /// The implicit role every member holds; it shares the guild's id.
    pub async fn everyone_role(&self) -> Result<Role> {
        self.role(self.data.id).await
    }

    pub async fn emoji(&self, emoji_id: Snowflake) -> Result<GuildEmoji> {
        let data = self
            .client
            .resolver()
            .resolve(EntityKey::Emoji {
                guild_id: self.data.id,
                emoji_id,
            })
            .await?;
        Ok(GuildEmoji::new(self.client.clone(), self.data.id, data))
    }
}
