use chorus_models::VoiceStateResponse;
use chorus_util::Snowflake;

use super::{Guild, Member, User};
use crate::client::Client;
use crate::error::Result;
use crate::record::EntityKey;

/// A user's connection to voice within a guild.
#[derive(Debug, Clone)]
pub struct VoiceState {
    client: Client,
    guild_id: Snowflake,
    data: VoiceStateResponse,
}

impl VoiceState {
    pub fn new(client: Client, guild_id: Snowflake, data: VoiceStateResponse) -> Self {
        Self {
            client,
            guild_id,
            data,
        }
    }

    pub fn record(&self) -> &VoiceStateResponse {
        &self.data
    }

    pub fn guild_id(&self) -> Snowflake {
        self.guild_id
    }

    pub fn user_id(&self) -> Snowflake {
        self.data.user_id
    }

    /// The voice channel, or `None` once the user has disconnected.
    pub fn channel_id(&self) -> Option<Snowflake> {
        self.data.channel_id
    }

    pub fn is_in_channel(&self) -> bool {
        self.data.channel_id.is_some()
    }

    pub fn session_id(&self) -> &str {
        &self.data.session_id
    }

    pub fn is_deafened(&self) -> bool {
        self.data.deafened
    }

    pub fn is_muted(&self) -> bool {
        self.data.muted
    }

    pub fn is_self_deafened(&self) -> bool {
        self.data.self_deafened
    }

    pub fn is_self_muted(&self) -> bool {
        self.data.self_muted
    }

    pub fn is_suppressed(&self) -> bool {
        self.data.suppress
    }

    pub async fn guild(&self) -> Result<Guild> {
        let data = self
            .client
            .resolver()
            .resolve(EntityKey::Guild(self.guild_id))
            .await?;
        Ok(Guild::new(self.client.clone(), data))
    }

    pub async fn member(&self) -> Result<Member> {
        let data = self
            .client
            .resolver()
            .resolve(EntityKey::Member {
                guild_id: self.guild_id,
                user_id: self.data.user_id,
            })
            .await?;
        Ok(Member::new(self.client.clone(), self.guild_id, data))
    }

    pub async fn user(&self) -> Result<User> {
        let data = self
            .client
            .resolver()
            .resolve(EntityKey::User(self.data.user_id))
            .await?;
        Ok(User::new(self.client.clone(), data))
    }
}
