use chorus_models::{MemberResponse, Permissions};
use chorus_util::Snowflake;
use chrono::{DateTime, Utc};
use futures_util::stream::{BoxStream, StreamExt};
use tokio_util::sync::CancellationToken;

use super::{Guild, Presence, Role, User, UserLike, VoiceState};
use crate::client::Client;
use crate::error::Result;
use crate::permissions;
use crate::record::EntityKey;

/// A user as seen from inside one guild.
#[derive(Debug, Clone)]
pub struct Member {
    client: Client,
    guild_id: Snowflake,
    data: MemberResponse,
}

impl Member {
    pub fn new(client: Client, guild_id: Snowflake, data: MemberResponse) -> Self {
        Self {
            client,
            guild_id,
            data,
        }
    }

    pub fn record(&self) -> &MemberResponse {
        &self.data
    }

    pub fn id(&self) -> Snowflake {
        self.data.user.id
    }

    pub fn guild_id(&self) -> Snowflake {
        self.guild_id
    }

    pub fn username(&self) -> &str {
        &self.data.user.username
    }

    pub fn discriminator(&self) -> &str {
        &self.data.user.discriminator
    }

    /// The account behind this membership, from the embedded user object.
    pub fn user(&self) -> User {
        User::new(self.client.clone(), self.data.user.clone())
    }

    pub fn nickname(&self) -> Option<&str> {
        self.data.nickname.as_deref()
    }

    pub fn role_ids(&self) -> &[Snowflake] {
        &self.data.role_ids
    }

    pub fn joined_at(&self) -> DateTime<Utc> {
        self.data.joined_at
    }

    pub fn is_deafened(&self) -> bool {
        self.data.deafened
    }

    pub fn is_muted(&self) -> bool {
        self.data.muted
    }

    /// Name shown in the client: the nickname if set, otherwise the username.
    pub fn display_name(&self) -> &str {
        self.nickname().unwrap_or_else(|| self.username())
    }

    /// `<@!id>`, the mention form that renders the guild nickname.
    pub fn nickname_mention(&self) -> String {
        format!("<@!{}>", self.id())
    }

    pub async fn guild(&self) -> Result<Guild> {
        let data = self
            .client
            .resolver()
            .resolve(EntityKey::Guild(self.guild_id))
            .await?;
        Ok(Guild::new(self.client.clone(), data))
    }

    /// The member's roles, fetched one at a time as the stream is polled.
    pub fn roles(&self) -> BoxStream<'static, Result<Role>> {
        let client = self.client.clone();
        let guild_id = self.guild_id;
        self.client
            .resolver()
            .resolve_each(self.role_keys())
            .map(move |res| res.map(|data| Role::new(client.clone(), guild_id, data)))
            .boxed()
    }

    /// [`roles`](Self::roles), ending early once `cancel` fires.
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
            .role_ids
            .iter()
            .map(|&role_id| EntityKey::Role {
                guild_id: self.guild_id,
                role_id,
            })
            .collect()
    }

    pub async fn voice_state(&self) -> Result<VoiceState> {
        let data = self
            .client
            .resolver()
            .resolve(EntityKey::VoiceState {
                guild_id: self.guild_id,
                user_id: self.id(),
            })
            .await?;
        Ok(VoiceState::new(self.client.clone(), self.guild_id, data))
    }

    pub async fn presence(&self) -> Result<Presence> {
        let data = self
            .client
            .resolver()
            .resolve(EntityKey::Presence {
                guild_id: self.guild_id,
                user_id: self.id(),
            })
            .await?;
        Ok(Presence::new(self.client.clone(), self.guild_id, data))
    }

    /// Guild-level permissions: the everyone role plus every assigned role.
    /// The owner and administrators hold everything.
    pub async fn base_permissions(&self) -> Result<Permissions> {
        let guild = self.guild().await?;
        // Skips the role fetches; compute_base_permissions agrees.
        if guild.owner_id() == self.id() {
            return Ok(Permissions::all());
        }

        let mut granted = vec![guild.everyone_role().await?.permissions()];
        let mut roles = self.roles();
        while let Some(role) = roles.next().await {
            granted.push(role?.permissions());
        }
        Ok(permissions::compute_base_permissions(
            &granted,
            guild.owner_id(),
            self.id(),
        ))
    }
}

impl UserLike for Member {
    fn id(&self) -> Snowflake {
        Member::id(self)
    }

    fn username(&self) -> &str {
        Member::username(self)
    }

    fn discriminator(&self) -> &str {
        Member::discriminator(self)
    }
}
