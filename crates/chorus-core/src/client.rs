use std::fmt;
use std::sync::Arc;

use chorus_util::Snowflake;

use crate::config::ApiConfig;
use crate::entity::{Guild, GuildEmoji, Member, Role, User};
use crate::error::Result;
use crate::record::EntityKey;
use crate::resolver::Resolver;
use crate::store::Store;
use crate::transport::Transport;

/// Shared handle every entity carries to reach its collaborators.
///
/// Cloning is cheap. Building one performs no I/O.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    resolver: Resolver,
    cdn_url: String,
}

impl Client {
    pub fn new(store: Arc<dyn Store>, transport: Arc<dyn Transport>) -> Self {
        Self::with_api_config(store, transport, &ApiConfig::default())
    }

    pub fn with_api_config(
        store: Arc<dyn Store>,
        transport: Arc<dyn Transport>,
        api: &ApiConfig,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                resolver: Resolver::new(store, transport),
                cdn_url: api.cdn_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.inner.resolver
    }

    pub(crate) fn cdn_url(&self) -> &str {
        &self.inner.cdn_url
    }

    pub async fn guild(&self, guild_id: Snowflake) -> Result<Guild> {
        let data = self.resolver().resolve(EntityKey::Guild(guild_id)).await?;
        Ok(Guild::new(self.clone(), data))
    }

    pub async fn member(&self, guild_id: Snowflake, user_id: Snowflake) -> Result<Member> {
        let data = self
            .resolver()
            .resolve(EntityKey::Member { guild_id, user_id })
            .await?;
        Ok(Member::new(self.clone(), guild_id, data))
    }

    pub async fn role(&self, guild_id: Snowflake, role_id: Snowflake) -> Result<Role> {
        let data = self
            .resolver()
            .resolve(EntityKey::Role { guild_id, role_id })
            .await?;
        Ok(Role::new(self.clone(), guild_id, data))
    }

    pub async fn emoji(&self, guild_id: Snowflake, emoji_id: Snowflake) -> Result<GuildEmoji> {
        let data = self
            .resolver()
            .resolve(EntityKey::Emoji { guild_id, emoji_id })
            .await?;
        Ok(GuildEmoji::new(self.clone(), guild_id, data))
    }

    pub async fn user(&self, user_id: Snowflake) -> Result<User> {
        let data = self.resolver().resolve(EntityKey::User(user_id)).await?;
        Ok(User::new(self.clone(), data))
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("cdn_url", &self.inner.cdn_url)
            .finish_non_exhaustive()
    }
}
