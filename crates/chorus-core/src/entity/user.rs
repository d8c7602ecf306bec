use chorus_models::UserResponse;
use chorus_util::Snowflake;
use chrono::{DateTime, Utc};

use super::UserLike;
use crate::client::Client;

#[derive(Debug, Clone)]
pub struct User {
    client: Client,
    data: UserResponse,
}

impl User {
    pub fn new(client: Client, data: UserResponse) -> Self {
        Self { client, data }
    }

    pub fn record(&self) -> &UserResponse {
        &self.data
    }

    pub fn id(&self) -> Snowflake {
        self.data.id
    }

    pub fn username(&self) -> &str {
        &self.data.username
    }

    pub fn discriminator(&self) -> &str {
        &self.data.discriminator
    }

    pub fn avatar_hash(&self) -> Option<&str> {
        self.data.avatar_hash.as_deref()
    }

    pub fn is_bot(&self) -> bool {
        self.data.bot
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.data.id.created_at()
    }

    /// CDN URL of the custom avatar, if one is set. Animated avatars are
    /// served as GIF.
    pub fn avatar_url(&self) -> Option<String> {
        let hash = self.avatar_hash()?;
        let ext = if hash.starts_with("a_") { "gif" } else { "png" };
        Some(format!(
            "{}/avatars/{}/{}.{}",
            self.client.cdn_url(),
            self.data.id,
            hash,
            ext
        ))
    }

    /// CDN URL of the placeholder avatar shown when none is set. Accounts
    /// without a discriminator pick one of six placeholders from their id's
    /// timestamp bits; legacy accounts use `discriminator % 5`.
    pub fn default_avatar_url(&self) -> String {
        let index = match self.data.discriminator.as_str() {
            "" | "0" => (self.data.id.get() >> 22) % 6,
            disc => disc.parse::<u64>().unwrap_or(0) % 5,
        };
        format!("{}/embed/avatars/{}.png", self.client.cdn_url(), index)
    }
}

impl UserLike for User {
    fn id(&self) -> Snowflake {
        User::id(self)
    }

    fn username(&self) -> &str {
        User::username(self)
    }

    fn discriminator(&self) -> &str {
        User::discriminator(self)
    }
}
