use chorus_models::{Permissions, RoleResponse};
use chorus_util::Snowflake;
use chrono::{DateTime, Utc};

use super::Guild;
use crate::client::Client;
use crate::error::Result;
use crate::record::EntityKey;

#[derive(Debug, Clone)]
pub struct Role {
    client: Client,
    guild_id: Snowflake,
    data: RoleResponse,
}

impl Role {
    pub fn new(client: Client, guild_id: Snowflake, data: RoleResponse) -> Self {
        Self {
            client,
            guild_id,
            data,
        }
    }

    pub fn record(&self) -> &RoleResponse {
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

    /// RGB color as an integer; zero means "no color".
    pub fn color(&self) -> u32 {
        self.data.color
    }

    pub fn color_hex(&self) -> String {
        format!("#{:06x}", self.data.color & 0x00ff_ffff)
    }

    pub fn is_hoisted(&self) -> bool {
        self.data.hoisted
    }

    pub fn position(&self) -> i32 {
        self.data.position
    }

    pub fn permissions(&self) -> Permissions {
        self.data.permissions
    }

    pub fn is_managed(&self) -> bool {
        self.data.managed
    }

    pub fn is_mentionable(&self) -> bool {
        self.data.mentionable
    }

    pub fn is_everyone(&self) -> bool {
        self.data.id == self.guild_id
    }

    pub fn mention(&self) -> String {
        if self.is_everyone() {
            "@everyone".to_string()
        } else {
            format!("<@&{}>", self.data.id)
        }
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
}
