use chorus_models::{Activity, PresenceResponse, Status};
use chorus_util::Snowflake;

use super::{Member, User};
use crate::client::Client;
use crate::error::Result;
use crate::record::EntityKey;

#[derive(Debug, Clone)]
pub struct Presence {
    client: Client,
    guild_id: Snowflake,
    data: PresenceResponse,
}

impl Presence {
    pub fn new(client: Client, guild_id: Snowflake, data: PresenceResponse) -> Self {
        Self {
            client,
            guild_id,
            data,
        }
    }

    pub fn record(&self) -> &PresenceResponse {
        &self.data
    }

    pub fn guild_id(&self) -> Snowflake {
        self.guild_id
    }

    pub fn user_id(&self) -> Snowflake {
        self.data.user.id
    }

    pub fn status(&self) -> Status {
        self.data.status
    }

    pub fn activity(&self) -> Option<&Activity> {
        self.data.game.as_ref()
    }

    pub async fn user(&self) -> Result<User> {
        let data = self
            .client
            .resolver()
            .resolve(EntityKey::User(self.data.user.id))
            .await?;
        Ok(User::new(self.client.clone(), data))
    }

    pub async fn member(&self) -> Result<Member> {
        let data = self
            .client
            .resolver()
            .resolve(EntityKey::Member {
                guild_id: self.guild_id,
                user_id: self.data.user.id,
            })
            .await?;
        Ok(Member::new(self.client.clone(), self.guild_id, data))
    }
}
