#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chorus_core::models::{
    EmojiResponse, GuildResponse, MemberResponse, Permissions, PresenceResponse, RoleResponse,
    UserResponse, VoiceStateResponse,
};
use chorus_core::{Client, EntityKey, Error, MemoryStore, Record, Result, Snowflake, Store, Transport};
use serde_json::json;

pub const GUILD: Snowflake = Snowflake::new(100);
pub const OWNER: Snowflake = Snowflake::new(1);
pub const REX: Snowflake = Snowflake::new(42);

/// Store that fails the test if it is ever consulted.
pub struct PanicStore;

impl Store for PanicStore {
    fn get(&self, key: &EntityKey) -> Option<Record> {
        panic!("store consulted for {key}");
    }
}

/// Transport that fails the test if it is ever called.
pub struct PanicTransport;

#[async_trait]
impl Transport for PanicTransport {
    async fn fetch(&self, key: &EntityKey) -> Result<Record> {
        panic!("transport called for {key}");
    }
}

pub enum Canned {
    Found(Record),
    Unauthorized,
    Failing(u16),
}

/// Transport serving canned responses and recording every call.
#[derive(Default)]
pub struct CountingTransport {
    responses: Mutex<HashMap<EntityKey, Canned>>,
    calls: Mutex<Vec<EntityKey>>,
}

impl CountingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn serve(&self, key: EntityKey, record: impl Into<Record>) {
        self.responses
            .lock()
            .unwrap()
            .insert(key, Canned::Found(record.into()));
    }

    pub fn respond(&self, key: EntityKey, canned: Canned) {
        self.responses.lock().unwrap().insert(key, canned);
    }

    pub fn calls(&self) -> Vec<EntityKey> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for CountingTransport {
    async fn fetch(&self, key: &EntityKey) -> Result<Record> {
        self.calls.lock().unwrap().push(*key);
        // Yield once so callers really observe an asynchronous completion.
        tokio::task::yield_now().await;
        match self.responses.lock().unwrap().get(key) {
            Some(Canned::Found(record)) => Ok(record.clone()),
            Some(Canned::Unauthorized) => Err(Error::Unauthorized { key: *key }),
            Some(Canned::Failing(status)) => {
                Err(Error::transport_status(*status, format!("upstream returned {status}")))
            }
            None => Err(Error::NotFound { key: *key }),
        }
    }
}

pub fn panic_client() -> Client {
    Client::new(Arc::new(PanicStore), Arc::new(PanicTransport))
}

pub fn client_with(store: Arc<MemoryStore>, transport: Arc<CountingTransport>) -> Client {
    Client::new(store, transport)
}

pub fn user_record(id: Snowflake, username: &str) -> UserResponse {
    chorus_core::models::decode(json!({
        "id": id.as_string(),
        "username": username,
        "discriminator": "0007",
    }))
    .unwrap()
}

pub fn member_record(nick: Option<&str>, roles: &[u64]) -> MemberResponse {
    chorus_core::models::decode(json!({
        "user": { "id": REX.as_string(), "username": "rex", "discriminator": "0007" },
        "nick": nick,
        "roles": roles.iter().map(|r| r.to_string()).collect::<Vec<_>>(),
        "joined_at": "2017-03-14T09:26:53.589000+00:00",
        "deaf": false,
        "mute": false,
    }))
    .unwrap()
}

pub fn guild_record() -> GuildResponse {
    chorus_core::models::decode(json!({
        "id": GUILD.as_string(),
        "name": "Test Guild",
        "owner_id": OWNER.as_string(),
        "icon": "abc123",
    }))
    .unwrap()
}

pub fn role_record(id: u64, name: &str, permissions: Permissions) -> RoleResponse {
    chorus_core::models::decode(json!({
        "id": id.to_string(),
        "name": name,
        "color": 0x3498db,
        "hoist": false,
        "position": 1,
        "permissions": permissions.bits().to_string(),
        "managed": false,
        "mentionable": true,
    }))
    .unwrap()
}

pub fn emoji_record() -> EmojiResponse {
    chorus_core::models::decode_str(
        r#"{"id":"9","name":"pepe","roles":["1","2"],"require_colons":true,"managed":false}"#,
    )
    .unwrap()
}

pub fn voice_record() -> VoiceStateResponse {
    chorus_core::models::decode(json!({
        "guild_id": GUILD.as_string(),
        "channel_id": "555",
        "user_id": REX.as_string(),
        "session_id": "s-1",
        "deaf": false,
        "mute": false,
        "self_deaf": true,
        "self_mute": false,
        "suppress": false,
    }))
    .unwrap()
}

pub fn presence_record() -> PresenceResponse {
    chorus_core::models::decode(json!({
        "user": { "id": REX.as_string() },
        "guild_id": GUILD.as_string(),
        "status": "idle",
        "game": { "name": "chess", "type": 0 },
    }))
    .unwrap()
}

pub fn role_key(role_id: u64) -> EntityKey {
    EntityKey::Role {
        guild_id: GUILD,
        role_id: Snowflake::new(role_id),
    }
}
