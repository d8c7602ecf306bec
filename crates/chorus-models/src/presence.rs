use serde::{Deserialize, Serialize};

use crate::{Snowflake, WireRecord};

/// Presence payloads carry only the user's id; the rest of the user object
/// is sent separately, if at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialUser {
    pub id: Snowflake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "online")]
    Online,
    #[serde(rename = "idle")]
    Idle,
    #[serde(rename = "dnd")]
    DoNotDisturb,
    #[serde(rename = "invisible")]
    Invisible,
    #[serde(rename = "offline")]
    Offline,
    /// Any status this client does not recognise. Writes back as
    /// `"unknown"`; the original string is not kept.
    #[serde(rename = "unknown")]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityType {
    Playing,
    Streaming,
    Listening,
    Watching,
    Other(u8),
}

impl From<u8> for ActivityType {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Playing,
            1 => Self::Streaming,
            2 => Self::Listening,
            3 => Self::Watching,
            other => Self::Other(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: u8,
    pub url: Option<String>,
}

impl Activity {
    pub fn activity_type(&self) -> ActivityType {
        ActivityType::from(self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceResponse {
    pub user: PartialUser,
    pub guild_id: Option<Snowflake>,
    pub status: Status,
    pub game: Option<Activity>,
}

impl WireRecord for PresenceResponse {
    const KIND: &'static str = "presence";
}
