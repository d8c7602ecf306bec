use serde::{Deserialize, Serialize};

use crate::{Snowflake, WireRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceStateResponse {
    pub guild_id: Option<Snowflake>,
    pub channel_id: Option<Snowflake>,
    pub user_id: Snowflake,
    pub session_id: String,
    #[serde(rename = "deaf")]
    pub deafened: bool,
    #[serde(rename = "mute")]
    pub muted: bool,
    #[serde(rename = "self_deaf")]
    pub self_deafened: bool,
    #[serde(rename = "self_mute")]
    pub self_muted: bool,
    pub suppress: bool,
}

impl WireRecord for VoiceStateResponse {
    const KIND: &'static str = "voice state";
}
