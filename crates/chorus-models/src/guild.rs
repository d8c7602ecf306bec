use serde::{Deserialize, Serialize};

use crate::{Snowflake, WireRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildResponse {
    pub id: Snowflake,
    pub name: String,
    #[serde(rename = "icon")]
    pub icon_hash: Option<String>,
    pub owner_id: Snowflake,
    pub region: Option<String>,
    pub afk_channel_id: Option<Snowflake>,
    pub member_count: Option<u64>,
}

impl WireRecord for GuildResponse {
    const KIND: &'static str = "guild";
}
