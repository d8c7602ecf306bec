use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::UserResponse;
use crate::{Snowflake, WireRecord};

/// A user's membership in one guild. The owning guild's id is not part of
/// the payload; it travels alongside as addressing context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub user: UserResponse,
    #[serde(rename = "nick")]
    pub nickname: Option<String>,
    #[serde(rename = "roles")]
    pub role_ids: Vec<Snowflake>,
    pub joined_at: DateTime<Utc>,
    #[serde(rename = "deaf")]
    pub deafened: bool,
    #[serde(rename = "mute")]
    pub muted: bool,
}

impl WireRecord for MemberResponse {
    const KIND: &'static str = "member";
}
