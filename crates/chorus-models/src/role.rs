use serde::{Deserialize, Serialize};

use crate::permissions::Permissions;
use crate::{Snowflake, WireRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleResponse {
    pub id: Snowflake,
    pub name: String,
    pub color: u32,
    #[serde(rename = "hoist")]
    pub hoisted: bool,
    pub position: i32,
    pub permissions: Permissions,
    pub managed: bool,
    pub mentionable: bool,
}

impl WireRecord for RoleResponse {
    const KIND: &'static str = "role";
}
