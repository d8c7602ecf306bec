use serde::{Deserialize, Serialize};

use crate::{Snowflake, WireRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Snowflake,
    pub username: String,
    pub discriminator: String,
    #[serde(rename = "avatar")]
    pub avatar_hash: Option<String>,
    #[serde(default)]
    pub bot: bool,
}

impl WireRecord for UserResponse {
    const KIND: &'static str = "user";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bot_defaults_to_false_and_avatar_is_absent() {
        let user: UserResponse = crate::decode(json!({
            "id": "80351110224678912",
            "username": "Nelly",
            "discriminator": "1337",
        }))
        .unwrap();
        assert!(!user.bot);
        assert!(user.avatar_hash.is_none());
    }

    #[test]
    fn avatar_maps_to_avatar_hash_both_ways() {
        let user: UserResponse = crate::decode(json!({
            "id": "1",
            "username": "a",
            "discriminator": "0001",
            "avatar": "8342729096ea3675442027381ff50dfe",
        }))
        .unwrap();
        assert_eq!(
            user.avatar_hash.as_deref(),
            Some("8342729096ea3675442027381ff50dfe")
        );
        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["avatar"], "8342729096ea3675442027381ff50dfe");
        assert!(back.get("avatar_hash").is_none());
    }
}
