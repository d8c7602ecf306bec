use serde::{Deserialize, Serialize};

use crate::user::UserResponse;
use crate::{Snowflake, WireRecord};

/// A custom guild emoji.
///
/// `roles` are foreign keys into the owning guild's roles. `user`, the
/// creator, is embedded because it is always delivered together with the
/// emoji when the caller is allowed to see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiResponse {
    pub id: Snowflake,
    pub name: String,
    /// Always present on the wire; empty means every member may use it.
    pub roles: Vec<Snowflake>,
    pub user: Option<UserResponse>,
    #[serde(rename = "require_colons")]
    pub require_colons: bool,
    pub managed: bool,
}

impl WireRecord for EmojiResponse {
    const KIND: &'static str = "emoji";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PEPE: &str =
        r#"{"id":"9","name":"pepe","roles":["1","2"],"require_colons":true,"managed":false}"#;

    #[test]
    fn maps_example_payload() {
        let emoji: EmojiResponse = crate::decode_str(PEPE).unwrap();
        assert_eq!(emoji.id, Snowflake::new(9));
        assert_eq!(emoji.id.as_string(), "9");
        assert_eq!(emoji.name, "pepe");
        assert_eq!(emoji.roles, vec![Snowflake::new(1), Snowflake::new(2)]);
        assert!(emoji.require_colons);
        assert!(!emoji.managed);
        assert!(emoji.user.is_none());
    }

    #[test]
    fn scalar_fields_survive_a_write_back() {
        let emoji: EmojiResponse = crate::decode_str(PEPE).unwrap();
        let wire = serde_json::to_value(&emoji).unwrap();
        assert_eq!(wire["id"], "9");
        assert_eq!(wire["name"], "pepe");
        assert_eq!(wire["require_colons"], true);
        assert_eq!(wire["managed"], false);
    }

    #[test]
    fn each_missing_required_field_is_malformed() {
        for field in ["id", "name", "roles", "require_colons", "managed"] {
            let mut body: serde_json::Value = serde_json::from_str(PEPE).unwrap();
            body.as_object_mut().unwrap().remove(field);
            let err = crate::decode::<EmojiResponse>(body).unwrap_err();
            assert_eq!(err.kind, "emoji", "field {field}");
        }
    }

    #[test]
    fn absent_roles_differ_from_empty_roles() {
        let empty = crate::decode::<EmojiResponse>(json!({
            "id": "9",
            "name": "pepe",
            "roles": [],
            "require_colons": true,
            "managed": false,
        }));
        assert!(empty.unwrap().roles.is_empty());

        let absent = crate::decode::<EmojiResponse>(json!({
            "id": "9",
            "name": "pepe",
            "require_colons": true,
            "managed": false,
        }))
        .unwrap_err();
        assert_eq!(absent.kind, "emoji");
        assert!(absent.source.to_string().contains("roles"));
    }

    #[test]
    fn wrong_type_is_malformed() {
        let err = crate::decode::<EmojiResponse>(json!({
            "id": "9",
            "name": "pepe",
            "roles": [],
            "require_colons": "yes",
            "managed": false,
        }))
        .unwrap_err();
        assert_eq!(err.kind, "emoji");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let emoji: EmojiResponse = crate::decode(json!({
            "id": "9",
            "name": "pepe",
            "roles": [],
            "require_colons": true,
            "managed": false,
            "animated": true,
            "available": true,
        }))
        .unwrap();
        assert_eq!(emoji.name, "pepe");
    }

    #[test]
    fn embedded_creator_is_decoded() {
        let emoji: EmojiResponse = crate::decode(json!({
            "id": "9",
            "name": "pepe",
            "roles": [],
            "user": { "id": "5", "username": "frog", "discriminator": "0420" },
            "require_colons": true,
            "managed": false,
        }))
        .unwrap();
        assert!(emoji.roles.is_empty());
        assert_eq!(emoji.user.map(|u| u.username).as_deref(), Some("frog"));
    }
}
