use chorus_core::{EntityKey, Snowflake};

/// Where an entity lives in the REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// A single object at this path.
    Object(String),
    /// The guild role list; the API has no single-role endpoint, so the role
    /// is picked out of the listing.
    RoleList { path: String, role_id: Snowflake },
}

impl Route {
    /// `None` for entities only delivered over the gateway (voice states,
    /// presences).
    pub fn for_key(key: &EntityKey) -> Option<Self> {
        Some(match *key {
            EntityKey::User(user_id) => Route::Object(format!("/users/{user_id}")),
            EntityKey::Guild(guild_id) => Route::Object(format!("/guilds/{guild_id}")),
            EntityKey::Member { guild_id, user_id } => {
                Route::Object(format!("/guilds/{guild_id}/members/{user_id}"))
            }
            EntityKey::Emoji { guild_id, emoji_id } => {
                Route::Object(format!("/guilds/{guild_id}/emojis/{emoji_id}"))
            }
            EntityKey::Role { guild_id, role_id } => Route::RoleList {
                path: format!("/guilds/{guild_id}/roles"),
                role_id,
            },
            EntityKey::VoiceState { .. } | EntityKey::Presence { .. } => return None,
        })
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Object(path) | Route::RoleList { path, .. } => path,
        }
    }
}
