use std::fmt;

use chorus_models::{
    EmojiResponse, GuildResponse, MalformedPayload, MemberResponse, PresenceResponse,
    RoleResponse, UserResponse, VoiceStateResponse, WireRecord,
};
use chorus_util::Snowflake;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Guild,
    Member,
    Role,
    Emoji,
    VoiceState,
    Presence,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => UserResponse::KIND,
            Self::Guild => GuildResponse::KIND,
            Self::Member => MemberResponse::KIND,
            Self::Role => RoleResponse::KIND,
            Self::Emoji => EmojiResponse::KIND,
            Self::VoiceState => VoiceStateResponse::KIND,
            Self::Presence => PresenceResponse::KIND,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Address of one remote entity: its kind, its identifier, and the
/// addressing context (the owning guild) the platform needs to locate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKey {
    User(Snowflake),
    Guild(Snowflake),
    Member { guild_id: Snowflake, user_id: Snowflake },
    Role { guild_id: Snowflake, role_id: Snowflake },
    Emoji { guild_id: Snowflake, emoji_id: Snowflake },
    VoiceState { guild_id: Snowflake, user_id: Snowflake },
    Presence { guild_id: Snowflake, user_id: Snowflake },
}

impl EntityKey {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::User(_) => EntityKind::User,
            Self::Guild(_) => EntityKind::Guild,
            Self::Member { .. } => EntityKind::Member,
            Self::Role { .. } => EntityKind::Role,
            Self::Emoji { .. } => EntityKind::Emoji,
            Self::VoiceState { .. } => EntityKind::VoiceState,
            Self::Presence { .. } => EntityKind::Presence,
        }
    }

    /// The identifier of the addressed entity itself.
    pub fn id(&self) -> Snowflake {
        match *self {
            Self::User(id) | Self::Guild(id) => id,
            Self::Member { user_id, .. }
            | Self::VoiceState { user_id, .. }
            | Self::Presence { user_id, .. } => user_id,
            Self::Role { role_id, .. } => role_id,
            Self::Emoji { emoji_id, .. } => emoji_id,
        }
    }

    /// The owning guild, for guild-scoped kinds.
    pub fn guild_id(&self) -> Option<Snowflake> {
        match *self {
            Self::User(_) => None,
            Self::Guild(id) => Some(id),
            Self::Member { guild_id, .. }
            | Self::Role { guild_id, .. }
            | Self::Emoji { guild_id, .. }
            | Self::VoiceState { guild_id, .. }
            | Self::Presence { guild_id, .. } => Some(guild_id),
        }
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(_) | Self::Guild(_) => write!(f, "{} {}", self.kind(), self.id()),
            _ => match self.guild_id() {
                Some(guild_id) => write!(f, "{} {} in guild {}", self.kind(), self.id(), guild_id),
                None => write!(f, "{} {}", self.kind(), self.id()),
            },
        }
    }
}

/// Any response record, as carried across the store and transport seams.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    User(UserResponse),
    Guild(GuildResponse),
    Member(MemberResponse),
    Role(RoleResponse),
    Emoji(EmojiResponse),
    VoiceState(VoiceStateResponse),
    Presence(PresenceResponse),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::User(_) => EntityKind::User,
            Self::Guild(_) => EntityKind::Guild,
            Self::Member(_) => EntityKind::Member,
            Self::Role(_) => EntityKind::Role,
            Self::Emoji(_) => EntityKind::Emoji,
            Self::VoiceState(_) => EntityKind::VoiceState,
            Self::Presence(_) => EntityKind::Presence,
        }
    }

    /// Decode a payload of a known kind.
    pub fn decode(kind: EntityKind, value: serde_json::Value) -> Result<Self, MalformedPayload> {
        Ok(match kind {
            EntityKind::User => Self::User(chorus_models::decode(value)?),
            EntityKind::Guild => Self::Guild(chorus_models::decode(value)?),
            EntityKind::Member => Self::Member(chorus_models::decode(value)?),
            EntityKind::Role => Self::Role(chorus_models::decode(value)?),
            EntityKind::Emoji => Self::Emoji(chorus_models::decode(value)?),
            EntityKind::VoiceState => Self::VoiceState(chorus_models::decode(value)?),
            EntityKind::Presence => Self::Presence(chorus_models::decode(value)?),
        })
    }

    pub fn decode_slice(kind: EntityKind, raw: &[u8]) -> Result<Self, MalformedPayload> {
        Ok(match kind {
            EntityKind::User => Self::User(chorus_models::decode_slice(raw)?),
            EntityKind::Guild => Self::Guild(chorus_models::decode_slice(raw)?),
            EntityKind::Member => Self::Member(chorus_models::decode_slice(raw)?),
            EntityKind::Role => Self::Role(chorus_models::decode_slice(raw)?),
            EntityKind::Emoji => Self::Emoji(chorus_models::decode_slice(raw)?),
            EntityKind::VoiceState => Self::VoiceState(chorus_models::decode_slice(raw)?),
            EntityKind::Presence => Self::Presence(chorus_models::decode_slice(raw)?),
        })
    }

    /// The key this record would be stored under. Guild-scoped records that
    /// don't carry their guild id need it supplied as `guild_id`.
    pub fn key(&self, guild_id: Option<Snowflake>) -> Option<EntityKey> {
        Some(match self {
            Self::User(user) => EntityKey::User(user.id),
            Self::Guild(guild) => EntityKey::Guild(guild.id),
            Self::Member(member) => EntityKey::Member {
                guild_id: guild_id?,
                user_id: member.user.id,
            },
            Self::Role(role) => EntityKey::Role {
                guild_id: guild_id?,
                role_id: role.id,
            },
            Self::Emoji(emoji) => EntityKey::Emoji {
                guild_id: guild_id?,
                emoji_id: emoji.id,
            },
            Self::VoiceState(state) => EntityKey::VoiceState {
                guild_id: state.guild_id.or(guild_id)?,
                user_id: state.user_id,
            },
            Self::Presence(presence) => EntityKey::Presence {
                guild_id: presence.guild_id.or(guild_id)?,
                user_id: presence.user.id,
            },
        })
    }
}

/// A response record type that can be pulled back out of a [`Record`].
pub trait FromRecord: WireRecord + Sized {
    const ENTITY_KIND: EntityKind;

    fn from_record(record: Record) -> Result<Self, MalformedPayload>;
}

macro_rules! record_variant {
    ($ty:ty, $variant:ident) => {
        impl FromRecord for $ty {
            const ENTITY_KIND: EntityKind = EntityKind::$variant;

            fn from_record(record: Record) -> Result<Self, MalformedPayload> {
                match record {
                    Record::$variant(inner) => Ok(inner),
                    other => Err(MalformedPayload::unexpected_kind(
                        <$ty as WireRecord>::KIND,
                        other.kind().as_str(),
                    )),
                }
            }
        }

        impl From<$ty> for Record {
            fn from(inner: $ty) -> Self {
                Record::$variant(inner)
            }
        }
    };
}

record_variant!(UserResponse, User);
record_variant!(GuildResponse, Guild);
record_variant!(MemberResponse, Member);
record_variant!(RoleResponse, Role);
record_variant!(EmojiResponse, Emoji);
record_variant!(VoiceStateResponse, VoiceState);
record_variant!(PresenceResponse, Presence);
