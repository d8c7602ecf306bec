use bitflags::bitflags;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u64 {
        const CREATE_INSTANT_INVITE = 1 << 0;
        const KICK_MEMBERS         = 1 << 1;
        const BAN_MEMBERS          = 1 << 2;
        const ADMINISTRATOR        = 1 << 3;
        const MANAGE_CHANNELS      = 1 << 4;
        const MANAGE_GUILD         = 1 << 5;
        const ADD_REACTIONS        = 1 << 6;
        const VIEW_AUDIT_LOG       = 1 << 7;
        const PRIORITY_SPEAKER     = 1 << 8;
        const STREAM               = 1 << 9;
        const VIEW_CHANNEL         = 1 << 10;
        const SEND_MESSAGES        = 1 << 11;
        const SEND_TTS_MESSAGES    = 1 << 12;
        const MANAGE_MESSAGES      = 1 << 13;
        const EMBED_LINKS          = 1 << 14;
        const ATTACH_FILES         = 1 << 15;
        const READ_MESSAGE_HISTORY = 1 << 16;
        const MENTION_EVERYONE     = 1 << 17;
        const USE_EXTERNAL_EMOJIS  = 1 << 18;
        const VIEW_GUILD_INSIGHTS  = 1 << 19;
        const CONNECT              = 1 << 20;
        const SPEAK                = 1 << 21;
        const MUTE_MEMBERS         = 1 << 22;
        const DEAFEN_MEMBERS       = 1 << 23;
        const MOVE_MEMBERS         = 1 << 24;
        const USE_VAD              = 1 << 25;
        const CHANGE_NICKNAME      = 1 << 26;
        const MANAGE_NICKNAMES     = 1 << 27;
        const MANAGE_ROLES         = 1 << 28;
        const MANAGE_WEBHOOKS      = 1 << 29;
        const MANAGE_EMOJIS        = 1 << 30;
    }
}

// The wire carries permission sets as decimal strings; older payloads use
// plain integers. Bits this client does not know are dropped.
impl Serialize for Permissions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.bits())
    }
}

struct PermissionsVisitor;

impl<'de> Visitor<'de> for PermissionsVisitor {
    type Value = Permissions;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a permission bit set as a decimal string or integer")
    }

    fn visit_u64<E: de::Error>(self, bits: u64) -> Result<Self::Value, E> {
        Ok(Permissions::from_bits_truncate(bits))
    }

    fn visit_i64<E: de::Error>(self, bits: i64) -> Result<Self::Value, E> {
        u64::try_from(bits)
            .map(Permissions::from_bits_truncate)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(bits), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value
            .parse::<u64>()
            .map(Permissions::from_bits_truncate)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

impl<'de> Deserialize<'de> for Permissions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PermissionsVisitor)
    }
}
