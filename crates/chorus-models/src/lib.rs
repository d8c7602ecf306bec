//! Response records mirroring the platform's wire schema.
//!
//! Every record is a passive bag of fields. Wire names that differ from the
//! field name are mapped with an explicit `#[serde(rename)]` on that field;
//! no record uses `rename_all`, so the mapping table is exactly what the
//! struct definitions say. Unknown wire fields are ignored.

pub mod emoji;
pub mod guild;
pub mod member;
pub mod permissions;
pub mod presence;
pub mod role;
pub mod user;
pub mod voice;

pub use chorus_util::Snowflake;
pub use emoji::EmojiResponse;
pub use guild::GuildResponse;
pub use member::MemberResponse;
pub use permissions::Permissions;
pub use presence::{Activity, ActivityType, PartialUser, PresenceResponse, Status};
pub use role::RoleResponse;
pub use user::UserResponse;
pub use voice::VoiceStateResponse;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// A record type decoded from a single wire payload.
pub trait WireRecord: DeserializeOwned {
    /// Entity kind name used in diagnostics.
    const KIND: &'static str;
}

/// The payload could not be mapped onto the record for `kind`: a required
/// field was missing or a value had the wrong type.
#[derive(Debug, Error)]
#[error("malformed {kind} payload: {source}")]
pub struct MalformedPayload {
    pub kind: &'static str,
    #[source]
    pub source: serde_json::Error,
}

impl MalformedPayload {
    pub fn new(kind: &'static str, source: serde_json::Error) -> Self {
        Self { kind, source }
    }

    /// A collaborator handed back a record of a different kind than the one
    /// requested.
    pub fn unexpected_kind(expected: &'static str, found: &'static str) -> Self {
        let source = <serde_json::Error as serde::de::Error>::custom(format_args!(
            "expected a {expected} record, got a {found} record"
        ));
        Self::new(expected, source)
    }
}

/// Decode an already-parsed JSON object into a record.
pub fn decode<R: WireRecord>(value: serde_json::Value) -> Result<R, MalformedPayload> {
    serde_json::from_value(value).map_err(|e| MalformedPayload::new(R::KIND, e))
}

/// Decode a raw JSON document into a record.
pub fn decode_str<R: WireRecord>(raw: &str) -> Result<R, MalformedPayload> {
    serde_json::from_str(raw).map_err(|e| MalformedPayload::new(R::KIND, e))
}

/// Decode a raw JSON document from bytes.
pub fn decode_slice<R: WireRecord>(raw: &[u8]) -> Result<R, MalformedPayload> {
    serde_json::from_slice(raw).map_err(|e| MalformedPayload::new(R::KIND, e))
}
