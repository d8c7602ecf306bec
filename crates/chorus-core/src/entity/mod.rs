//! Domain entities: a response record snapshot plus the context needed to
//! follow its relationships.
//!
//! Constructing an entity never performs I/O and never fails. Synchronous
//! accessors read the snapshot; `async` accessors and streams resolve related
//! entities through the [`Client`](crate::Client) and return freshly built
//! entities. An entity is never updated in place, so a value held by the
//! caller can go stale; refetch when freshness matters.

mod emoji;
mod guild;
mod member;
mod presence;
mod role;
mod user;
mod voice;

pub use emoji::GuildEmoji;
pub use guild::Guild;
pub use member::Member;
pub use presence::Presence;
pub use role::Role;
pub use user::User;
pub use voice::VoiceState;

use chorus_util::Snowflake;

/// What every user-shaped entity can answer without I/O.
pub trait UserLike {
    fn id(&self) -> Snowflake;
    fn username(&self) -> &str;
    fn discriminator(&self) -> &str;

    /// `<@id>`
    fn mention(&self) -> String {
        format!("<@{}>", self.id())
    }

    /// `username#discriminator`, or just the username for accounts on the
    /// discriminator-less name system.
    fn tag(&self) -> String {
        match self.discriminator() {
            "" | "0" => self.username().to_string(),
            disc => format!("{}#{}", self.username(), disc),
        }
    }
}
