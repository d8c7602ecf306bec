mod support;

use chorus_core::{Guild, GuildEmoji, Member, Presence, Role, Snowflake, User, UserLike, VoiceState};
use chorus_core::models::{Permissions, Status};
use support::*;

#[test]
fn construction_touches_no_collaborator() {
    let client = panic_client();
    let member = Member::new(client.clone(), GUILD, member_record(Some("Rex"), &[10, 11]));
    let guild = Guild::new(client.clone(), guild_record());
    let role = Role::new(client.clone(), GUILD, role_record(10, "mods", Permissions::KICK_MEMBERS));
    let emoji = GuildEmoji::new(client.clone(), GUILD, emoji_record());
    let voice = VoiceState::new(client.clone(), GUILD, voice_record());
    let presence = Presence::new(client.clone(), GUILD, presence_record());

    assert_eq!(member.guild_id(), GUILD);
    assert_eq!(guild.owner_id(), OWNER);
    assert_eq!(role.name(), "mods");
    assert_eq!(emoji.name(), "pepe");
    assert!(voice.is_self_deafened());
    assert_eq!(presence.status(), Status::Idle);
}

#[test]
fn creating_relationship_handles_does_no_work() {
    let member = Member::new(panic_client(), GUILD, member_record(None, &[10, 11]));
    // Futures and streams are inert until polled.
    let _guild = member.guild();
    let _voice = member.voice_state();
    let _roles = member.roles();
}

#[test]
fn display_name_falls_back_to_username() {
    let client = panic_client();
    let plain = Member::new(client.clone(), GUILD, member_record(None, &[]));
    let nicked = Member::new(client, GUILD, member_record(Some("Rex"), &[]));
    assert_eq!(plain.display_name(), "rex");
    assert_eq!(nicked.display_name(), "Rex");
    assert_eq!(nicked.username(), "rex");
}

#[test]
fn nickname_mention_is_fenced_identifier() {
    let client = panic_client();
    let mut record = member_record(None, &[]);
    record.user.id = Snowflake::new(123);
    let member = Member::new(client, GUILD, record);
    assert_eq!(member.nickname_mention(), "<@!123>");
    assert_eq!(member.mention(), "<@123>");
}

#[test]
fn emoji_example_payload_is_exposed_without_io() {
    let emoji = GuildEmoji::new(panic_client(), GUILD, emoji_record());
    assert_eq!(emoji.id().as_string(), "9");
    assert!(emoji.requires_colons());
    assert!(!emoji.is_managed());
    assert!(emoji.user().is_none());
    assert_eq!(emoji.role_ids(), &[Snowflake::new(1), Snowflake::new(2)]);
    assert_eq!(emoji.as_format(), "<:pepe:9>");
    assert_eq!(emoji.image_url(), "https://cdn.discordapp.com/emojis/9.png");
}

#[test]
fn members_and_users_share_the_user_capability() {
    fn describe(who: &impl UserLike) -> String {
        format!("{} {}", who.tag(), who.mention())
    }

    let client = panic_client();
    let member = Member::new(client.clone(), GUILD, member_record(Some("Rex"), &[]));
    let user = User::new(client, user_record(REX, "rex"));
    assert_eq!(describe(&member), "rex#0007 <@42>");
    assert_eq!(describe(&member), describe(&user));
    assert_eq!(describe(&member.user()), describe(&user));
}

#[test]
fn tag_omits_zero_discriminator() {
    let mut record = user_record(REX, "rex");
    record.discriminator = "0".into();
    let user = User::new(panic_client(), record);
    assert_eq!(user.tag(), "rex");
}

#[test]
fn role_derived_fields() {
    let client = panic_client();
    let everyone = Role::new(client.clone(), GUILD, role_record(GUILD.get(), "@everyone", Permissions::empty()));
    let mods = Role::new(client, GUILD, role_record(10, "mods", Permissions::KICK_MEMBERS));
    assert!(everyone.is_everyone());
    assert_eq!(everyone.mention(), "@everyone");
    assert!(!mods.is_everyone());
    assert_eq!(mods.mention(), "<@&10>");
    assert_eq!(mods.color_hex(), "#3498db");
}

#[test]
fn cdn_urls_follow_configured_base() {
    let api = chorus_core::ApiConfig {
        cdn_url: "https://cdn.example.test/".into(),
        ..Default::default()
    };
    let client = chorus_core::Client::with_api_config(
        std::sync::Arc::new(PanicStore),
        std::sync::Arc::new(PanicTransport),
        &api,
    );
    let guild = Guild::new(client.clone(), guild_record());
    assert_eq!(
        guild.icon_url().as_deref(),
        Some("https://cdn.example.test/icons/100/abc123.png")
    );

    let mut record = user_record(REX, "rex");
    let user = User::new(client.clone(), record.clone());
    assert!(user.avatar_url().is_none());
    assert_eq!(user.default_avatar_url(), "https://cdn.example.test/embed/avatars/2.png");

    record.avatar_hash = Some("a_deadbeef".into());
    let animated = User::new(client, record);
    assert_eq!(
        animated.avatar_url().as_deref(),
        Some("https://cdn.example.test/avatars/42/a_deadbeef.gif")
    );
}

#[test]
fn default_avatar_depends_on_naming_system() {
    let mut record = user_record(Snowflake::new(80351110224678912), "nelly");
    let legacy = User::new(panic_client(), record.clone());
    // discriminator 0007
    assert!(legacy.default_avatar_url().ends_with("/embed/avatars/2.png"));

    record.discriminator = "0".into();
    let migrated = User::new(panic_client(), record);
    assert!(migrated.default_avatar_url().ends_with("/embed/avatars/5.png"));
}

#[test]
fn voice_state_reports_channel_membership() {
    let mut record = voice_record();
    let connected = VoiceState::new(panic_client(), GUILD, record.clone());
    assert!(connected.is_in_channel());
    assert_eq!(connected.channel_id(), Some(Snowflake::new(555)));

    record.channel_id = None;
    let disconnected = VoiceState::new(panic_client(), GUILD, record);
    assert!(!disconnected.is_in_channel());
}
