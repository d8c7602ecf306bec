use chorus_models::Permissions;
use chorus_util::Snowflake;

/// Combine a member's role permission sets into their guild-level
/// permissions. The owner and anyone holding ADMINISTRATOR get everything.
pub fn compute_base_permissions(
    role_permissions: &[Permissions],
    guild_owner_id: Snowflake,
    user_id: Snowflake,
) -> Permissions {
    if user_id == guild_owner_id {
        return Permissions::all();
    }

    let perms = role_permissions
        .iter()
        .fold(Permissions::empty(), |acc, p| acc | *p);

    if perms.contains(Permissions::ADMINISTRATOR) {
        return Permissions::all();
    }

    perms
}
