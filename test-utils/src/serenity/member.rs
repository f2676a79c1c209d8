//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

/// Creates a guild member holding the given roles.
///
/// The username doubles as the global display name. The member is not deafened, muted, or
/// pending membership screening.
///
/// # Arguments
/// - `guild_id` - Guild the member belongs to
/// - `user_id` - Discord user ID
/// - `name` - Username
/// - `roles` - Role IDs held by the member
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(guild_id: u64, user_id: u64, name: &str, roles: &[u64]) -> Member {
    let roles: Vec<String> = roles.iter().map(u64::to_string).collect();

    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": {
            "id": user_id.to_string(),
            "username": name,
            "discriminator": "0",
            "global_name": name,
            "avatar": null,
            "bot": false,
        },
        "nick": null,
        "avatar": null,
        "roles": roles,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
