//! Test factories for creating Serenity GuildChannel objects.

use serenity::all::GuildChannel;

/// Discord channel type numbers used by the factories.
const TEXT_CHANNEL: u8 = 0;
const PUBLIC_THREAD: u8 = 11;
const FORUM_CHANNEL: u8 = 15;

/// Creates a forum channel offering the given tags.
///
/// # Arguments
/// - `channel_id` - Forum channel ID
/// - `guild_id` - Guild the forum belongs to
/// - `name` - Forum name
/// - `tags` - `(tag_id, tag_name)` pairs in display order
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_forum(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    tags: &[(u64, &str)],
) -> GuildChannel {
    let available_tags: Vec<_> = tags
        .iter()
        .map(|(id, name)| {
            serde_json::json!({
                "id": id.to_string(),
                "name": name,
                "moderated": false,
                "emoji_id": null,
                "emoji_name": null,
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": FORUM_CHANNEL,
        "name": name,
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
        "parent_id": null,
        "flags": 0,
        "available_tags": available_tags,
    }))
    .expect("Failed to create test forum - invalid JSON structure")
}

/// Creates an open public thread inside a forum.
///
/// # Arguments
/// - `channel_id` - Thread ID
/// - `guild_id` - Guild the thread belongs to
/// - `parent_id` - Parent forum channel ID
/// - `owner_id` - User who created the thread
/// - `name` - Thread title
/// - `applied_tags` - Tag IDs currently applied to the thread
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_thread(
    channel_id: u64,
    guild_id: u64,
    parent_id: u64,
    owner_id: u64,
    name: &str,
    applied_tags: &[u64],
) -> GuildChannel {
    let applied_tags: Vec<String> = applied_tags.iter().map(u64::to_string).collect();

    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": PUBLIC_THREAD,
        "name": name,
        "parent_id": parent_id.to_string(),
        "owner_id": owner_id.to_string(),
        "flags": 0,
        "message_count": 1,
        "member_count": 1,
        "thread_metadata": {
            "archived": false,
            "auto_archive_duration": 1440,
            "archive_timestamp": "2020-01-01T00:00:00.000000+00:00",
            "locked": false,
            "invitable": true,
            "create_timestamp": "2020-01-01T00:00:00.000000+00:00",
        },
        "applied_tags": applied_tags,
    }))
    .expect("Failed to create test thread - invalid JSON structure")
}

/// Creates a plain guild text channel.
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_text_channel(channel_id: u64, guild_id: u64, name: &str) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": TEXT_CHANNEL,
        "name": name,
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
        "parent_id": null,
        "topic": null,
        "flags": 0,
    }))
    .expect("Failed to create test text channel - invalid JSON structure")
}
