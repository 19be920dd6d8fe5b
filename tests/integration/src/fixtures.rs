//! Test fixtures and payload builders
//!
//! Provides reusable gateway payloads for integration tests.

use serde_json::{json, Value};

/// A full guild payload with the given reported member count and cached
/// member user ids
#[must_use]
pub fn guild_payload(guild_id: u64, member_count: u64, member_ids: &[u64]) -> Value {
    let members: Vec<Value> = member_ids
        .iter()
        .map(|id| json!({ "user": { "id": id.to_string(), "username": format!("user{id}") } }))
        .collect();
    json!({
        "id": guild_id.to_string(),
        "name": "Quokka Cove",
        "member_count": member_count,
        "members": members,
        "channels": [
            { "id": channel_id(guild_id).to_string(), "name": "general", "type": 0 }
        ],
        "emojis": [
            { "id": "500", "name": "partyparrot" },
            { "id": "502", "name": "quokka" }
        ]
    })
}

/// The id of the text channel seeded by [`guild_payload`]
#[must_use]
pub const fn channel_id(guild_id: u64) -> u64 {
    guild_id + 200
}

/// A members chunk payload carrying the given user ids
#[must_use]
pub fn chunk_payload(guild_id: u64, member_ids: &[u64]) -> Value {
    let members: Vec<Value> = member_ids
        .iter()
        .map(|id| json!({ "user": { "id": id.to_string(), "username": format!("user{id}") } }))
        .collect();
    json!({ "guild_id": guild_id.to_string(), "members": members })
}

/// A message create payload in the seeded text channel
#[must_use]
pub fn message_payload(guild_id: u64, message_id: u64, author_id: u64) -> Value {
    json!({
        "id": message_id.to_string(),
        "channel_id": channel_id(guild_id).to_string(),
        "author": { "id": author_id.to_string(), "username": format!("user{author_id}") },
        "content": "hello"
    })
}

/// A reaction add/remove payload for a unicode emoji
#[must_use]
pub fn reaction_payload(guild_id: u64, message_id: u64, user_id: u64) -> Value {
    json!({
        "channel_id": channel_id(guild_id).to_string(),
        "message_id": message_id.to_string(),
        "user_id": user_id.to_string(),
        "emoji": { "id": null, "name": "🔥" }
    })
}
