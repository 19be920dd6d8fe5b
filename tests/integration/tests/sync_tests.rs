//! State synchronization tests
//!
//! Drive raw gateway payloads through the dispatcher and assert on the
//! resulting cached state and broadcast events.
//!
//! Run with: cargo test -p integration-tests --test sync_tests

use integration_tests::{
    channel_id, dispatch_json, guild_payload, message_payload, reaction_payload, test_dispatcher,
};
use mirror_core::{ClientEvent, ReactionKey, Snowflake};
use mirror_gateway::GatewayEventType;
use serde_json::json;

// ============================================================================
// Guild Sync Tests
// ============================================================================

#[tokio::test]
async fn test_guild_create_replay_is_idempotent() {
    let (dispatcher, _) = test_dispatcher();
    let payload = guild_payload(100, 2, &[1, 2]);

    dispatch_json(&dispatcher, GatewayEventType::GuildCreate, payload.clone()).unwrap();
    let snapshot = dispatcher
        .state()
        .read()
        .guild(Snowflake::new(100))
        .cloned()
        .unwrap();

    dispatch_json(&dispatcher, GatewayEventType::GuildCreate, payload).unwrap();
    let replayed = dispatcher
        .state()
        .read()
        .guild(Snowflake::new(100))
        .cloned()
        .unwrap();

    assert_eq!(snapshot, replayed);
    assert_eq!(replayed.member_count(), 2);
    assert_eq!(replayed.members.len(), 2);
}

#[tokio::test]
async fn test_guild_update_retains_collections() {
    let (dispatcher, _) = test_dispatcher();
    dispatch_json(
        &dispatcher,
        GatewayEventType::GuildCreate,
        guild_payload(100, 2, &[1, 2]),
    )
    .unwrap();

    let event = dispatch_json(
        &dispatcher,
        GatewayEventType::GuildUpdate,
        json!({ "id": "100", "name": "Renamed Cove" }),
    )
    .unwrap()
    .unwrap();
    assert_eq!(event.event_type(), "GUILD_UPDATE");

    let state = dispatcher.state().read();
    let guild = state.guild(Snowflake::new(100)).unwrap();
    assert_eq!(guild.name, "Renamed Cove");
    assert_eq!(guild.members.len(), 2);
    assert_eq!(guild.emojis.len(), 2);
}

#[tokio::test]
async fn test_guild_delete_evicts_everything() {
    let (dispatcher, _) = test_dispatcher();
    dispatch_json(
        &dispatcher,
        GatewayEventType::GuildCreate,
        guild_payload(100, 1, &[1]),
    )
    .unwrap();

    dispatch_json(
        &dispatcher,
        GatewayEventType::GuildDelete,
        json!({ "id": "100" }),
    )
    .unwrap()
    .unwrap();

    let state = dispatcher.state().read();
    assert!(state.guild(Snowflake::new(100)).is_none());
    assert!(state.channel(Snowflake::new(channel_id(100))).is_none());
    assert!(state.emoji(Snowflake::new(500)).is_none());
}

// ============================================================================
// Emoji Diff-Sync Tests
// ============================================================================

#[tokio::test]
async fn test_emoji_update_synchronizes_store_and_index() {
    let (dispatcher, _) = test_dispatcher();
    // Seeded with emojis 500 and 502.
    dispatch_json(
        &dispatcher,
        GatewayEventType::GuildCreate,
        guild_payload(100, 1, &[1]),
    )
    .unwrap();

    // Authoritative set is now {500 (renamed), 501}; 502 must vanish from
    // both the guild store and the client-wide index.
    let event = dispatch_json(
        &dispatcher,
        GatewayEventType::GuildEmojisUpdate,
        json!({
            "guild_id": "100",
            "emojis": [
                { "id": "500", "name": "renamed" },
                { "id": "501", "name": "fresh" }
            ]
        }),
    )
    .unwrap()
    .unwrap();
    assert_eq!(event.event_type(), "GUILD_EMOJIS_UPDATE");

    let state = dispatcher.state().read();
    let guild = state.guild(Snowflake::new(100)).unwrap();
    assert_eq!(guild.emojis.len(), 2);
    assert_eq!(
        guild.emojis.get(&Snowflake::new(500)).map(|e| e.name.clone()),
        Some("renamed".to_string())
    );
    assert!(guild.emojis.has(&Snowflake::new(501)));
    assert!(!guild.emojis.has(&Snowflake::new(502)));

    assert!(state.emoji(Snowflake::new(501)).is_some());
    assert!(state.emoji(Snowflake::new(502)).is_none());
    assert!(state.emoji_guild_id(Snowflake::new(502)).is_none());
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_reaction_lifecycle() {
    let (dispatcher, _) = test_dispatcher();
    dispatch_json(
        &dispatcher,
        GatewayEventType::GuildCreate,
        guild_payload(100, 1, &[1]),
    )
    .unwrap();
    dispatch_json(
        &dispatcher,
        GatewayEventType::MessageCreate,
        message_payload(100, 200, 1),
    )
    .unwrap();

    // Two users react, then both remove.
    for user in [1, 2] {
        dispatch_json(
            &dispatcher,
            GatewayEventType::MessageReactionAdd,
            reaction_payload(100, 200, user),
        )
        .unwrap()
        .unwrap();
    }

    let event = dispatch_json(
        &dispatcher,
        GatewayEventType::MessageReactionRemove,
        reaction_payload(100, 200, 1),
    )
    .unwrap()
    .unwrap();
    match event {
        ClientEvent::MessageReactionRemove(e) => assert_eq!(e.reaction.count(), 1),
        other => panic!("unexpected event: {other:?}"),
    }

    dispatch_json(
        &dispatcher,
        GatewayEventType::MessageReactionRemove,
        reaction_payload(100, 200, 2),
    )
    .unwrap()
    .unwrap();

    // The entry never survives at count zero, and a further remove is inert.
    let state = dispatcher.state().read();
    let message = state
        .channel(Snowflake::new(channel_id(100)))
        .unwrap()
        .messages
        .get(&Snowflake::new(200))
        .unwrap();
    assert!(message
        .reaction(&ReactionKey::Unicode("🔥".to_string()))
        .is_none());
    drop(state);

    let inert = dispatch_json(
        &dispatcher,
        GatewayEventType::MessageReactionRemove,
        reaction_payload(100, 200, 2),
    )
    .unwrap();
    assert!(inert.is_none());
}

// ============================================================================
// Pin Notification Tests
// ============================================================================

#[tokio::test]
async fn test_pins_update_is_pure_passthrough() {
    let (dispatcher, _) = test_dispatcher();
    dispatch_json(
        &dispatcher,
        GatewayEventType::GuildCreate,
        guild_payload(100, 1, &[1]),
    )
    .unwrap();

    let before = dispatcher
        .state()
        .read()
        .guild(Snowflake::new(100))
        .cloned()
        .unwrap();

    let event = dispatch_json(
        &dispatcher,
        GatewayEventType::ChannelPinsUpdate,
        json!({
            "channel_id": channel_id(100).to_string(),
            "last_pin_timestamp": 1496498400
        }),
    )
    .unwrap()
    .unwrap();

    match event {
        ClientEvent::ChannelPinsUpdate(e) => {
            assert_eq!(e.guild_id, Some(Snowflake::new(100)));
            assert!(e.last_pin_at.is_some());
        }
        other => panic!("unexpected event: {other:?}"),
    }

    // No state changed.
    let after = dispatcher
        .state()
        .read()
        .guild(Snowflake::new(100))
        .cloned()
        .unwrap();
    assert_eq!(before, after);
}

// ============================================================================
// Member Count Tests
// ============================================================================

#[tokio::test]
async fn test_member_join_and_leave_adjust_count() {
    let (dispatcher, _) = test_dispatcher();
    dispatch_json(
        &dispatcher,
        GatewayEventType::GuildCreate,
        guild_payload(100, 1, &[1]),
    )
    .unwrap();

    dispatch_json(
        &dispatcher,
        GatewayEventType::GuildMemberAdd,
        json!({ "guild_id": "100", "user": { "id": "2", "username": "user2" } }),
    )
    .unwrap()
    .unwrap();
    assert_eq!(
        dispatcher
            .state()
            .read()
            .guild(Snowflake::new(100))
            .unwrap()
            .member_count(),
        2
    );

    dispatch_json(
        &dispatcher,
        GatewayEventType::GuildMemberRemove,
        json!({ "guild_id": "100", "user": { "id": "2" } }),
    )
    .unwrap()
    .unwrap();

    // Removing someone never cached is silent and leaves the count alone.
    let inert = dispatch_json(
        &dispatcher,
        GatewayEventType::GuildMemberRemove,
        json!({ "guild_id": "100", "user": { "id": "99" } }),
    )
    .unwrap();
    assert!(inert.is_none());
    assert_eq!(
        dispatcher
            .state()
            .read()
            .guild(Snowflake::new(100))
            .unwrap()
            .member_count(),
        1
    );
}
