//! Member fetch tests
//!
//! These run on a paused clock so the 120 second chunk timeout elapses
//! instantly once every task is idle.
//!
//! Run with: cargo test -p integration-tests --test fetch_tests

use integration_tests::{chunk_payload, dispatch_json, guild_payload, test_dispatcher};
use mirror_core::Snowflake;
use mirror_gateway::{GatewayCommand, GatewayError, GatewayEventType};

/// Let a spawned fetch progress to its subscribe-then-send point
async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_fetch_resolves_once_chunks_complete_the_list() {
    let (dispatcher, transport) = test_dispatcher();
    dispatch_json(
        &dispatcher,
        GatewayEventType::GuildCreate,
        guild_payload(100, 3, &[1]),
    )
    .unwrap();

    let fetcher = dispatcher.clone();
    let handle = tokio::spawn(async move { fetcher.fetch_members(Snowflake::new(100)).await });
    settle().await;

    // Exactly one upstream request, sent after the listener attached.
    assert_eq!(
        transport.sent(),
        vec![GatewayCommand::RequestGuildMembers {
            guild_id: Snowflake::new(100),
            query: String::new(),
            limit: 0,
        }]
    );

    dispatch_json(
        &dispatcher,
        GatewayEventType::GuildMembersChunk,
        chunk_payload(100, &[2]),
    )
    .unwrap();
    settle().await;

    dispatch_json(
        &dispatcher,
        GatewayEventType::GuildMembersChunk,
        chunk_payload(100, &[3]),
    )
    .unwrap();

    let guild = handle.await.unwrap().unwrap();
    assert_eq!(guild.members.len(), 3);
    assert_eq!(guild.member_count(), 3);

    // A chunk arriving after resolution is harmless.
    dispatch_json(
        &dispatcher,
        GatewayEventType::GuildMembersChunk,
        chunk_payload(100, &[3]),
    )
    .unwrap();
    assert_eq!(transport.sent().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_fetch_is_immediate_when_cache_is_complete() {
    let (dispatcher, transport) = test_dispatcher();
    dispatch_json(
        &dispatcher,
        GatewayEventType::GuildCreate,
        guild_payload(100, 2, &[1, 2]),
    )
    .unwrap();

    let guild = dispatcher.fetch_members(Snowflake::new(100)).await.unwrap();
    assert_eq!(guild.members.len(), 2);

    // No request goes upstream when nothing is missing.
    assert!(transport.sent().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_fetch_unknown_guild_fails_fast() {
    let (dispatcher, transport) = test_dispatcher();
    let err = dispatcher
        .fetch_members(Snowflake::new(999))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::UnknownGuild(id) if id == Snowflake::new(999)));
    assert!(transport.sent().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_fetch_times_out_when_chunks_stop() {
    let (dispatcher, _) = test_dispatcher();
    dispatch_json(
        &dispatcher,
        GatewayEventType::GuildCreate,
        guild_payload(100, 5, &[1]),
    )
    .unwrap();

    let fetcher = dispatcher.clone();
    let handle = tokio::spawn(async move { fetcher.fetch_members(Snowflake::new(100)).await });
    settle().await;

    // One incomplete chunk, then silence; the paused clock jumps past the
    // deadline as soon as everything is idle.
    dispatch_json(
        &dispatcher,
        GatewayEventType::GuildMembersChunk,
        chunk_payload(100, &[2, 3]),
    )
    .unwrap();

    let err = handle.await.unwrap().unwrap_err();
    assert!(matches!(err, GatewayError::MembersTimeout));

    // The partial progress stays cached, and a late chunk is still absorbed.
    dispatch_json(
        &dispatcher,
        GatewayEventType::GuildMembersChunk,
        chunk_payload(100, &[4, 5]),
    )
    .unwrap();
    let state = dispatcher.state().read();
    let guild = state.guild(Snowflake::new(100)).unwrap();
    assert_eq!(guild.members.len(), 5);
}
