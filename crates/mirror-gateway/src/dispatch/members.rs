//! Member reducers

use tracing::{debug, warn};

use mirror_core::events::{
    GuildMemberAddEvent, GuildMemberRemoveEvent, GuildMembersChunkEvent,
};
use mirror_core::ClientEvent;

use crate::events::payloads::{
    GuildMemberAddPayload, GuildMemberRemovePayload, GuildMembersChunkPayload,
};
use crate::state::ClientState;

/// Apply GUILD_MEMBER_ADD: a live join. The reported member count does not
/// include the joiner yet, so the count is incremented here.
pub fn member_add(state: &mut ClientState, payload: &GuildMemberAddPayload) -> Option<ClientEvent> {
    state.upsert_user(&payload.member.user);

    let Some(guild) = state.guild_mut(payload.guild_id) else {
        warn!(guild_id = %payload.guild_id, "member add for unknown guild");
        return None;
    };
    let member = guild.add_member(&payload.member, false);
    let user_id = member.user_id;
    debug!(guild_id = %payload.guild_id, user_id = %user_id, "member joined");
    Some(ClientEvent::GuildMemberAdd(GuildMemberAddEvent {
        guild_id: payload.guild_id,
        user_id,
    }))
}

/// Apply GUILD_MEMBER_REMOVE: evict the member and decrement the count.
/// A remove for a member that was never cached is silently ignored.
pub fn member_remove(
    state: &mut ClientState,
    payload: &GuildMemberRemovePayload,
) -> Option<ClientEvent> {
    let guild = state.guild_mut(payload.guild_id)?;
    guild.remove_member(payload.user.id)?;
    debug!(guild_id = %payload.guild_id, user_id = %payload.user.id, "member left");
    Some(ClientEvent::GuildMemberRemove(GuildMemberRemoveEvent {
        guild_id: payload.guild_id,
        user_id: payload.user.id,
    }))
}

/// Apply GUILD_MEMBERS_CHUNK: absorb one slice of a requested member list.
/// Chunked members are already counted in the reported member count, so the
/// count is left alone.
pub fn members_chunk(
    state: &mut ClientState,
    payload: &GuildMembersChunkPayload,
) -> Option<ClientEvent> {
    for member in &payload.members {
        state.upsert_user(&member.user);
    }

    let Some(guild) = state.guild_mut(payload.guild_id) else {
        warn!(guild_id = %payload.guild_id, "members chunk for unknown guild");
        return None;
    };
    for member in &payload.members {
        guild.add_member(member, true);
    }
    debug!(
        guild_id = %payload.guild_id,
        received = payload.members.len(),
        cached = guild.members.len(),
        "absorbed members chunk"
    );
    Some(ClientEvent::GuildMembersChunk(GuildMembersChunkEvent {
        guild_id: payload.guild_id,
        received: payload.members.len(),
    }))
}
