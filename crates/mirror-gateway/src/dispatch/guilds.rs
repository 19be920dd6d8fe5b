//! Guild lifecycle reducers

use tracing::{debug, info};

use mirror_core::events::{GuildCreateEvent, GuildDeleteEvent, GuildUpdateEvent};
use mirror_core::payloads::GuildPayload;
use mirror_core::{ClientEvent, Guild};

use crate::events::payloads::GuildDeletePayload;
use crate::state::ClientState;

/// Apply GUILD_CREATE: insert a new guild, or absorb the full state of a
/// guild previously cached as an unavailable stub. No event is emitted for
/// an unavailable stub; the create surfaces once the full state arrives.
pub fn guild_create(state: &mut ClientState, payload: &GuildPayload) -> Option<ClientEvent> {
    absorb_users(state, payload);

    let guild_id = payload.id;
    let known = state.guild(guild_id).is_some();
    match state.guild_mut(guild_id) {
        Some(guild) => guild.patch(payload),
        None => state.insert_guild(Guild::new(payload)),
    }
    if known {
        state.reindex_guild(guild_id);
    }

    let guild = state.guild(guild_id)?;
    if !guild.available {
        debug!(guild_id = %guild_id, "cached unavailable guild stub");
        return None;
    }
    info!(guild_id = %guild_id, members = guild.members.len(), "guild cached");
    Some(ClientEvent::GuildCreate(GuildCreateEvent { guild_id }))
}

/// Apply GUILD_UPDATE: patch the cached guild, creating it when the update
/// arrives before its create
pub fn guild_update(state: &mut ClientState, payload: &GuildPayload) -> Option<ClientEvent> {
    absorb_users(state, payload);

    let guild_id = payload.id;
    match state.guild_mut(guild_id) {
        Some(guild) => guild.patch(payload),
        None => state.insert_guild(Guild::new(payload)),
    }
    state.reindex_guild(guild_id);
    Some(ClientEvent::GuildUpdate(GuildUpdateEvent { guild_id }))
}

/// Apply GUILD_DELETE: an unavailable marker flips the cached guild's
/// availability flag; otherwise the guild was left and is evicted outright
pub fn guild_delete(state: &mut ClientState, payload: &GuildDeletePayload) -> Option<ClientEvent> {
    let guild_id = payload.id;
    if payload.unavailable {
        let guild = state.guild_mut(guild_id)?;
        guild.available = false;
    } else {
        state.remove_guild(guild_id)?;
        info!(guild_id = %guild_id, "guild evicted");
    }
    Some(ClientEvent::GuildDelete(GuildDeleteEvent {
        guild_id,
        unavailable: payload.unavailable,
    }))
}

/// Lift every user embedded in a guild payload into the client user store
fn absorb_users(state: &mut ClientState, payload: &GuildPayload) {
    if let Some(members) = &payload.members {
        for member in members {
            state.upsert_user(&member.user);
        }
    }
    if let Some(presences) = &payload.presences {
        for presence in presences {
            state.upsert_user(&presence.user);
        }
    }
}
