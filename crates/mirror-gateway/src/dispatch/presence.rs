//! Presence reducers

use tracing::debug;

use mirror_core::events::PresenceUpdateEvent;
use mirror_core::{ClientEvent, Presence};

use crate::events::payloads::PresenceUpdatePayload;
use crate::state::ClientState;

/// Apply PRESENCE_UPDATE: upsert the presence in its guild's presence store
pub fn presence_update(
    state: &mut ClientState,
    payload: &PresenceUpdatePayload,
) -> Option<ClientEvent> {
    state.upsert_user(&payload.presence.user);

    let user_id = payload.presence.user.id;
    let Some(guild) = state.guild_mut(payload.guild_id) else {
        debug!(guild_id = %payload.guild_id, "presence for unknown guild");
        return None;
    };
    match guild.presences.get_mut(&user_id) {
        Some(presence) => presence.patch(&payload.presence),
        None => {
            guild
                .presences
                .set(user_id, Presence::new(&payload.presence));
        }
    }
    let status = guild
        .presences
        .get(&user_id)
        .map(|presence| presence.status)?;

    Some(ClientEvent::PresenceUpdate(PresenceUpdateEvent {
        guild_id: payload.guild_id,
        user_id,
        status,
    }))
}
