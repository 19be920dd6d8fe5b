//! Emoji reducers

use tracing::{debug, warn};

use mirror_core::events::GuildEmojisUpdateEvent;
use mirror_core::{ClientEvent, Emoji};

use crate::events::payloads::GuildEmojisUpdatePayload;
use crate::state::ClientState;

/// Apply GUILD_EMOJIS_UPDATE: the payload carries the guild's authoritative
/// emoji set. Incoming emojis are upserted; any cached emoji missing from
/// the payload is deleted from both the guild's emoji store and the
/// client-wide emoji index in the same pass.
pub fn guild_emojis_update(
    state: &mut ClientState,
    payload: &GuildEmojisUpdatePayload,
) -> Option<ClientEvent> {
    let guild_id = payload.guild_id;
    let stale = {
        let Some(guild) = state.guild_mut(guild_id) else {
            warn!(guild_id = %guild_id, "emojis update for unknown guild");
            return None;
        };

        let mut seen = Vec::with_capacity(payload.emojis.len());
        for entry in &payload.emojis {
            seen.push(entry.id);
            match guild.emojis.get_mut(&entry.id) {
                Some(emoji) => emoji.patch(entry),
                None => {
                    guild.emojis.set(entry.id, Emoji::new(guild_id, entry));
                }
            }
        }

        let stale: Vec<_> = guild
            .emojis
            .keys()
            .filter(|id| !seen.contains(*id))
            .copied()
            .collect();
        for id in &stale {
            guild.emojis.remove(id);
        }
        stale
    };

    for entry in &payload.emojis {
        state.link_emoji(entry.id, guild_id);
    }
    for id in &stale {
        state.unlink_emoji(*id);
    }
    debug!(
        guild_id = %guild_id,
        upserted = payload.emojis.len(),
        deleted = stale.len(),
        "synchronized emoji set"
    );
    Some(ClientEvent::GuildEmojisUpdate(GuildEmojisUpdateEvent {
        guild_id,
    }))
}
