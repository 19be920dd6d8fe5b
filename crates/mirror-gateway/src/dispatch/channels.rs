//! Channel reducers

use chrono::{DateTime, TimeZone, Utc};
use tracing::debug;

use mirror_core::events::ChannelPinsUpdateEvent;
use mirror_core::ClientEvent;

use crate::events::payloads::ChannelPinsUpdatePayload;
use crate::state::ClientState;

/// Apply CHANNEL_PINS_UPDATE: pure pass-through. The raw timestamp becomes
/// a structured time and the notification carries the channel's routing
/// ids; no cached state changes. A pin update for an unknown channel is
/// dropped.
pub fn channel_pins_update(
    state: &mut ClientState,
    payload: &ChannelPinsUpdatePayload,
) -> Option<ClientEvent> {
    let Some(channel) = state.channel(payload.channel_id) else {
        debug!(channel_id = %payload.channel_id, "pins update for unknown channel");
        return None;
    };
    let last_pin_at: Option<DateTime<Utc>> = payload
        .last_pin_timestamp
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single());

    Some(ClientEvent::ChannelPinsUpdate(ChannelPinsUpdateEvent {
        guild_id: Some(channel.guild_id),
        channel_id: payload.channel_id,
        last_pin_at,
    }))
}
