//! Message and reaction reducers

use tracing::debug;

use mirror_core::entities::{Message, ReactionEmoji, ReactionKey};
use mirror_core::events::{
    MessageCreateEvent, MessageReactionAddEvent, MessageReactionRemoveEvent,
};
use mirror_core::payloads::MessagePayload;
use mirror_core::ClientEvent;

use crate::events::payloads::ReactionActionPayload;
use crate::state::ClientState;

/// Apply MESSAGE_CREATE: cache the message in its channel. A message for a
/// channel the client does not mirror is dropped.
pub fn message_create(state: &mut ClientState, payload: &MessagePayload) -> Option<ClientEvent> {
    if let Some(author) = &payload.author {
        state.upsert_user(author);
    }

    let guild_id = state.channel_guild_id(payload.channel_id);
    let Some(channel) = state.channel_mut(payload.channel_id) else {
        debug!(channel_id = %payload.channel_id, "message for unknown channel");
        return None;
    };
    channel.messages.set(payload.id, Message::new(payload));

    Some(ClientEvent::MessageCreate(MessageCreateEvent {
        message_id: payload.id,
        channel_id: payload.channel_id,
        guild_id,
    }))
}

/// Apply MESSAGE_REACTION_ADD: bump or create the message's reaction entry
/// and record the reacting user
pub fn reaction_add(state: &mut ClientState, payload: &ReactionActionPayload) -> Option<ClientEvent> {
    let me = state.user_id() == Some(payload.user_id);
    let channel = state.channel_mut(payload.channel_id)?;
    let message = channel.messages.get_mut(&payload.message_id)?;

    let reaction = message.add_reaction(ReactionEmoji::new(&payload.emoji), payload.user_id, me);
    Some(ClientEvent::MessageReactionAdd(MessageReactionAddEvent {
        message_id: payload.message_id,
        channel_id: payload.channel_id,
        user_id: payload.user_id,
        reaction,
    }))
}

/// Apply MESSAGE_REACTION_REMOVE: counted deletion. The entry's count drops
/// by one, the user is forgotten if locally known, and the entry disappears
/// once the count reaches zero. A removal for an untracked message or entry
/// is silently ignored.
pub fn reaction_remove(
    state: &mut ClientState,
    payload: &ReactionActionPayload,
) -> Option<ClientEvent> {
    let channel = state.channel_mut(payload.channel_id)?;
    let message = channel.messages.get_mut(&payload.message_id)?;

    let key = ReactionKey::from_ref(&payload.emoji);
    let reaction = message.remove_reaction(&key, Some(payload.user_id))?;
    debug!(
        message_id = %payload.message_id,
        count = reaction.count(),
        "reaction removed"
    );
    Some(ClientEvent::MessageReactionRemove(
        MessageReactionRemoveEvent {
            message_id: payload.message_id,
            channel_id: payload.channel_id,
            user_id: payload.user_id,
            reaction,
        },
    ))
}
