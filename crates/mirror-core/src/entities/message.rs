//! Message entity with an aggregated reaction container
//!
//! Only the fields the cache needs to track reactions live here. The
//! reaction container is keyed by [`ReactionKey`] and an entry is removed as
//! soon as its count falls to zero, so a cached entry always has count >= 1.

use chrono::{DateTime, Utc};

use crate::entities::reaction::{MessageReaction, ReactionEmoji, ReactionKey};
use crate::payloads::MessagePayload;
use crate::store::EntityStore;
use crate::value_objects::Snowflake;

/// Cached message
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    id: Snowflake,
    pub channel_id: Snowflake,
    pub author_id: Option<Snowflake>,
    pub content: String,
    /// Aggregated reactions, keyed by emoji identity
    pub reactions: EntityStore<ReactionKey, MessageReaction>,
}

impl Message {
    /// Build a message from its creation payload
    pub fn new(payload: &MessagePayload) -> Self {
        let mut message = Self {
            id: payload.id,
            channel_id: payload.channel_id,
            author_id: payload.author.as_ref().map(|user| user.id),
            content: payload.content.clone().unwrap_or_default(),
            reactions: EntityStore::new(),
        };
        message.patch(payload);
        message
    }

    /// Apply a partial update: present fields overwrite, absent fields keep
    /// their cached value.
    pub fn patch(&mut self, payload: &MessagePayload) {
        if let Some(content) = &payload.content {
            self.content = content.clone();
        }
        if let Some(author) = &payload.author {
            self.author_id = Some(author.id);
        }
        if let Some(reactions) = &payload.reactions {
            for entry in reactions {
                let reaction = MessageReaction::from_payload(entry);
                self.reactions.set(reaction.emoji.key(), reaction);
            }
        }
    }

    /// Message identifier
    #[inline]
    pub fn id(&self) -> Snowflake {
        self.id
    }

    /// Creation time, decoded from the identifier
    pub fn created_at(&self) -> DateTime<Utc> {
        self.id.created_at()
    }

    /// Look up a reaction entry
    pub fn reaction(&self, key: &ReactionKey) -> Option<&MessageReaction> {
        self.reactions.get(key)
    }

    /// Register one added reaction: bump the existing entry or create a new
    /// one at count 1. Returns a snapshot of the resulting entry.
    pub fn add_reaction(
        &mut self,
        emoji: ReactionEmoji,
        user_id: Snowflake,
        me: bool,
    ) -> MessageReaction {
        let key = emoji.key();
        let reaction = self
            .reactions
            .get_or_insert_with(key, || MessageReaction::new(emoji, 0, false));
        reaction.increment();
        reaction.record_user(user_id);
        if me {
            reaction.me = true;
        }
        reaction.clone()
    }

    /// Register one removed reaction. Decrements the entry's count, forgets
    /// the user when one is given, and deletes the entry once the count
    /// reaches zero. Returns a snapshot of the affected entry, or `None`
    /// when no entry existed for the key.
    pub fn remove_reaction(
        &mut self,
        key: &ReactionKey,
        user_id: Option<Snowflake>,
    ) -> Option<MessageReaction> {
        let emptied = {
            let reaction = self.reactions.get_mut(key)?;
            if let Some(user_id) = user_id {
                reaction.forget_user(user_id);
            }
            reaction.decrement() == 0
        };

        if emptied {
            self.reactions.remove(key)
        } else {
            self.reactions.get(key).cloned()
        }
    }
}
