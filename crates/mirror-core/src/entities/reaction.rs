//! Reaction entry - an aggregated emoji reaction on a message
//!
//! A reaction entry is keyed by the custom emoji id when one exists, or by
//! the unicode name otherwise. A stored entry always has count >= 1:
//! reaching zero removes it from the message's reaction container.

use serde::Serialize;
use std::collections::HashSet;

use crate::payloads::{EmojiRefPayload, ReactionPayload};
use crate::value_objects::Snowflake;

/// Key of a reaction entry within a message
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReactionKey {
    /// Custom emoji, identified by snowflake
    Custom(Snowflake),
    /// Unicode emoji, identified by its literal name
    Unicode(String),
}

impl ReactionKey {
    /// Derive the key from an emoji reference: the id when present,
    /// otherwise the unicode name.
    pub fn from_ref(emoji: &EmojiRefPayload) -> Self {
        match emoji.id {
            Some(id) => Self::Custom(id),
            None => Self::Unicode(emoji.name.clone().unwrap_or_default()),
        }
    }
}

/// Emoji identity carried by a reaction entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionEmoji {
    pub id: Option<Snowflake>,
    pub name: String,
}

impl ReactionEmoji {
    /// Build from an emoji reference payload
    pub fn new(emoji: &EmojiRefPayload) -> Self {
        Self {
            id: emoji.id,
            name: emoji.name.clone().unwrap_or_default(),
        }
    }

    /// The key this emoji occupies in a reaction container
    pub fn key(&self) -> ReactionKey {
        match self.id {
            Some(id) => ReactionKey::Custom(id),
            None => ReactionKey::Unicode(self.name.clone()),
        }
    }
}

/// Aggregated reaction entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageReaction {
    pub emoji: ReactionEmoji,
    count: u32,
    pub me: bool,
    users: HashSet<Snowflake>,
}

impl MessageReaction {
    /// Create an entry with the given starting count
    pub fn new(emoji: ReactionEmoji, count: u32, me: bool) -> Self {
        Self {
            emoji,
            count,
            me,
            users: HashSet::new(),
        }
    }

    /// Build an entry from a message payload's aggregated reaction
    pub fn from_payload(payload: &ReactionPayload) -> Self {
        Self::new(ReactionEmoji::new(&payload.emoji), payload.count, payload.me)
    }

    /// Current count
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Increment the count by one
    pub fn increment(&mut self) {
        self.count += 1;
    }

    /// Decrement the count by one, stopping at zero
    pub fn decrement(&mut self) -> u32 {
        self.count = self.count.saturating_sub(1);
        self.count
    }

    /// Record a locally known reacting user
    pub fn record_user(&mut self, user_id: Snowflake) {
        self.users.insert(user_id);
    }

    /// Forget a reacting user, reporting whether they were recorded
    pub fn forget_user(&mut self, user_id: Snowflake) -> bool {
        self.users.remove(&user_id)
    }

    /// The locally known reacting users
    pub fn users(&self) -> &HashSet<Snowflake> {
        &self.users
    }
}
