//! Emoji entity - a custom guild emoji

use chrono::{DateTime, Utc};

use crate::payloads::EmojiPayload;
use crate::value_objects::Snowflake;

/// Cached custom emoji
///
/// Owned by its guild's emoji store; the client-wide emoji map is an
/// id-to-guild index into these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emoji {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub name: String,
    pub roles: Vec<Snowflake>,
    pub require_colons: bool,
    pub managed: bool,
    pub animated: bool,
}

impl Emoji {
    /// Build an emoji from its wire payload
    pub fn new(guild_id: Snowflake, payload: &EmojiPayload) -> Self {
        let mut emoji = Self {
            id: payload.id,
            guild_id,
            name: String::new(),
            roles: Vec::new(),
            require_colons: true,
            managed: false,
            animated: false,
        };
        emoji.patch(payload);
        emoji
    }

    /// Absorb a payload; absent fields retain their cached value
    pub fn patch(&mut self, payload: &EmojiPayload) {
        if let Some(name) = &payload.name {
            self.name = name.clone();
        }
        if let Some(roles) = &payload.roles {
            self.roles = roles.clone();
        }
        if let Some(require_colons) = payload.require_colons {
            self.require_colons = require_colons;
        }
        if let Some(managed) = payload.managed {
            self.managed = managed;
        }
        if let Some(animated) = payload.animated {
            self.animated = animated;
        }
    }

    /// Message-embeddable form, e.g. `<:partyparrot:1234>`
    pub fn mention(&self) -> String {
        let prefix = if self.animated { "a" } else { "" };
        format!("<{}:{}:{}>", prefix, self.name, self.id)
    }

    /// When this emoji was created, derived from its id
    pub fn created_at(&self) -> DateTime<Utc> {
        self.id.created_at()
    }
}
