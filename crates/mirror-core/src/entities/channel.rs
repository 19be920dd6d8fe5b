//! Channel entity
//!
//! Channels live inside a guild's channel store and carry their own message
//! cache. Pin notifications pass through the cache untouched, so no pin
//! state is tracked here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::message::Message;
use crate::payloads::ChannelPayload;
use crate::store::EntityStore;
use crate::value_objects::Snowflake;

/// Kind of a guild channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelType {
    Text,
    Voice,
    Category,
    Unknown,
}

impl From<u8> for ChannelType {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Text,
            2 => Self::Voice,
            4 => Self::Category,
            _ => Self::Unknown,
        }
    }
}

/// Cached guild channel
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    id: Snowflake,
    pub guild_id: Snowflake,
    pub name: String,
    pub kind: ChannelType,
    pub topic: Option<String>,
    pub position: i32,
    pub parent_id: Option<Snowflake>,
    pub nsfw: bool,
    /// Recently seen messages, keyed by message id
    pub messages: EntityStore<Snowflake, Message>,
}

impl Channel {
    /// Build a channel from its payload
    pub fn new(guild_id: Snowflake, payload: &ChannelPayload) -> Self {
        let mut channel = Self {
            id: payload.id,
            guild_id,
            name: String::new(),
            kind: payload.kind.map(ChannelType::from).unwrap_or(ChannelType::Text),
            topic: None,
            position: 0,
            parent_id: None,
            nsfw: false,
            messages: EntityStore::new(),
        };
        channel.patch(payload);
        channel
    }

    /// Apply a partial update: present fields overwrite, absent fields keep
    /// their cached value.
    pub fn patch(&mut self, payload: &ChannelPayload) {
        if let Some(name) = &payload.name {
            self.name = name.clone();
        }
        if let Some(kind) = payload.kind {
            self.kind = ChannelType::from(kind);
        }
        if let Some(topic) = &payload.topic {
            self.topic = topic.clone();
        }
        if let Some(position) = payload.position {
            self.position = position;
        }
        if let Some(parent_id) = payload.parent_id {
            self.parent_id = parent_id;
        }
        if let Some(nsfw) = payload.nsfw {
            self.nsfw = nsfw;
        }
    }

    /// Channel identifier
    #[inline]
    pub fn id(&self) -> Snowflake {
        self.id
    }

    /// Creation time, decoded from the identifier
    pub fn created_at(&self) -> DateTime<Utc> {
        self.id.created_at()
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        self.kind == ChannelType::Text
    }

    #[inline]
    pub fn is_voice(&self) -> bool {
        self.kind == ChannelType::Voice
    }

    #[inline]
    pub fn is_category(&self) -> bool {
        self.kind == ChannelType::Category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_payload() {
        let payload: ChannelPayload = serde_json::from_value(serde_json::json!({
            "id": "300000000000000",
            "name": "general",
            "type": 0,
            "topic": "chatter",
            "position": 1,
            "nsfw": false
        }))
        .unwrap();
        let channel = Channel::new(Snowflake::new(100), &payload);
        assert_eq!(channel.name, "general");
        assert!(channel.is_text());
        assert_eq!(channel.topic.as_deref(), Some("chatter"));
        assert_eq!(channel.guild_id, Snowflake::new(100));
    }

    #[test]
    fn test_patch_retains_absent_fields() {
        let initial: ChannelPayload = serde_json::from_value(serde_json::json!({
            "id": "300000000000000",
            "name": "general",
            "type": 0,
            "topic": "chatter"
        }))
        .unwrap();
        let mut channel = Channel::new(Snowflake::new(100), &initial);

        let update: ChannelPayload = serde_json::from_value(serde_json::json!({
            "id": "300000000000000",
            "name": "renamed"
        }))
        .unwrap();
        channel.patch(&update);
        assert_eq!(channel.name, "renamed");
        assert_eq!(channel.topic.as_deref(), Some("chatter"));
    }

    #[test]
    fn test_null_topic_clears() {
        let initial: ChannelPayload = serde_json::from_value(serde_json::json!({
            "id": "300000000000000",
            "name": "general",
            "topic": "chatter"
        }))
        .unwrap();
        let mut channel = Channel::new(Snowflake::new(100), &initial);

        let update: ChannelPayload = serde_json::from_value(serde_json::json!({
            "id": "300000000000000",
            "topic": null
        }))
        .unwrap();
        channel.patch(&update);
        assert!(channel.topic.is_none());
    }

    #[test]
    fn test_unknown_type_maps_to_unknown() {
        assert_eq!(ChannelType::from(99), ChannelType::Unknown);
        assert_eq!(ChannelType::from(2), ChannelType::Voice);
        assert_eq!(ChannelType::from(4), ChannelType::Category);
    }
}
