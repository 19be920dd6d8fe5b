//! # mirror-core
//!
//! Domain layer containing cached entities, the generic entity store, wire
//! payload structs, and value objects. This crate has zero dependencies on
//! transport (gateway, async runtime, etc.).

pub mod entities;
pub mod events;
pub mod payloads;
pub mod store;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Channel, ChannelType, Emoji, Guild, GuildMember, Message, MessageReaction, Presence,
    PresenceStatus, ReactionEmoji, ReactionKey, Role, User, VoiceState,
};
pub use events::ClientEvent;
pub use store::EntityStore;
pub use value_objects::{Permissions, Snowflake, SnowflakeGenerator, SnowflakeParseError};
