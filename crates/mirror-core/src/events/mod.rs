//! Client events

pub mod client_event;

pub use client_event::{
    ChannelPinsUpdateEvent, ClientEvent, GuildCreateEvent, GuildDeleteEvent,
    GuildEmojisUpdateEvent, GuildMemberAddEvent, GuildMemberRemoveEvent, GuildMembersChunkEvent,
    GuildUpdateEvent, MessageCreateEvent, MessageReactionAddEvent, MessageReactionRemoveEvent,
    PresenceUpdateEvent,
};
