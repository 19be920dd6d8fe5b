//! Cached domain entities

pub mod channel;
pub mod emoji;
pub mod guild;
pub mod member;
pub mod message;
pub mod presence;
pub mod reaction;
pub mod role;
pub mod user;
pub mod voice_state;

pub use channel::{Channel, ChannelType};
pub use emoji::Emoji;
pub use guild::{
    ExplicitContentFilter, Guild, MfaLevel, NotificationLevel, VerificationLevel,
};
pub use member::GuildMember;
pub use message::Message;
pub use presence::{Presence, PresenceStatus};
pub use reaction::{MessageReaction, ReactionEmoji, ReactionKey};
pub use role::Role;
pub use user::User;
pub use voice_state::VoiceState;
