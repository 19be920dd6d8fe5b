//! Client-wide cached state
//!
//! One instance mirrors everything the session can see: the guild store,
//! the user store, and flat lookup indexes that map channel and emoji ids
//! back to their owning guild. Guilds own their nested entities; the
//! indexes hold ids only, so there is exactly one copy of each entity.

use mirror_core::payloads::UserPayload;
use mirror_core::{Channel, Emoji, EntityStore, Guild, Snowflake, User};

/// Everything the client currently mirrors
#[derive(Debug, Default)]
pub struct ClientState {
    /// The client's own user id, once known
    user_id: Option<Snowflake>,
    pub guilds: EntityStore<Snowflake, Guild>,
    pub users: EntityStore<Snowflake, User>,
    /// channel id -> owning guild id
    channel_index: EntityStore<Snowflake, Snowflake>,
    /// emoji id -> owning guild id
    emoji_index: EntityStore<Snowflake, Snowflake>,
}

impl ClientState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The client's own user id, once identified
    #[inline]
    pub fn user_id(&self) -> Option<Snowflake> {
        self.user_id
    }

    /// Record the client's own user id
    pub fn set_user(&mut self, user_id: Snowflake) {
        self.user_id = Some(user_id);
    }

    pub fn guild(&self, guild_id: Snowflake) -> Option<&Guild> {
        self.guilds.get(&guild_id)
    }

    pub fn guild_mut(&mut self, guild_id: Snowflake) -> Option<&mut Guild> {
        self.guilds.get_mut(&guild_id)
    }

    /// Insert a guild and index its channels and emojis
    pub fn insert_guild(&mut self, guild: Guild) {
        let guild_id = guild.id();
        self.guilds.set(guild_id, guild);
        self.reindex_guild(guild_id);
    }

    /// Remove a guild and every index entry pointing at it
    pub fn remove_guild(&mut self, guild_id: Snowflake) -> Option<Guild> {
        let guild = self.guilds.remove(&guild_id)?;
        self.channel_index.retain(|_, owner| *owner != guild_id);
        self.emoji_index.retain(|_, owner| *owner != guild_id);
        Some(guild)
    }

    /// Refresh the channel and emoji indexes for one guild. Upserting never
    /// removes entries; deletions go through [`Self::unlink_emoji`] and
    /// [`Self::remove_guild`].
    pub fn reindex_guild(&mut self, guild_id: Snowflake) {
        let (channel_ids, emoji_ids) = match self.guilds.get(&guild_id) {
            Some(guild) => (
                guild.channels.keys().copied().collect::<Vec<_>>(),
                guild.emojis.keys().copied().collect::<Vec<_>>(),
            ),
            None => return,
        };
        for channel_id in channel_ids {
            self.channel_index.set(channel_id, guild_id);
        }
        for emoji_id in emoji_ids {
            self.emoji_index.set(emoji_id, guild_id);
        }
    }

    /// The guild a channel belongs to, per the index
    pub fn channel_guild_id(&self, channel_id: Snowflake) -> Option<Snowflake> {
        self.channel_index.get(&channel_id).copied()
    }

    pub fn channel(&self, channel_id: Snowflake) -> Option<&Channel> {
        let guild_id = self.channel_guild_id(channel_id)?;
        self.guilds.get(&guild_id)?.channels.get(&channel_id)
    }

    pub fn channel_mut(&mut self, channel_id: Snowflake) -> Option<&mut Channel> {
        let guild_id = self.channel_guild_id(channel_id)?;
        self.guilds.get_mut(&guild_id)?.channels.get_mut(&channel_id)
    }

    /// Point an emoji id at its owning guild
    pub fn link_emoji(&mut self, emoji_id: Snowflake, guild_id: Snowflake) {
        self.emoji_index.set(emoji_id, guild_id);
    }

    /// Drop an emoji from the index, reporting whether it was linked
    pub fn unlink_emoji(&mut self, emoji_id: Snowflake) -> bool {
        self.emoji_index.remove(&emoji_id).is_some()
    }

    /// The guild an emoji belongs to, per the index
    pub fn emoji_guild_id(&self, emoji_id: Snowflake) -> Option<Snowflake> {
        self.emoji_index.get(&emoji_id).copied()
    }

    pub fn emoji(&self, emoji_id: Snowflake) -> Option<&Emoji> {
        let guild_id = self.emoji_guild_id(emoji_id)?;
        self.guilds.get(&guild_id)?.emojis.get(&emoji_id)
    }

    /// Insert or update a user in the client-wide user store
    pub fn upsert_user(&mut self, payload: &UserPayload) -> &mut User {
        let user_id = payload.id;
        if let Some(user) = self.users.get_mut(&user_id) {
            user.patch(payload);
        }
        self.users.get_or_insert_with(user_id, || User::new(payload))
    }
}
