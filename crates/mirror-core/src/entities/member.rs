//! Member entity - a user's membership in a guild

use chrono::{DateTime, Utc};

use crate::payloads::MemberPayload;
use crate::value_objects::Snowflake;

use super::voice_state::VoiceState;

/// Cached guild member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildMember {
    pub guild_id: Snowflake,
    pub user_id: Snowflake,
    pub nickname: Option<String>,
    pub roles: Vec<Snowflake>,
    pub joined_at: Option<DateTime<Utc>>,
    pub deaf: bool,
    pub mute: bool,
    voice_state: Option<VoiceState>,
}

impl GuildMember {
    /// Build a member from its wire payload
    pub fn new(guild_id: Snowflake, payload: &MemberPayload) -> Self {
        let mut member = Self {
            guild_id,
            user_id: payload.user.id,
            nickname: None,
            roles: Vec::new(),
            joined_at: None,
            deaf: false,
            mute: false,
            voice_state: None,
        };
        member.patch(payload);
        member
    }

    /// Absorb a payload; absent fields retain their cached value
    pub fn patch(&mut self, payload: &MemberPayload) {
        if let Some(nick) = &payload.nick {
            self.nickname = nick.clone();
        }
        if let Some(roles) = &payload.roles {
            self.roles = roles.clone();
        }
        if let Some(joined_at) = payload.joined_at {
            self.joined_at = Some(joined_at);
        }
        if let Some(deaf) = payload.deaf {
            self.deaf = deaf;
        }
        if let Some(mute) = payload.mute {
            self.mute = mute;
        }
    }

    /// Get display name (nickname if set, otherwise the given username)
    pub fn display_name<'a>(&'a self, username: &'a str) -> &'a str {
        self.nickname.as_deref().unwrap_or(username)
    }

    /// Check if the member has a specific role
    #[inline]
    pub fn has_role(&self, role_id: Snowflake) -> bool {
        self.roles.contains(&role_id)
    }

    /// The member's voice state, if any
    pub fn voice_state(&self) -> Option<&VoiceState> {
        self.voice_state.as_ref()
    }

    /// Attach or replace the embedded voice state
    pub fn set_voice_state(&mut self, state: VoiceState) {
        self.voice_state = Some(state);
    }

    /// Drop the embedded voice state, returning it if one was attached
    pub fn clear_voice_state(&mut self) -> Option<VoiceState> {
        self.voice_state.take()
    }
}
