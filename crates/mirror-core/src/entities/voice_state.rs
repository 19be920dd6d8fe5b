//! Voice state - embedded in the member it belongs to

use crate::payloads::VoiceStatePayload;
use crate::value_objects::Snowflake;

/// A member's voice connection state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceState {
    pub channel_id: Option<Snowflake>,
    pub session_id: String,
    pub deaf: bool,
    pub mute: bool,
    pub self_deaf: bool,
    pub self_mute: bool,
    pub suppress: bool,
}

impl VoiceState {
    /// Build a voice state from its wire payload
    pub fn new(payload: &VoiceStatePayload) -> Self {
        Self {
            channel_id: payload.channel_id,
            session_id: payload.session_id.clone(),
            deaf: payload.deaf,
            mute: payload.mute,
            self_deaf: payload.self_deaf,
            self_mute: payload.self_mute,
            suppress: payload.suppress,
        }
    }

    /// Whether the member can currently hear anything
    #[inline]
    pub fn is_deafened(&self) -> bool {
        self.deaf || self.self_deaf
    }

    /// Whether the member can currently speak
    #[inline]
    pub fn is_muted(&self) -> bool {
        self.mute || self.self_mute || self.suppress
    }
}
