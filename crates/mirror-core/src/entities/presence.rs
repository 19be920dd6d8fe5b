//! Presence entity - a user's online status within a guild

use serde::{Deserialize, Serialize};

use crate::payloads::PresencePayload;
use crate::value_objects::Snowflake;

/// User online status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    /// User is online and active
    Online,
    /// User is idle (away from keyboard)
    Idle,
    /// Do not disturb
    Dnd,
    /// User is offline (or invisible)
    #[default]
    Offline,
}

impl PresenceStatus {
    /// Check if this status should be visible to others
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Offline)
    }
}

impl std::fmt::Display for PresenceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online => write!(f, "online"),
            Self::Idle => write!(f, "idle"),
            Self::Dnd => write!(f, "dnd"),
            Self::Offline => write!(f, "offline"),
        }
    }
}

impl std::str::FromStr for PresenceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(Self::Online),
            "idle" => Ok(Self::Idle),
            "dnd" => Ok(Self::Dnd),
            "offline" => Ok(Self::Offline),
            _ => Err(format!("Invalid status: {s}")),
        }
    }
}

/// Cached presence, keyed by user id in the guild presence store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presence {
    pub user_id: Snowflake,
    pub status: PresenceStatus,
    pub activity: Option<String>,
}

impl Presence {
    /// Build a presence from its wire payload
    pub fn new(payload: &PresencePayload) -> Self {
        let mut presence = Self {
            user_id: payload.user.id,
            status: PresenceStatus::Offline,
            activity: None,
        };
        presence.patch(payload);
        presence
    }

    /// Absorb a payload; absent fields retain their cached value
    pub fn patch(&mut self, payload: &PresencePayload) {
        if let Some(status) = &payload.status {
            self.status = status.parse().unwrap_or_default();
        }
        if let Some(game) = &payload.game {
            self.activity = game.as_ref().map(|g| g.name.clone());
        }
    }
}
