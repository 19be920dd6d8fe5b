//! Role entity - a guild role with permissions

use chrono::{DateTime, Utc};

use crate::payloads::RolePayload;
use crate::value_objects::{Permissions, Snowflake};

/// Cached guild role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub name: String,
    pub color: u32,
    pub hoist: bool,
    pub position: i32,
    pub permissions: Permissions,
    pub managed: bool,
    pub mentionable: bool,
}

impl Role {
    /// Build a role from its wire payload
    pub fn new(guild_id: Snowflake, payload: &RolePayload) -> Self {
        let mut role = Self {
            id: payload.id,
            guild_id,
            name: String::new(),
            color: 0,
            hoist: false,
            position: 0,
            permissions: Permissions::empty(),
            managed: false,
            mentionable: false,
        };
        role.patch(payload);
        role
    }

    /// Absorb a payload; absent fields retain their cached value
    pub fn patch(&mut self, payload: &RolePayload) {
        if let Some(name) = &payload.name {
            self.name = name.clone();
        }
        if let Some(color) = payload.color {
            self.color = color;
        }
        if let Some(hoist) = payload.hoist {
            self.hoist = hoist;
        }
        if let Some(position) = payload.position {
            self.position = position;
        }
        if let Some(permissions) = payload.permissions {
            self.permissions = permissions;
        }
        if let Some(managed) = payload.managed {
            self.managed = managed;
        }
        if let Some(mentionable) = payload.mentionable {
            self.mentionable = mentionable;
        }
    }

    /// The default role shares its id with the guild
    #[inline]
    pub fn is_default(&self) -> bool {
        self.id == self.guild_id
    }

    /// Check if this role grants a specific permission
    #[inline]
    pub fn has_permission(&self, permission: Permissions) -> bool {
        self.permissions.has(permission)
    }

    /// When this role was created, derived from its id
    pub fn created_at(&self) -> DateTime<Utc> {
        self.id.created_at()
    }

    /// Get the color as a hex string (without #)
    pub fn color_hex(&self) -> String {
        format!("{:06x}", self.color)
    }
}
