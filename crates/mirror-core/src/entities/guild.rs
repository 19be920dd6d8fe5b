//! Guild aggregate
//!
//! A guild owns nested stores for channels, emojis, members, presences, and
//! roles, and absorbs both full create payloads and partial update payloads
//! through the same [`Guild::patch`] path. Patch is idempotent: replaying a
//! payload leaves the aggregate unchanged. For collection fields, payloads
//! upsert and never delete; pruning stale emoji happens in the dedicated
//! emoji reconciliation pass, not here.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::entities::channel::Channel;
use crate::entities::emoji::Emoji;
use crate::entities::member::GuildMember;
use crate::entities::presence::Presence;
use crate::entities::role::Role;
use crate::entities::voice_state::VoiceState;
use crate::payloads::{GuildPayload, MemberPayload};
use crate::store::EntityStore;
use crate::value_objects::Snowflake;

/// Default message notification setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationLevel {
    #[default]
    Everything,
    OnlyMentions,
}

impl From<u8> for NotificationLevel {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::OnlyMentions,
            _ => Self::Everything,
        }
    }
}

/// Explicit media content filter setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplicitContentFilter {
    #[default]
    Disabled,
    MembersWithoutRoles,
    AllMembers,
}

impl From<u8> for ExplicitContentFilter {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::MembersWithoutRoles,
            2 => Self::AllMembers,
            _ => Self::Disabled,
        }
    }
}

/// Verification requirement before members may speak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerificationLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl From<u8> for VerificationLevel {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Low,
            2 => Self::Medium,
            3 => Self::High,
            4 => Self::VeryHigh,
            _ => Self::None,
        }
    }
}

/// Two-factor requirement for moderation actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MfaLevel {
    #[default]
    None,
    Elevated,
}

impl From<u8> for MfaLevel {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Elevated,
            _ => Self::None,
        }
    }
}

/// Cached guild aggregate
#[derive(Debug, Clone, PartialEq)]
pub struct Guild {
    id: Snowflake,
    /// False while the guild is an unavailable stub
    pub available: bool,
    pub name: String,
    pub icon: Option<String>,
    pub splash: Option<String>,
    pub owner_id: Option<Snowflake>,
    pub large: bool,
    member_count: u64,
    pub default_message_notifications: NotificationLevel,
    pub explicit_content_filter: ExplicitContentFilter,
    pub verification_level: VerificationLevel,
    pub mfa_level: MfaLevel,
    pub region: Option<String>,
    pub features: Vec<String>,
    pub afk_timeout: u32,
    pub embed_enabled: bool,
    pub widget_enabled: bool,
    afk_channel_id: Option<Snowflake>,
    system_channel_id: Option<Snowflake>,
    embed_channel_id: Option<Snowflake>,
    widget_channel_id: Option<Snowflake>,
    pub application_id: Option<Snowflake>,
    pub channels: EntityStore<Snowflake, Channel>,
    pub emojis: EntityStore<Snowflake, Emoji>,
    pub members: EntityStore<Snowflake, GuildMember>,
    pub presences: EntityStore<Snowflake, Presence>,
    pub roles: EntityStore<Snowflake, Role>,
}

impl Guild {
    /// Build a guild from a create payload. An unavailable payload yields a
    /// stub carrying only the id; the full state arrives later.
    pub fn new(payload: &GuildPayload) -> Self {
        let mut guild = Self {
            id: payload.id,
            available: false,
            name: String::new(),
            icon: None,
            splash: None,
            owner_id: None,
            large: false,
            member_count: 0,
            default_message_notifications: NotificationLevel::default(),
            explicit_content_filter: ExplicitContentFilter::default(),
            verification_level: VerificationLevel::default(),
            mfa_level: MfaLevel::default(),
            region: None,
            features: Vec::new(),
            afk_timeout: 0,
            embed_enabled: false,
            widget_enabled: false,
            afk_channel_id: None,
            system_channel_id: None,
            embed_channel_id: None,
            widget_channel_id: None,
            application_id: None,
            channels: EntityStore::new(),
            emojis: EntityStore::new(),
            members: EntityStore::new(),
            presences: EntityStore::new(),
            roles: EntityStore::new(),
        };
        if payload.unavailable {
            return guild;
        }
        guild.patch(payload);
        guild
    }

    /// Absorb a full or partial guild payload. Present scalar fields
    /// overwrite, absent fields retain their cached value; collection
    /// fields upsert without deleting.
    pub fn patch(&mut self, payload: &GuildPayload) {
        self.available = !payload.unavailable;

        if let Some(name) = &payload.name {
            self.name = name.clone();
        }
        if let Some(icon) = &payload.icon {
            self.icon = icon.clone();
        }
        if let Some(splash) = &payload.splash {
            self.splash = splash.clone();
        }
        if let Some(owner_id) = payload.owner_id {
            self.owner_id = Some(owner_id);
        }
        if let Some(large) = payload.large {
            self.large = large;
        }
        if let Some(member_count) = payload.member_count {
            self.member_count = member_count;
        }
        if let Some(level) = payload.default_message_notifications {
            self.default_message_notifications = NotificationLevel::from(level);
        }
        if let Some(filter) = payload.explicit_content_filter {
            self.explicit_content_filter = ExplicitContentFilter::from(filter);
        }
        if let Some(level) = payload.verification_level {
            self.verification_level = VerificationLevel::from(level);
        }
        if let Some(level) = payload.mfa_level {
            self.mfa_level = MfaLevel::from(level);
        }
        if let Some(region) = &payload.region {
            self.region = Some(region.clone());
        }
        if let Some(features) = &payload.features {
            self.features = features.clone();
        }
        if let Some(timeout) = payload.afk_timeout {
            self.afk_timeout = timeout;
        }
        if let Some(enabled) = payload.embed_enabled {
            self.embed_enabled = enabled;
        }
        if let Some(enabled) = payload.widget_enabled {
            self.widget_enabled = enabled;
        }
        if let Some(channel_id) = payload.afk_channel_id {
            self.afk_channel_id = channel_id;
        }
        if let Some(channel_id) = payload.system_channel_id {
            self.system_channel_id = channel_id;
        }
        if let Some(channel_id) = payload.embed_channel_id {
            self.embed_channel_id = channel_id;
        }
        if let Some(channel_id) = payload.widget_channel_id {
            self.widget_channel_id = channel_id;
        }
        if let Some(application_id) = payload.application_id {
            self.application_id = application_id;
        }

        if let Some(roles) = &payload.roles {
            for entry in roles {
                match self.roles.get_mut(&entry.id) {
                    Some(role) => role.patch(entry),
                    None => {
                        self.roles.set(entry.id, Role::new(self.id, entry));
                    }
                }
            }
        }
        if let Some(emojis) = &payload.emojis {
            for entry in emojis {
                match self.emojis.get_mut(&entry.id) {
                    Some(emoji) => emoji.patch(entry),
                    None => {
                        self.emojis.set(entry.id, Emoji::new(self.id, entry));
                    }
                }
            }
        }
        if let Some(channels) = &payload.channels {
            for entry in channels {
                match self.channels.get_mut(&entry.id) {
                    Some(channel) => channel.patch(entry),
                    None => {
                        self.channels.set(entry.id, Channel::new(self.id, entry));
                    }
                }
            }
        }
        if let Some(members) = &payload.members {
            for entry in members {
                self.add_member(entry, true);
            }
        }
        if let Some(presences) = &payload.presences {
            for entry in presences {
                match self.presences.get_mut(&entry.user.id) {
                    Some(presence) => presence.patch(entry),
                    None => {
                        self.presences.set(entry.user.id, Presence::new(entry));
                    }
                }
            }
        }
        if let Some(voice_states) = &payload.voice_states {
            for entry in voice_states {
                // Voice states reference members by id; a state whose member
                // is not loaded is skipped rather than conjuring a stub.
                match self.members.get_mut(&entry.user_id) {
                    Some(member) => member.set_voice_state(VoiceState::new(entry)),
                    None => {
                        debug!(
                            guild_id = %self.id,
                            user_id = %entry.user_id,
                            "skipping voice state for unloaded member"
                        );
                    }
                }
            }
        }
    }

    /// Guild identifier
    #[inline]
    pub fn id(&self) -> Snowflake {
        self.id
    }

    /// Creation time, decoded from the identifier
    pub fn created_at(&self) -> DateTime<Utc> {
        self.id.created_at()
    }

    /// Reported total member count, which may exceed the number of cached
    /// members until a member fetch completes
    #[inline]
    pub fn member_count(&self) -> u64 {
        self.member_count
    }

    /// Insert or update a member. During initial bulk load (`initial`) the
    /// reported count already includes the member, so only a live join
    /// increments it.
    pub fn add_member(&mut self, payload: &MemberPayload, initial: bool) -> &mut GuildMember {
        let user_id = payload.user.id;
        let known = self.members.has(&user_id);
        if !initial {
            self.member_count += 1;
        }
        if known {
            // set_voice_state path keeps existing voice data intact.
            if let Some(member) = self.members.get_mut(&user_id) {
                member.patch(payload);
            }
        }
        let guild_id = self.id;
        self.members
            .get_or_insert_with(user_id, || GuildMember::new(guild_id, payload))
    }

    /// Remove a member and decrement the count. Returns the removed member,
    /// or `None` when the member was never cached (the count is untouched
    /// in that case, and it never drops below zero).
    pub fn remove_member(&mut self, user_id: Snowflake) -> Option<GuildMember> {
        let member = self.members.remove(&user_id)?;
        self.member_count = self.member_count.saturating_sub(1);
        self.presences.remove(&user_id);
        Some(member)
    }

    /// The cached member record for the given user id
    pub fn member(&self, user_id: Snowflake) -> Option<&GuildMember> {
        self.members.get(&user_id)
    }

    /// The client's own member record
    pub fn me(&self, user_id: Snowflake) -> Option<&GuildMember> {
        self.member(user_id)
    }

    /// The everyone role, whose id equals the guild id
    pub fn default_role(&self) -> Option<&Role> {
        self.roles.get(&self.id)
    }

    /// Whether the guild carries the verified badge
    pub fn is_verified(&self) -> bool {
        self.features.iter().any(|feature| feature == "VERIFIED")
    }

    /// Acronym built from the first character of each name word. Words are
    /// split on characters other than letters, digits, and underscore.
    pub fn name_acronym(&self) -> String {
        self.name
            .split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn afk_channel(&self) -> Option<&Channel> {
        self.channels.get(&self.afk_channel_id?)
    }

    pub fn system_channel(&self) -> Option<&Channel> {
        self.channels.get(&self.system_channel_id?)
    }

    pub fn embed_channel(&self) -> Option<&Channel> {
        self.channels.get(&self.embed_channel_id?)
    }

    pub fn widget_channel(&self) -> Option<&Channel> {
        self.channels.get(&self.widget_channel_id?)
    }

    /// CDN URL of the guild icon, if one is set
    pub fn icon_url(&self) -> Option<String> {
        let icon = self.icon.as_ref()?;
        Some(format!(
            "https://cdn.discordapp.com/icons/{}/{}.png",
            self.id, icon
        ))
    }

    /// CDN URL of the invite splash, if one is set
    pub fn splash_url(&self) -> Option<String> {
        let splash = self.splash.as_ref()?;
        Some(format!(
            "https://cdn.discordapp.com/splashes/{}/{}.png",
            self.id, splash
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> GuildPayload {
        serde_json::from_value(json!({
            "id": "100000000000000",
            "name": "Quokka Cove",
            "icon": "abc123",
            "owner_id": "400000000000000",
            "large": false,
            "member_count": 2,
            "default_message_notifications": 1,
            "verification_level": 2,
            "features": ["VERIFIED"],
            "roles": [
                { "id": "100000000000000", "name": "@everyone", "permissions": 3 }
            ],
            "emojis": [
                { "id": "500000000000000", "name": "partyparrot" }
            ],
            "channels": [
                { "id": "300000000000000", "name": "general", "type": 0 }
            ],
            "members": [
                { "user": { "id": "400000000000000", "username": "quokka" } },
                { "user": { "id": "400000000000001", "username": "echo" } }
            ],
            "presences": [
                { "user": { "id": "400000000000000" }, "status": "online" }
            ],
            "voice_states": [
                { "user_id": "400000000000000", "channel_id": "300000000000000", "session_id": "s1" },
                { "user_id": "999999999999999", "session_id": "s2" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_create_absorbs_nested_collections() {
        let guild = Guild::new(&full_payload());
        assert!(guild.available);
        assert_eq!(guild.name, "Quokka Cove");
        assert_eq!(guild.member_count(), 2);
        assert_eq!(guild.roles.len(), 1);
        assert_eq!(guild.emojis.len(), 1);
        assert_eq!(guild.channels.len(), 1);
        assert_eq!(guild.members.len(), 2);
        assert_eq!(guild.presences.len(), 1);
        // Voice state attached to the loaded member, orphan state skipped.
        let member = guild.me("400000000000000".parse().unwrap()).unwrap();
        assert!(member.voice_state().is_some());
    }

    #[test]
    fn test_patch_is_idempotent() {
        let payload = full_payload();
        let mut guild = Guild::new(&payload);
        let snapshot = guild.clone();
        guild.patch(&payload);
        assert_eq!(guild, snapshot);
    }

    #[test]
    fn test_unavailable_payload_yields_stub() {
        let payload: GuildPayload =
            serde_json::from_value(json!({ "id": "100", "unavailable": true })).unwrap();
        let guild = Guild::new(&payload);
        assert!(!guild.available);
        assert!(guild.name.is_empty());
    }

    #[test]
    fn test_partial_update_retains_absent_fields() {
        let mut guild = Guild::new(&full_payload());
        let update: GuildPayload = serde_json::from_value(json!({
            "id": "100000000000000",
            "name": "Renamed Cove",
            "icon": null
        }))
        .unwrap();
        guild.patch(&update);
        assert_eq!(guild.name, "Renamed Cove");
        assert!(guild.icon.is_none());
        assert_eq!(guild.owner_id, Some("400000000000000".parse().unwrap()));
        assert_eq!(guild.members.len(), 2);
    }

    #[test]
    fn test_member_count_laws() {
        let mut guild = Guild::new(&full_payload());
        assert_eq!(guild.member_count(), 2);

        let joiner: MemberPayload = serde_json::from_value(json!({
            "user": { "id": "400000000000002", "username": "newbie" }
        }))
        .unwrap();
        guild.add_member(&joiner, false);
        assert_eq!(guild.member_count(), 3);

        // Removing an unknown member leaves the count alone.
        assert!(guild.remove_member(Snowflake::new(1)).is_none());
        assert_eq!(guild.member_count(), 3);

        assert!(guild
            .remove_member("400000000000002".parse().unwrap())
            .is_some());
        assert_eq!(guild.member_count(), 2);
    }

    #[test]
    fn test_member_count_never_negative() {
        let payload: GuildPayload = serde_json::from_value(json!({
            "id": "100",
            "name": "Tiny",
            "member_count": 0,
            "members": [ { "user": { "id": "7" } } ]
        }))
        .unwrap();
        let mut guild = Guild::new(&payload);
        assert!(guild.remove_member(Snowflake::new(7)).is_some());
        assert_eq!(guild.member_count(), 0);
    }

    #[test]
    fn test_name_acronym() {
        let mut guild = Guild::new(&full_payload());
        assert_eq!(guild.name_acronym(), "QC");
        guild.name = "foo_bar baz-qux".to_string();
        assert_eq!(guild.name_acronym(), "FBQ");
        guild.name = String::new();
        assert_eq!(guild.name_acronym(), "");
    }

    #[test]
    fn test_derived_accessors() {
        let guild = Guild::new(&full_payload());
        assert!(guild.is_verified());
        assert!(guild.default_role().is_some());
        assert_eq!(
            guild.icon_url().as_deref(),
            Some("https://cdn.discordapp.com/icons/100000000000000/abc123.png")
        );
        assert!(guild.splash_url().is_none());
        assert!(guild.afk_channel().is_none());
        assert_eq!(guild.default_message_notifications, NotificationLevel::OnlyMentions);
        assert_eq!(guild.verification_level, VerificationLevel::Medium);
    }
}
