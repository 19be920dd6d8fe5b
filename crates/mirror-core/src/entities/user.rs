//! User entity - a client-wide cached user

use crate::payloads::UserPayload;
use crate::value_objects::Snowflake;

/// Cached user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub discriminator: String,
    pub avatar: Option<String>,
    pub bot: bool,
}

impl User {
    /// Build a user from its wire payload
    pub fn new(payload: &UserPayload) -> Self {
        let mut user = Self {
            id: payload.id,
            username: String::new(),
            discriminator: String::new(),
            avatar: None,
            bot: false,
        };
        user.patch(payload);
        user
    }

    /// Absorb a payload; absent fields retain their cached value
    pub fn patch(&mut self, payload: &UserPayload) {
        if let Some(username) = &payload.username {
            self.username = username.clone();
        }
        if let Some(discriminator) = &payload.discriminator {
            self.discriminator = discriminator.clone();
        }
        if let Some(avatar) = &payload.avatar {
            self.avatar = avatar.clone();
        }
        if let Some(bot) = payload.bot {
            self.bot = bot;
        }
    }

    /// Full tag, e.g. `echo#0421`
    pub fn tag(&self) -> String {
        format!("{}#{}", self.username, self.discriminator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_payload() {
        let payload = UserPayload {
            id: Snowflake::new(42),
            username: Some("echo".to_string()),
            discriminator: Some("0421".to_string()),
            ..UserPayload::default()
        };
        let user = User::new(&payload);
        assert_eq!(user.id, Snowflake::new(42));
        assert_eq!(user.tag(), "echo#0421");
        assert!(!user.bot);
    }

    #[test]
    fn test_patch_retains_absent_fields() {
        let mut user = User::new(&UserPayload {
            id: Snowflake::new(42),
            username: Some("echo".to_string()),
            ..UserPayload::default()
        });

        user.patch(&UserPayload {
            id: Snowflake::new(42),
            bot: Some(true),
            ..UserPayload::default()
        });

        assert_eq!(user.username, "echo");
        assert!(user.bot);
    }
}
