//! Chunked member fetch
//!
//! A guild's initial payload only carries a subset of members for large
//! guilds. Fetching the rest means asking the server to stream the member
//! list in chunks and waiting until the cached member count catches up with
//! the authoritative one.

use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

use mirror_core::{ClientEvent, Guild, Snowflake};

use crate::dispatch::EventDispatcher;
use crate::error::GatewayError;
use crate::transport::GatewayCommand;

impl EventDispatcher {
    /// Fetch the full member list of a guild, requesting chunks from the
    /// server when the cache is incomplete. Resolves with a snapshot of the
    /// guild once every member is cached.
    ///
    /// # Errors
    /// - [`GatewayError::UnknownGuild`] when the guild is not cached
    /// - [`GatewayError::MembersTimeout`] when chunks stop arriving before
    ///   the list is complete
    /// - [`GatewayError::StreamClosed`] when the event stream shuts down
    ///   mid-fetch
    pub async fn fetch_members(&self, guild_id: Snowflake) -> Result<Guild, GatewayError> {
        self.fetch_members_with(guild_id, String::new(), 0).await
    }

    /// [`Self::fetch_members`] with an explicit username prefix filter and
    /// member limit (0 means no limit)
    pub async fn fetch_members_with(
        &self,
        guild_id: Snowflake,
        query: String,
        limit: u32,
    ) -> Result<Guild, GatewayError> {
        // Never hold the state lock across an await.
        if let Some(guild) = self.complete_snapshot(guild_id)? {
            return Ok(guild);
        }

        // Subscribe before sending so no chunk can slip between the request
        // going out and the listener attaching.
        let mut events = self.subscribe();
        self.transport
            .send(GatewayCommand::RequestGuildMembers {
                guild_id,
                query,
                limit,
            })
            .await?;
        debug!(guild_id = %guild_id, "requested guild members");

        let wait = async {
            loop {
                match events.recv().await {
                    Ok(ClientEvent::GuildMembersChunk(chunk)) if chunk.guild_id == guild_id => {
                        if let Some(guild) = self.complete_snapshot(guild_id)? {
                            return Ok(guild);
                        }
                    }
                    Ok(_) => {}
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(guild_id = %guild_id, skipped, "member fetch lagged behind events");
                    }
                    Err(RecvError::Closed) => return Err(GatewayError::StreamClosed),
                }
            }
        };

        tokio::time::timeout(self.fetch_timeout, wait)
            .await
            .map_err(|_| GatewayError::MembersTimeout)?
    }

    /// Snapshot the guild if its member list is complete. Errors when the
    /// guild is not cached at all.
    fn complete_snapshot(&self, guild_id: Snowflake) -> Result<Option<Guild>, GatewayError> {
        let state = self.state().read();
        let guild = state
            .guild(guild_id)
            .ok_or(GatewayError::UnknownGuild(guild_id))?;
        if guild.members.len() as u64 == guild.member_count() {
            Ok(Some(guild.clone()))
        } else {
            Ok(None)
        }
    }
}
