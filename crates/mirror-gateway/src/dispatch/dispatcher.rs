//! Event dispatcher
//!
//! Receives parsed gateway events, applies them to the shared client state
//! under a single write lock, and broadcasts the resulting client events to
//! subscribers. One dispatcher exists per session; clones share the same
//! state and broadcast channel.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::trace;

use mirror_common::ClientConfig;
use mirror_core::ClientEvent;

use crate::dispatch::{channels, emojis, guilds, members, messages, presence};
use crate::events::GatewayEvent;
use crate::state::ClientState;
use crate::transport::GatewayTransport;

/// Configuration for the event dispatcher
#[derive(Debug, Clone)]
pub struct EventDispatcherConfig {
    /// How long a member fetch waits for chunks before giving up
    pub member_fetch_timeout: Duration,
    /// Broadcast buffer size
    pub event_buffer: usize,
}

impl Default for EventDispatcherConfig {
    fn default() -> Self {
        Self {
            member_fetch_timeout: Duration::from_secs(120),
            event_buffer: 1024,
        }
    }
}

impl From<&ClientConfig> for EventDispatcherConfig {
    fn from(config: &ClientConfig) -> Self {
        Self {
            member_fetch_timeout: Duration::from_secs(config.gateway.member_fetch_timeout_secs),
            event_buffer: config.gateway.event_buffer,
        }
    }
}

/// Event dispatcher that routes gateway events into the client state
#[derive(Clone)]
pub struct EventDispatcher {
    state: Arc<RwLock<ClientState>>,
    events: broadcast::Sender<ClientEvent>,
    pub(crate) transport: Arc<dyn GatewayTransport>,
    pub(crate) fetch_timeout: Duration,
}

impl EventDispatcher {
    /// Create a new dispatcher over the given transport
    #[must_use]
    pub fn new(transport: Arc<dyn GatewayTransport>, config: EventDispatcherConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_buffer);
        Self {
            state: Arc::new(RwLock::new(ClientState::new())),
            events,
            transport,
            fetch_timeout: config.member_fetch_timeout,
        }
    }

    /// The shared client state
    #[must_use]
    pub fn state(&self) -> &Arc<RwLock<ClientState>> {
        &self.state
    }

    /// Subscribe to client events emitted after reconciliation
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ClientEvent> {
        self.events.subscribe()
    }

    /// Apply one gateway event to the state and broadcast the resulting
    /// client event. Returns the emitted event, or `None` when the payload
    /// referenced state the client does not mirror.
    pub fn dispatch(&self, event: &GatewayEvent) -> Option<ClientEvent> {
        let emitted = {
            let mut state = self.state.write();
            match event {
                GatewayEvent::GuildCreate(payload) => guilds::guild_create(&mut state, payload),
                GatewayEvent::GuildUpdate(payload) => guilds::guild_update(&mut state, payload),
                GatewayEvent::GuildDelete(payload) => guilds::guild_delete(&mut state, payload),
                GatewayEvent::GuildEmojisUpdate(payload) => {
                    emojis::guild_emojis_update(&mut state, payload)
                }
                GatewayEvent::ChannelPinsUpdate(payload) => {
                    channels::channel_pins_update(&mut state, payload)
                }
                GatewayEvent::GuildMemberAdd(payload) => members::member_add(&mut state, payload),
                GatewayEvent::GuildMemberRemove(payload) => {
                    members::member_remove(&mut state, payload)
                }
                GatewayEvent::GuildMembersChunk(payload) => {
                    members::members_chunk(&mut state, payload)
                }
                GatewayEvent::PresenceUpdate(payload) => {
                    presence::presence_update(&mut state, payload)
                }
                GatewayEvent::MessageCreate(payload) => messages::message_create(&mut state, payload),
                GatewayEvent::MessageReactionAdd(payload) => {
                    messages::reaction_add(&mut state, payload)
                }
                GatewayEvent::MessageReactionRemove(payload) => {
                    messages::reaction_remove(&mut state, payload)
                }
            }
        };

        if let Some(event) = &emitted {
            self.emit(event.clone());
        }
        emitted
    }

    /// Broadcast a client event; a send with no subscribers is not an error
    pub(crate) fn emit(&self, event: ClientEvent) {
        if self.events.send(event).is_err() {
            trace!("no subscribers for client event");
        }
    }
}
