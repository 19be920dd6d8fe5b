//! Event reconciliation
//!
//! Reducers take the shared state and one payload, mutate the cache, and
//! return the client event to broadcast. The dispatcher owns the lock and
//! the broadcast channel.

mod dispatcher;

pub(crate) mod channels;
pub(crate) mod emojis;
pub(crate) mod guilds;
pub(crate) mod members;
pub(crate) mod messages;
pub(crate) mod presence;

pub use dispatcher::{EventDispatcher, EventDispatcherConfig};
