//! # mirror-gateway
//!
//! Gateway event reconciliation: parses dispatch payloads, applies them to
//! the shared client state, broadcasts client events, and coordinates the
//! chunked member fetch. The connection itself (handshake, heartbeat,
//! reconnect) is owned by the caller and reached through
//! [`transport::GatewayTransport`].

pub mod dispatch;
pub mod error;
pub mod events;
pub mod fetch;
pub mod state;
pub mod transport;

// Re-export commonly used types at crate root
pub use dispatch::{EventDispatcher, EventDispatcherConfig};
pub use error::{BoxError, GatewayError};
pub use events::{GatewayEvent, GatewayEventType};
pub use state::ClientState;
pub use transport::{GatewayCommand, GatewayTransport};
