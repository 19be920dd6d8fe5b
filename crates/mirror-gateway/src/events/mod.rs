//! Gateway dispatch events

mod event_types;
mod gateway_event;
pub mod payloads;

pub use event_types::GatewayEventType;
pub use gateway_event::GatewayEvent;
