//! Test helpers for integration tests
//!
//! Provides a fake gateway transport that records outbound commands and a
//! dispatch shortcut that parses raw JSON the way a connection would.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;

use mirror_core::ClientEvent;
use mirror_gateway::{
    BoxError, EventDispatcher, EventDispatcherConfig, GatewayCommand, GatewayEvent,
    GatewayEventType, GatewayTransport,
};

/// Transport stub that records every command instead of sending it
#[derive(Default)]
pub struct FakeTransport {
    commands: Mutex<Vec<GatewayCommand>>,
}

impl FakeTransport {
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Commands sent so far, oldest first
    pub fn sent(&self) -> Vec<GatewayCommand> {
        self.commands.lock().clone()
    }
}

#[async_trait]
impl GatewayTransport for FakeTransport {
    async fn send(&self, command: GatewayCommand) -> Result<(), BoxError> {
        self.commands.lock().push(command);
        Ok(())
    }
}

/// Build a dispatcher over a fake transport with a short fetch timeout
pub fn test_dispatcher() -> (EventDispatcher, Arc<FakeTransport>) {
    test_dispatcher_with_timeout(Duration::from_secs(120))
}

/// Build a dispatcher with an explicit member fetch timeout
pub fn test_dispatcher_with_timeout(timeout: Duration) -> (EventDispatcher, Arc<FakeTransport>) {
    let transport = FakeTransport::new();
    let config = EventDispatcherConfig {
        member_fetch_timeout: timeout,
        ..EventDispatcherConfig::default()
    };
    let dispatcher = EventDispatcher::new(transport.clone(), config);
    (dispatcher, transport)
}

/// Parse and dispatch a raw JSON payload under the given event name
pub fn dispatch_json(
    dispatcher: &EventDispatcher,
    kind: GatewayEventType,
    data: serde_json::Value,
) -> Result<Option<ClientEvent>> {
    let event = GatewayEvent::parse(kind, data)?;
    Ok(dispatcher.dispatch(&event))
}
