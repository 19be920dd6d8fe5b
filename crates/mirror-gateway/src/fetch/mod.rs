//! Coordinated fetches that span multiple inbound events

mod members;
