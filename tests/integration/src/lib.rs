//! Integration test utilities for the state mirror
//!
//! This crate provides helpers for wiring a dispatcher over a fake
//! transport and building gateway payloads.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
