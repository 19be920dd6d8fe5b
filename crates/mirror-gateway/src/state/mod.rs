//! Client-wide cached state

mod client_state;

pub use client_state::ClientState;
