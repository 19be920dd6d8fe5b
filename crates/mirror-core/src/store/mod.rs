//! Keyed cache primitive backing every entity collection

mod entity_store;

pub use entity_store::EntityStore;
