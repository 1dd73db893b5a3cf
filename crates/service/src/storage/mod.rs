//! Storage abstractions for service layer
//!
//! Process-local maps keyed by generated integer ids. Nothing here touches
//! disk; state lives as long as the owning store.

pub mod memory_map_store;
