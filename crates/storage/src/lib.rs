//! Storage abstraction and implementations for RepTrack.
//!
//! This crate provides a trait-based progress store interface with
//! JSON-file, in-memory, and remote HTTP backends.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_store;
pub mod memory_store;
pub mod http_store;

pub use trait_::{ProgressStore, Result, StoreError};
pub use json_store::JsonStore;
pub use memory_store::MemoryStore;
pub use http_store::HttpStore;
