//! I/O module
//!
//! Handles persistence of the account collection.
//!
//! # Components
//!
//! - `json_format` - JSON rendering and parsing of the account array
//! - `json_file_store` - Record store backed by a JSON file
//! - `memory_store` - Record store backed by an in-memory buffer

pub mod json_file_store;
pub mod json_format;
pub mod memory_store;

pub use json_file_store::JsonFileStore;
pub use json_format::{parse_accounts, render_accounts};
pub use memory_store::MemoryStore;
