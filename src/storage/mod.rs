//! Storage layer for Outset
//!
//! Provides atomic JSON file helpers and the persistence gateway the wizard
//! commits finalized drafts through.

pub mod file_io;
pub mod gateway;

pub use file_io::{read_json, write_json_atomic};
pub use gateway::{GatewayError, JsonFileGateway, MemoryGateway, PersistenceGateway};
