//! Outset - Terminal budget setup wizard
//!
//! This library provides the core functionality for Outset, a first-run
//! budget setup tool. At its heart is a reusable multi-step wizard engine:
//! an ordered registry of validated steps accumulating an uncommitted
//! draft, finalized atomically through a persistence gateway.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, budget plan)
//! - `wizard`: The multi-step wizard engine
//! - `storage`: Atomic JSON storage and the persistence gateway
//! - `audit`: Audit logging system
//! - `setup`: The budget setup flow built on the engine
//! - `display`: Terminal output formatting
//! - `cli`: CLI command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use outset::config::{paths::OutsetPaths, settings::Settings};
//! use outset::setup::SetupFlow;
//!
//! let paths = OutsetPaths::new()?;
//! let mut settings = Settings::load_or_create(&paths)?;
//! SetupFlow::new(paths).run(&mut settings).await?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod setup;
pub mod storage;
pub mod wizard;

pub use error::OutsetError;
