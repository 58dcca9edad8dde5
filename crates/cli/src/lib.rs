//! Command-line front end for inspecting token rings.
//!
//! Provides commands for:
//! - Hashing keys to tokens
//! - Splitting, unwrapping, merging and intersecting token ranges
//! - Listing the ranges induced by a set of ring tokens

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult};
pub use config::CliConfig;
