//! Command implementations for the toolguard CLI
//!
//! Each command is organized into its own module.

pub mod check;
pub mod config;
pub mod hook;
pub mod patterns;
pub mod status;
pub mod version;
