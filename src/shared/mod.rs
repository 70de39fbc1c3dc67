//! Helpers shared by the hooks

pub mod paths;
