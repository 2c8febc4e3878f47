//! Bootstrap a curated global Git configuration: dependency checks,
//! identity setup, core and delta settings, and ~150 aliases.

pub mod aliases;
pub mod cli;
pub mod identity;
pub mod pkg;
pub mod settings;
pub mod store;
pub mod verify;
