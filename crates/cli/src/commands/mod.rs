// Path: crates/cli/src/commands/mod.rs

pub mod config;
pub mod demo;
pub mod keys;
pub mod seal;
