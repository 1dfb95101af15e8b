// Path: crates/cli/src/testing/mod.rs
//! Helper functions for building and running end-to-end tests.

pub mod assert;
pub mod chain;
pub mod fixtures;

pub use assert::{expect_program_error, expect_transaction_error};
pub use chain::TestChain;
pub use fixtures::{forged_shared_key, seal_for, SealedValue};
