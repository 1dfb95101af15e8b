// Path: crates/cli/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # AE CLI Library
//!
//! Helpers for driving a local AE chain from integration and end-to-end
//! tests. `cli` consumes the kernel only through the public APIs of the
//! other `ae-*` crates, the same way an application would.

pub mod testing;

pub use testing::chain::TestChain;
pub use testing::fixtures::{forged_shared_key, seal_for, SealedValue};
