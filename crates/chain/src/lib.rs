// Path: crates/chain/src/lib.rs
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::indexing_slicing
    )
)]
//! # AE Local Chain
//!
//! A single-writer, in-process validator. It verifies signed transactions,
//! runs their instructions against the registered programs and commits the
//! resulting state atomically.

pub mod local;
pub mod signing;

pub use local::LocalChain;
pub use signing::{sign_transaction, verify_signatures};
