// Path: crates/client/src/lib.rs
//! # AE Kernel Client Crate Lints
//!
//! Non-test code may not panic or unwrap; chain and transport failures
//! surface as `ClientError`.
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

//! # AE Kernel Client
//!
//! Builds, signs and submits transactions, and reads accounts back.

pub mod program;
pub mod provider;
pub mod rpc;
pub mod wallet;

pub use program::ProgramClient;
pub use provider::Provider;
pub use rpc::{ChainRpc, LocalRpc};
pub use wallet::Wallet;
