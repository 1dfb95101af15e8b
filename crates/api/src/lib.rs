// Path: crates/api/src/lib.rs

//! # AE Kernel API Crate Lints
//!
//! Non-test code may not panic, unwrap or index out of bounds; every
//! failure a program can hit is returned as a typed error.
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::indexing_slicing
    )
)]
//! # AE Kernel API
//!
//! Core traits and interfaces for the AE kernel. This crate defines the
//! contract between the chain runtime and the programs it hosts.

/// Re-exports all core error types from the central `ae-types` crate.
pub mod error;
/// The `OnChainProgram` trait, the program directory and account-list helpers.
pub mod program;
/// Key-value state access, the copy-on-write overlay and typed account storage.
pub mod state;
/// The execution context handed to programs.
pub mod transaction;

/// Traits and types most programs import.
pub mod prelude {
    pub use crate::error::{ErrorCode, ProgramError, StateError, TransactionError};
    pub use crate::program::{InstructionAccounts, OnChainProgram, ProgramDirectory};
    pub use crate::state::{AccountStore, MemoryState, StateAccess, StateOverlay};
    pub use crate::transaction::context::TxContext;
}
