// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # AE Kernel Types
//!
//! This crate is the foundational library for the AE commit-reveal kernel,
//! containing all core data structures, error types, and configuration objects.
//!
//! ## Architectural Role
//!
//! As the base crate, `ae-types` has minimal dependencies and is itself a
//! dependency for every other crate in the workspace. This prevents circular
//! dependencies and provides one canonical definition for shared types like
//! `Address`, `Transaction`, `EncryptedAccount`, and the error enums.

/// Length in bytes of an X25519 public key committed by a sender.
pub const PUBLIC_KEY_LENGTH: usize = 32;
/// Length in bytes of an XSalsa20 nonce.
pub const NONCE_LENGTH: usize = 24;
/// Length in bytes of a precomputed box (shared) key.
pub const SHARED_KEY_LENGTH: usize = 32;
/// Length in bytes of a Poly1305 authentication tag.
pub const TAG_LENGTH: usize = 16;
/// Bytes allocated for every encrypted record account.
pub const ACCOUNT_SPACE: u32 = 4096;
/// Length in bytes of the type discriminator that prefixes program-owned account data.
pub const DISCRIMINATOR_LENGTH: usize = 8;

/// A top-level, crate-wide `Result` type alias with a default error type.
pub type Result<T, E = crate::error::TransactionError> = std::result::Result<T, E>;

/// Core application-level data structures like `Address`, `Transaction` and `EncryptedAccount`.
pub mod app;
/// The canonical, deterministic binary codec for on-chain state.
pub mod codec;
/// Chain configuration loaded from TOML.
pub mod config;
/// A unified set of all error types used across the workspace.
pub mod error;
/// Constants for well-known state keys used for accessing data in the state store.
pub mod keys;
