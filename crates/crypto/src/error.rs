// Path: crates/crypto/src/error.rs
//! Local error types for the `ae-crypto` crate.

// Re-export the canonical error type from the types crate.
pub use ae_types::error::CryptoError;
