// Path: crates/crypto/src/lib.rs
//! # AE Kernel Crypto Crate Lints
//!
//! Non-test code may not panic or unwrap. Malformed keys, nonces and seeds
//! are reported as `CryptoError`.
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::indexing_slicing
    )
)]
//! # AE Kernel Cryptography
//!
//! NaCl-compatible `box` primitives (X25519 + XSalsa20-Poly1305), program
//! derived addresses, and ed25519 wallet signatures.

pub mod address;
pub mod aead;
pub mod algorithms;
pub mod error;
pub mod kem;
pub mod sign;
