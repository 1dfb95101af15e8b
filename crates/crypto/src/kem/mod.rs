// Path: crates/crypto/src/kem/mod.rs
//! Key agreement.

pub mod x25519;
