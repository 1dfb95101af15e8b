// Path: crates/crypto/src/sign/mod.rs
//! Transaction signatures.

pub mod eddsa;
