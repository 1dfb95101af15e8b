// Path: crates/api/src/error/mod.rs
// Re-export all core error types from the central types crate.
pub use ae_types::error::{
    ClientError, CryptoError, ErrorCode, ProgramError, StateError, TransactionError,
};
