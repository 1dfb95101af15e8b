// Path: crates/types/src/error/mod.rs
//! Core error types for the AE kernel.

use crate::app::Address;
use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Failures reading or writing typed values in the state store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// A value could not be encoded for storage.
    #[error("Failed to encode stored value: {0}")]
    Encode(String),
    /// Stored bytes did not decode as the expected type.
    #[error("Failed to decode stored value: {0}")]
    Decode(String),
}

impl ErrorCode for StateError {
    fn code(&self) -> &'static str {
        match self {
            Self::Encode(_) => "STATE_ENCODE_ERROR",
            Self::Decode(_) => "STATE_DECODE_ERROR",
        }
    }
}

/// Errors from cryptographic operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Key material had the wrong length or encoding.
    #[error("Invalid key: {0}")]
    InvalidKey(String),
    /// A nonce had the wrong length.
    #[error("Invalid nonce length: expected {expected}, got {got}")]
    InvalidNonce {
        /// The required nonce length.
        expected: usize,
        /// The length that was supplied.
        got: usize,
    },
    /// The ciphertext failed authentication under the given key.
    #[error("Ciphertext authentication failed")]
    Authentication,
    /// Encryption failed.
    #[error("Encryption failed")]
    Encryption,
    /// Seeds exceeded the count or length limits.
    #[error("Invalid seeds: {0}")]
    InvalidSeeds(String),
    /// The derived address lies on the ed25519 curve and cannot be a PDA.
    #[error("Derived address lies on the ed25519 curve")]
    OnCurve,
    /// No bump seed in 0..=255 produced an off-curve address.
    #[error("Unable to find a viable program address bump seed")]
    NoViableBump,
    /// A signature did not verify.
    #[error("Signature verification failed")]
    InvalidSignature,
}

impl ErrorCode for CryptoError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidKey(_) => "CRYPTO_INVALID_KEY",
            Self::InvalidNonce { .. } => "CRYPTO_INVALID_NONCE",
            Self::Authentication => "CRYPTO_AUTHENTICATION_FAILED",
            Self::Encryption => "CRYPTO_ENCRYPTION_FAILED",
            Self::InvalidSeeds(_) => "CRYPTO_INVALID_SEEDS",
            Self::OnCurve => "CRYPTO_ADDRESS_ON_CURVE",
            Self::NoViableBump => "CRYPTO_NO_VIABLE_BUMP",
            Self::InvalidSignature => "CRYPTO_INVALID_SIGNATURE",
        }
    }
}

/// Errors raised by an on-chain program while executing one instruction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgramError {
    /// The program does not expose the requested method.
    #[error("Unknown method '{0}'")]
    UnknownMethod(String),
    /// The instruction parameters failed to decode.
    #[error("Invalid instruction data: {0}")]
    InvalidInstructionData(String),
    /// Fewer accounts were passed than the method requires.
    #[error("Not enough account keys: expected {expected}, got {got}")]
    NotEnoughAccountKeys {
        /// The required number of accounts.
        expected: usize,
        /// The number of accounts passed.
        got: usize,
    },
    /// An account that must sign did not.
    #[error("Missing required signature for {0}")]
    MissingRequiredSignature(Address),
    /// An account that must be writable was passed read-only.
    #[error("Account {0} is not writable")]
    AccountNotWritable(Address),
    /// A field had the wrong length.
    #[error("Invalid {field} length: expected {expected}, got {got}")]
    InvalidLength {
        /// The name of the offending field.
        field: &'static str,
        /// The required length (or minimum length for ciphertexts).
        expected: usize,
        /// The length that was supplied.
        got: usize,
    },
    /// The passed account is not the address derived from the seeds.
    #[error("Invalid seeds: expected address {expected}, got {got}")]
    InvalidSeeds {
        /// The derived address.
        expected: Address,
        /// The address that was passed.
        got: Address,
    },
    /// The account to be initialised already exists.
    #[error("Account {0} is already in use")]
    AccountAlreadyInUse(Address),
    /// The account does not exist.
    #[error("Account {0} not found")]
    AccountNotFound(Address),
    /// The account is owned by a different program.
    #[error("Account {account} is owned by {owner}, expected {expected}")]
    IllegalOwner {
        /// The account being accessed.
        account: Address,
        /// Its actual owner.
        owner: Address,
        /// The program that expected to own it.
        expected: Address,
    },
    /// A program id account did not match.
    #[error("Incorrect program id: expected {expected}, got {got}")]
    IncorrectProgramId {
        /// The expected program id.
        expected: Address,
        /// The supplied program id.
        got: Address,
    },
    /// Account data failed to decode or carried the wrong discriminator.
    #[error("Invalid account data: {0}")]
    InvalidAccountData(String),
    /// The encoded account does not fit in its allocated space.
    #[error("Account data too small: need {needed} bytes, allocated {space}")]
    AccountDataTooSmall {
        /// Bytes required.
        needed: usize,
        /// Bytes allocated.
        space: u32,
    },
    /// The funding account cannot cover the transfer.
    #[error("Insufficient funds: need {needed} lamports, have {available}")]
    InsufficientFunds {
        /// Lamports required.
        needed: u64,
        /// Lamports available.
        available: u64,
    },
    /// The record has already been revealed.
    #[error("Record {0} has already been revealed")]
    AlreadyRevealed(Address),
    /// The shared key did not authenticate the stored ciphertext.
    #[error("Shared key does not authenticate the stored ciphertext")]
    DecryptionFailed,
    /// A balance computation overflowed.
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
    /// A cross-program invocation targeted an unregistered program.
    #[error("Program {0} is not registered")]
    UnknownProgram(Address),
    /// A cross-program invocation asked for privileges the caller lacks.
    #[error("Privilege escalation for account {0}")]
    PrivilegeEscalation(Address),
    /// Cross-program invocations nested deeper than the chain allows.
    #[error("Cross-program invocation depth {0} exceeds the limit")]
    CallDepthExceeded(usize),
    /// A cryptographic operation failed.
    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),
    /// The state store failed.
    #[error("State error: {0}")]
    State(#[from] StateError),
}

impl ErrorCode for ProgramError {
    fn code(&self) -> &'static str {
        match self {
            Self::UnknownMethod(_) => "PROGRAM_UNKNOWN_METHOD",
            Self::InvalidInstructionData(_) => "PROGRAM_INVALID_INSTRUCTION_DATA",
            Self::NotEnoughAccountKeys { .. } => "PROGRAM_NOT_ENOUGH_ACCOUNT_KEYS",
            Self::MissingRequiredSignature(_) => "PROGRAM_MISSING_REQUIRED_SIGNATURE",
            Self::AccountNotWritable(_) => "PROGRAM_ACCOUNT_NOT_WRITABLE",
            Self::InvalidLength { .. } => "PROGRAM_INVALID_LENGTH",
            Self::InvalidSeeds { .. } => "PROGRAM_INVALID_SEEDS",
            Self::AccountAlreadyInUse(_) => "PROGRAM_ACCOUNT_ALREADY_IN_USE",
            Self::AccountNotFound(_) => "PROGRAM_ACCOUNT_NOT_FOUND",
            Self::IllegalOwner { .. } => "PROGRAM_ILLEGAL_OWNER",
            Self::IncorrectProgramId { .. } => "PROGRAM_INCORRECT_PROGRAM_ID",
            Self::InvalidAccountData(_) => "PROGRAM_INVALID_ACCOUNT_DATA",
            Self::AccountDataTooSmall { .. } => "PROGRAM_ACCOUNT_DATA_TOO_SMALL",
            Self::InsufficientFunds { .. } => "PROGRAM_INSUFFICIENT_FUNDS",
            Self::AlreadyRevealed(_) => "PROGRAM_ALREADY_REVEALED",
            Self::DecryptionFailed => "PROGRAM_DECRYPTION_FAILED",
            Self::ArithmeticOverflow => "PROGRAM_ARITHMETIC_OVERFLOW",
            Self::UnknownProgram(_) => "PROGRAM_UNKNOWN_PROGRAM",
            Self::PrivilegeEscalation(_) => "PROGRAM_PRIVILEGE_ESCALATION",
            Self::CallDepthExceeded(_) => "PROGRAM_CALL_DEPTH_EXCEEDED",
            Self::Crypto(_) => "PROGRAM_CRYPTO_ERROR",
            Self::State(_) => "PROGRAM_STATE_ERROR",
        }
    }
}

/// Errors that cause a whole transaction to be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    /// The encoded transaction exceeds the size limit.
    #[error("Transaction too large: {size} bytes exceeds limit of {max}")]
    TooLarge {
        /// Encoded size.
        size: usize,
        /// Configured limit.
        max: usize,
    },
    /// The transaction contains no instructions.
    #[error("Transaction contains no instructions")]
    Empty,
    /// The signature list does not match the message's required signers.
    #[error("Signature set does not match required signers")]
    SignatureMismatch,
    /// A signature failed verification.
    #[error("Invalid signature from {0}")]
    InvalidSignature(Address),
    /// This transaction was already committed.
    #[error("Transaction has already been processed")]
    AlreadyProcessed,
    /// The message references a height that is too old or in the future.
    #[error("Transaction expired: recent height {recent}, current height {current}")]
    Expired {
        /// The height in the message.
        recent: u64,
        /// The chain's height.
        current: u64,
    },
    /// The instruction targets an unregistered program.
    #[error("Program {0} is not registered")]
    UnknownProgram(Address),
    /// The payer cannot cover the transaction fee.
    #[error("Insufficient funds for fee: need {needed}, have {available}")]
    InsufficientFundsForFee {
        /// Lamports required.
        needed: u64,
        /// Lamports available.
        available: u64,
    },
    /// An instruction failed; nothing in the transaction was applied.
    #[error("Instruction {index} failed: {source}")]
    InstructionFailed {
        /// Zero-based index of the failing instruction.
        index: usize,
        /// The program error.
        #[source]
        source: ProgramError,
    },
    /// An instruction wrote to an account it did not mark writable.
    #[error("Instruction {index} modified read-only account {account}")]
    ReadonlyAccountModified {
        /// Zero-based index of the offending instruction.
        index: usize,
        /// The modified account.
        account: Address,
    },
    /// Encoding or decoding the transaction failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// The state store failed.
    #[error("State error: {0}")]
    State(#[from] StateError),
}

impl TransactionError {
    /// The program error behind an `InstructionFailed`, if any.
    pub fn program_error(&self) -> Option<&ProgramError> {
        match self {
            Self::InstructionFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl ErrorCode for TransactionError {
    fn code(&self) -> &'static str {
        match self {
            Self::TooLarge { .. } => "TX_TOO_LARGE",
            Self::Empty => "TX_EMPTY",
            Self::SignatureMismatch => "TX_SIGNATURE_MISMATCH",
            Self::InvalidSignature(_) => "TX_INVALID_SIGNATURE",
            Self::AlreadyProcessed => "TX_ALREADY_PROCESSED",
            Self::Expired { .. } => "TX_EXPIRED",
            Self::UnknownProgram(_) => "TX_UNKNOWN_PROGRAM",
            Self::InsufficientFundsForFee { .. } => "TX_INSUFFICIENT_FUNDS_FOR_FEE",
            Self::InstructionFailed { .. } => "TX_INSTRUCTION_FAILED",
            Self::ReadonlyAccountModified { .. } => "TX_READONLY_ACCOUNT_MODIFIED",
            Self::Serialization(_) => "TX_SERIALIZATION_ERROR",
            Self::State(_) => "TX_STATE_ERROR",
        }
    }
}

/// Errors surfaced by the client to application code.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The chain rejected the transaction.
    #[error("Send transaction failed: {0}")]
    SendTransaction(#[from] TransactionError),
    /// The requested account does not exist.
    #[error("Account {0} does not exist")]
    AccountNotFound(Address),
    /// The account exists but its data is not the expected type.
    #[error("Failed to decode account {address}: {reason}")]
    AccountDecode {
        /// The account address.
        address: Address,
        /// Why decoding failed.
        reason: String,
    },
    /// Building or signing the transaction failed.
    #[error("Failed to build transaction: {0}")]
    BuildTransaction(String),
    /// A key or ciphertext was malformed.
    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),
    /// The RPC transport failed.
    #[error("RPC error: {0}")]
    Rpc(String),
}

impl ErrorCode for ClientError {
    fn code(&self) -> &'static str {
        match self {
            Self::SendTransaction(_) => "CLIENT_SEND_TRANSACTION_FAILED",
            Self::AccountNotFound(_) => "CLIENT_ACCOUNT_NOT_FOUND",
            Self::AccountDecode { .. } => "CLIENT_ACCOUNT_DECODE_FAILED",
            Self::BuildTransaction(_) => "CLIENT_BUILD_TRANSACTION_FAILED",
            Self::Crypto(_) => "CLIENT_CRYPTO_ERROR",
            Self::Rpc(_) => "CLIENT_RPC_ERROR",
        }
    }
}
