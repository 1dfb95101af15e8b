// Path: crates/types/src/config/mod.rs

//! Chain configuration shared by the local chain, the client and the CLI.

use crate::app::Address;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// The program id the commit-reveal program is deployed at unless configured otherwise.
pub const DEFAULT_PROGRAM_ID: &str = "Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS";

/// Bytes of bookkeeping charged on top of every account's data for rent purposes.
pub const ACCOUNT_STORAGE_OVERHEAD: u64 = 128;

/// Errors loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Io {
        /// The path that failed.
        path: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for `ChainConfig`.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configuration could not be rendered as TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Selects the output format of the tracing subscriber.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Parameters of the local chain.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    /// Address the commit-reveal program is registered at.
    #[serde(default = "default_program_id")]
    pub program_id: Address,
    /// Bytes allocated to each encrypted record account.
    #[serde(default = "default_account_space")]
    pub account_space: u32,
    /// Rent rate used to compute the rent-exempt minimum.
    #[serde(default = "default_lamports_per_byte_year")]
    pub lamports_per_byte_year: u64,
    /// Years of rent an account must hold to be rent exempt.
    #[serde(default = "default_exemption_threshold_years")]
    pub exemption_threshold_years: u64,
    /// Fee charged to the payer per required signature.
    #[serde(default = "default_lamports_per_signature")]
    pub lamports_per_signature: u64,
    /// Lamports granted by a wallet airdrop.
    #[serde(default = "default_airdrop_lamports")]
    pub airdrop_lamports: u64,
    /// Upper bound on the encoded size of a transaction.
    #[serde(default = "default_max_transaction_size")]
    pub max_transaction_size: usize,
    /// How many blocks a message's `recent_height` stays valid for.
    #[serde(default = "default_max_transaction_age")]
    pub max_transaction_age: u64,
    /// Output format for logs.
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_program_id() -> Address {
    // The constant is valid base58 of exactly 32 bytes.
    Address::from_str(DEFAULT_PROGRAM_ID).unwrap_or_default()
}
fn default_account_space() -> u32 {
    crate::ACCOUNT_SPACE
}
fn default_lamports_per_byte_year() -> u64 {
    3480
}
fn default_exemption_threshold_years() -> u64 {
    2
}
fn default_lamports_per_signature() -> u64 {
    5000
}
fn default_airdrop_lamports() -> u64 {
    10_000_000_000
}
fn default_max_transaction_size() -> usize {
    1232
}
fn default_max_transaction_age() -> u64 {
    150
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            program_id: default_program_id(),
            account_space: default_account_space(),
            lamports_per_byte_year: default_lamports_per_byte_year(),
            exemption_threshold_years: default_exemption_threshold_years(),
            lamports_per_signature: default_lamports_per_signature(),
            airdrop_lamports: default_airdrop_lamports(),
            max_transaction_size: default_max_transaction_size(),
            max_transaction_age: default_max_transaction_age(),
            log_format: LogFormat::default(),
        }
    }
}

impl ChainConfig {
    /// Loads a configuration from a TOML file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Lamports an account of `space` data bytes must hold to be rent exempt.
    pub fn rent_exempt_minimum(&self, space: u32) -> u64 {
        (u64::from(space) + ACCOUNT_STORAGE_OVERHEAD)
            .saturating_mul(self.lamports_per_byte_year)
            .saturating_mul(self.exemption_threshold_years)
    }

    /// The fee for a transaction carrying `signatures` signatures.
    pub fn fee_for(&self, signatures: usize) -> u64 {
        self.lamports_per_signature
            .saturating_mul(signatures as u64)
    }
}
