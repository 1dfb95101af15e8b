// Path: crates/cli/src/util.rs

use anyhow::{anyhow, Context, Result};

/// Decodes a hex argument, naming it in the error.
pub fn decode_hex(label: &str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value.trim_start_matches("0x")).with_context(|| format!("Invalid hex for {}", label))
}

/// Decodes a hex argument that must be exactly `N` bytes.
pub fn decode_hex_array<const N: usize>(label: &str, value: &str) -> Result<[u8; N]> {
    let bytes = decode_hex(label, value)?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| anyhow!("{} must be {} bytes, got {}", label, N, len))
}
