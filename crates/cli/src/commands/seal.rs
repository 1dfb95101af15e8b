// Path: crates/cli/src/commands/seal.rs

use crate::util::decode_hex_array;
use ae_crypto::aead::{random_nonce, seal};
use anyhow::Result;
use clap::Parser;
use serde::Serialize;

#[derive(Parser, Debug)]
pub struct SealArgs {
    /// The value to seal (UTF-8).
    #[clap(long)]
    pub plain: String,
    /// The recipient's public key (hex).
    #[clap(long)]
    pub their_public: String,
    /// The sender's secret key (hex).
    #[clap(long)]
    pub my_secret: String,
    /// A 24-byte nonce (hex). A random one is drawn if omitted.
    #[clap(long)]
    pub nonce: Option<String>,
}

#[derive(Serialize)]
struct Sealed {
    nonce: String,
    cipher_text: String,
}

pub fn run(args: SealArgs) -> Result<()> {
    let their_public = decode_hex_array::<32>("--their-public", &args.their_public)?;
    let my_secret = decode_hex_array::<32>("--my-secret", &args.my_secret)?;
    let nonce = match args.nonce {
        Some(n) => decode_hex_array::<24>("--nonce", &n)?,
        None => random_nonce(),
    };
    let cipher_text = seal(args.plain.as_bytes(), &nonce, &their_public, &my_secret)?;
    let out = Sealed {
        nonce: hex::encode(nonce),
        cipher_text: hex::encode(cipher_text),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
