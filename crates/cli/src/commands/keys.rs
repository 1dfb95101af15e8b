// Path: crates/cli/src/commands/keys.rs

use crate::util::decode_hex_array;
use ae_crypto::kem::x25519::{BoxKeyPair, SharedKey};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
pub struct KeysArgs {
    #[clap(subcommand)]
    pub command: KeysCommands,
}

#[derive(Subcommand, Debug)]
pub enum KeysCommands {
    /// Generate a new X25519 box keypair.
    Generate,
    /// Precompute the box key shared between two parties.
    Shared {
        /// The other party's public key (hex).
        #[clap(long)]
        their_public: String,
        /// Your secret key (hex).
        #[clap(long)]
        my_secret: String,
    },
}

pub fn run(args: KeysArgs) -> Result<()> {
    match args.command {
        KeysCommands::Generate => {
            let kp = BoxKeyPair::generate();
            println!("--- New X25519 Box Keypair ---");
            println!("Public Key: {}", hex::encode(kp.public_key.as_bytes()));
            println!("Secret Key: {}", hex::encode(kp.secret_key.as_bytes()));
        }
        KeysCommands::Shared {
            their_public,
            my_secret,
        } => {
            let their_public = decode_hex_array::<32>("--their-public", &their_public)?;
            let my_secret = decode_hex_array::<32>("--my-secret", &my_secret)?;
            let key = SharedKey::derive(&their_public, &my_secret);
            println!("{}", hex::encode(key.as_bytes()));
        }
    }
    Ok(())
}
