// Path: crates/cli/src/commands/demo.rs

use ae_client::{ProgramClient, Provider};
use ae_crypto::aead::{random_nonce, seal};
use ae_crypto::kem::x25519::{BoxKeyPair, SharedKey};
use ae_types::config::ChainConfig;
use ae_types::error::ErrorCode;
use anyhow::{anyhow, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Chain configuration (TOML). Defaults apply when omitted.
    #[clap(long)]
    pub config: Option<PathBuf>,
    /// The value Alice commits.
    #[clap(long, default_value = "hello from alice")]
    pub plain: String,
    /// Also attempt a reveal with a forged shared key, which must be rejected.
    #[clap(long)]
    pub forge: bool,
}

impl DemoArgs {
    pub fn load_config(&self) -> Result<ChainConfig> {
        match &self.config {
            Some(path) => Ok(ChainConfig::load(path)?),
            None => Ok(ChainConfig::default()),
        }
    }
}

#[derive(Serialize)]
struct DemoReport {
    program_id: String,
    record: String,
    public_key: String,
    nonce: String,
    cipher_text: String,
    plain_text: String,
    commit_signature: String,
    reveal_signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    forged_reveal_error: Option<String>,
}

pub async fn run(args: DemoArgs) -> Result<()> {
    let config = args.load_config()?;
    let program_id = config.program_id;
    let client = ProgramClient::new(Provider::local(config).await?, program_id);

    // Alice seals for Bob; either side can later derive the shared key.
    let alice = BoxKeyPair::generate();
    let bob = BoxKeyPair::generate();
    let nonce = random_nonce();
    let cipher_text = seal(
        args.plain.as_bytes(),
        &nonce,
        bob.public_key.as_bytes(),
        alice.secret_key.as_bytes(),
    )?;

    let commit = client
        .commit_value(alice.public_key.as_bytes(), &nonce, &cipher_text)
        .await?;
    let record = client.record_address(alice.public_key.as_bytes())?;
    tracing::info!(target: "demo", %record, signature = %commit.signature_b58(), "Committed sealed value.");

    let forged_reveal_error = if args.forge {
        let forged = SharedKey::derive(bob.secret_key.as_bytes(), alice.public_key.as_bytes());
        match client
            .reveal_value(alice.public_key.as_bytes(), forged.as_bytes())
            .await
        {
            Ok(_) => return Err(anyhow!("reveal with a forged shared key was accepted")),
            Err(e) => {
                let untouched = client.fetch_encrypted_account(&record).await?;
                if untouched.is_revealed() {
                    return Err(anyhow!("forged reveal exposed the plaintext"));
                }
                tracing::info!(target: "demo", code = e.code(), "Forged reveal rejected.");
                Some(format!("{}: {}", e.code(), e))
            }
        }
    } else {
        None
    };

    let shared = bob.shared_key(&alice.public_key);
    let reveal = client
        .reveal_value(alice.public_key.as_bytes(), shared.as_bytes())
        .await?;
    let revealed = client.fetch_encrypted_account(&record).await?;

    let report = DemoReport {
        program_id: program_id.to_string(),
        record: record.to_string(),
        public_key: hex::encode(&revealed.public_key),
        nonce: hex::encode(&revealed.nonce),
        cipher_text: hex::encode(&revealed.cipher_text),
        plain_text: String::from_utf8_lossy(&revealed.plain_text).into_owned(),
        commit_signature: commit.signature_b58(),
        reveal_signature: reveal.signature_b58(),
        forged_reveal_error,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
