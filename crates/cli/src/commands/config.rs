// Path: crates/cli/src/commands/config.rs

use ae_types::config::ChainConfig;
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ConfigCmdArgs {
    #[clap(subcommand)]
    pub command: ConfigSubCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubCommands {
    /// Write the default chain configuration as TOML.
    New {
        #[clap(long, default_value = "chain.toml")]
        out: PathBuf,
        /// Overwrite an existing file.
        #[clap(long)]
        force: bool,
    },
}

pub fn run(args: ConfigCmdArgs) -> Result<()> {
    match args.command {
        ConfigSubCommands::New { out, force } => {
            if out.exists() && !force {
                return Err(anyhow!(
                    "{} already exists; pass --force to overwrite",
                    out.display()
                ));
            }
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(&out, ChainConfig::default().to_toml()?)?;
            println!("Wrote {}", out.display());
        }
    }
    Ok(())
}
