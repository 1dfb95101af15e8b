// Path: crates/cli/src/main.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # AE CLI
//!
//! Key tooling, sealing and a local commit-reveal walkthrough.

use ae_types::config::LogFormat;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod util;

use commands::*;

#[derive(Parser, Debug)]
#[clap(
    name = "ae",
    version,
    about = "The AE CLI (tools for the AE commit-reveal kernel).",
    long_about = "Generates box keys, seals values, and runs a commit-reveal round trip against an in-process chain."
)]
struct Cli {
    /// Log output format. Defaults to the chain config's `log_format`.
    #[clap(long, value_enum, global = true)]
    log_format: Option<LogFormatArg>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage X25519 box keys.
    Keys(keys::KeysArgs),

    /// Seal a value for a recipient (NaCl box).
    Seal(seal::SealArgs),

    /// Commit and reveal a value on a throwaway local chain.
    Demo(demo::DemoArgs),

    /// Generate chain configuration files.
    Config(config::ConfigCmdArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let format = match (cli.log_format, &cli.command) {
        (Some(arg), _) => arg.into(),
        (None, Commands::Demo(args)) => args.load_config()?.log_format,
        (None, _) => LogFormat::default(),
    };
    ae_telemetry::init_tracing(format)?;

    match cli.command {
        Commands::Keys(args) => keys::run(args),
        Commands::Seal(args) => seal::run(args),
        Commands::Demo(args) => demo::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}
