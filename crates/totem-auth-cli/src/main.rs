/*
[INPUT]:  CLI arguments, YAML configuration file, message files
[OUTPUT]: Challenges, signatures, and verification verdicts on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use totem_auth::Chain;
use totem_auth_cli::CliConfig;
use totem_auth_cli::commands;

#[derive(Parser, Debug)]
#[command(name = "totem-auth", version, about = "Founders Totem wallet authentication tool")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a challenge for a wallet address
    Challenge {
        #[arg(long)]
        address: String,
    },
    /// Sign a challenge with a local private key (development only)
    Sign {
        /// Overrides the configured chain
        #[arg(long, value_enum)]
        chain: Option<Chain>,
        #[arg(long = "private-key")]
        private_key: String,
        #[arg(long = "message-file", value_name = "PATH")]
        message_file: PathBuf,
    },
    /// Verify a signed challenge
    ///
    /// Each run starts with an empty nonce ledger, so a replay is only
    /// detected within a single process, never across separate runs.
    Verify {
        #[arg(long)]
        address: String,
        #[arg(long = "message-file", value_name = "PATH")]
        message_file: PathBuf,
        #[arg(long)]
        signature: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = CliConfig::load(args.config_path.as_deref()).context("load config")?;
    info!(chain = ?config.chain, remote = config.remote_verifier.is_some(), "configuration loaded");

    match args.command {
        Command::Challenge { address } => {
            println!("{}", commands::challenge(&address)?);
        }
        Command::Sign {
            chain,
            private_key,
            message_file,
        } => {
            let message = commands::read_message(&message_file)?;
            let chain = chain.unwrap_or(config.chain);
            println!("{}", commands::sign(chain, &private_key, &message).await?);
        }
        Command::Verify {
            address,
            message_file,
            signature,
        } => {
            let message = commands::read_message(&message_file)?;
            let result = commands::verify(&config, &address, &message, signature.trim()).await?;
            println!(
                "{}",
                serde_json::to_string(&result).context("serialize verification result")?
            );
            if !result.is_valid() {
                warn!(address = %address, error = ?result.error, "verification failed");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
