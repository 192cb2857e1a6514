//! Mira command-line client - entry point.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mira_client::{ApiClient, ClientConfig, FileTokenStore, TokenManager};
use std::sync::Arc;
use tracing::debug;

/// Command-line client for the Mira copy-trading platform
#[derive(Parser, Debug)]
#[command(name = "mira", version, about, long_about = None)]
struct Args {
    /// API base URL (can also be set via MIRA_API_URL env var)
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store tokens locally
    Login {
        /// Account email
        email: String,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Log out and clear stored tokens
    Logout,
    /// Show the authenticated user
    Whoami,
    /// Trader discovery
    Traders {
        #[command(subcommand)]
        command: commands::traders::TradersCommand,
    },
    /// Copy-trading subscriptions
    Subs {
        #[command(subcommand)]
        command: commands::subs::SubsCommand,
    },
    /// Wallet balances and ledger
    Wallet {
        #[command(subcommand)]
        command: commands::wallet::WalletCommand,
    },
    /// Exchange API keys
    Keys {
        #[command(subcommand)]
        command: commands::keys::KeysCommand,
    },
    /// Backend health check
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    mira_telemetry::init_logging()?;

    let config = match args.api_url {
        Some(url) => ClientConfig::with_base_url(url),
        None => ClientConfig::from_env(),
    };
    debug!(base_url = %config.base_url, "Using API");

    let store = FileTokenStore::new()?;
    let tokens = TokenManager::new(Arc::new(store))?;
    let client = ApiClient::with_tokens(config, tokens)?;

    match args.command {
        Command::Login { email, password } => commands::auth::login(&client, &email, password).await,
        Command::Logout => commands::auth::logout(&client).await,
        Command::Whoami => commands::auth::whoami(&client).await,
        Command::Traders { command } => commands::traders::run(&client, command).await,
        Command::Subs { command } => commands::subs::run(&client, command).await,
        Command::Wallet { command } => commands::wallet::run(&client, command).await,
        Command::Keys { command } => commands::keys::run(&client, command).await,
        Command::Health => commands::health::run(&client).await,
    }
}
