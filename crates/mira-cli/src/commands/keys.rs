//! Exchange API key commands.

use anyhow::{bail, Result};
use clap::Subcommand;
use mira_client::ApiClient;
use mira_core::{Exchange, ExchangeKeyCreate};
use uuid::Uuid;

#[derive(Subcommand, Debug)]
pub enum KeysCommand {
    /// List stored exchange keys
    List {
        /// Filter by exchange: binance, bybit or okx
        #[arg(long)]
        exchange: Option<String>,
    },
    /// Register a new exchange key
    Add {
        /// Exchange: binance, bybit or okx
        exchange: String,
        /// Human-readable label
        label: String,
        #[arg(long)]
        api_key: String,
        #[arg(long)]
        api_secret: String,
        /// Passphrase, required by some exchanges
        #[arg(long)]
        passphrase: Option<String>,
    },
    /// Revoke a key
    Revoke { id: Uuid },
}

fn parse_exchange(s: &str) -> Result<Exchange> {
    match s.to_lowercase().as_str() {
        "binance" => Ok(Exchange::Binance),
        "bybit" => Ok(Exchange::Bybit),
        "okx" => Ok(Exchange::Okx),
        other => bail!("unknown exchange '{other}' (expected binance, bybit or okx)"),
    }
}

pub async fn run(client: &ApiClient, command: KeysCommand) -> Result<()> {
    match command {
        KeysCommand::List { exchange } => {
            let exchange = exchange.as_deref().map(parse_exchange).transpose()?;
            let keys = client.keys(exchange).await?;

            println!(
                "{:<38} {:<10} {:<20} {:<16} {:<6}",
                "ID", "EXCHANGE", "LABEL", "KEY", "VALID"
            );
            for key in &keys {
                println!(
                    "{:<38} {:<10} {:<20} {:<16} {:<6}",
                    key.id,
                    key.exchange_name,
                    key.label,
                    key.api_key_masked,
                    if key.is_valid { "yes" } else { "no" },
                );
            }
        }
        KeysCommand::Add {
            exchange,
            label,
            api_key,
            api_secret,
            passphrase,
        } => {
            let create = ExchangeKeyCreate {
                exchange_name: parse_exchange(&exchange)?,
                label,
                api_key,
                api_secret,
                passphrase,
            };
            let key = client.create_key(&create).await?;
            println!("Key {} registered for {}", key.id, key.exchange_name);
        }
        KeysCommand::Revoke { id } => {
            client.revoke_key(id).await?;
            println!("Key {id} revoked");
        }
    }
    Ok(())
}
