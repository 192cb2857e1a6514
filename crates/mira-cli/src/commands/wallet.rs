//! Wallet commands.

use anyhow::{bail, Result};
use clap::Subcommand;
use mira_client::{ApiClient, LedgerParams};
use mira_core::TransactionType;

#[derive(Subcommand, Debug)]
pub enum WalletCommand {
    /// Show account balances
    Balance,
    /// Show ledger entries
    Ledger {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        page_size: u32,
        /// Filter by type, e.g. deposit, withdrawal, trade-pnl or fee
        #[arg(long, value_name = "TYPE")]
        r#type: Option<String>,
    },
}

fn parse_transaction_type(s: &str) -> Result<TransactionType> {
    match s.to_lowercase().as_str() {
        "deposit" => Ok(TransactionType::Deposit),
        "withdrawal" => Ok(TransactionType::Withdrawal),
        "trade-pnl" | "trade_pnl" => Ok(TransactionType::TradePnl),
        "fee" => Ok(TransactionType::Fee),
        "profit-share" | "profit_share" => Ok(TransactionType::ProfitShare),
        "referral" => Ok(TransactionType::Referral),
        "adjustment" => Ok(TransactionType::Adjustment),
        other => bail!("unknown transaction type '{other}'"),
    }
}

pub async fn run(client: &ApiClient, command: WalletCommand) -> Result<()> {
    match command {
        WalletCommand::Balance => {
            let accounts = client.wallet_balance().await?;
            println!("{:<12} {:<10} {:>16}", "TYPE", "CURRENCY", "BALANCE");
            for account in &accounts {
                println!(
                    "{:<12} {:<10} {:>16}",
                    account.account_type, account.currency, account.balance
                );
            }
        }
        WalletCommand::Ledger {
            page,
            page_size,
            r#type,
        } => {
            let params = LedgerParams {
                page: Some(page),
                page_size: Some(page_size),
                transaction_type: r#type.as_deref().map(parse_transaction_type).transpose()?,
                start_date: None,
                end_date: None,
            };
            let entries = client.ledger(&params).await?;

            println!(
                "{:<20} {:<12} {:>14} {:>14}  {}",
                "DATE", "TYPE", "AMOUNT", "BALANCE", "DESCRIPTION"
            );
            for entry in &entries.items {
                println!(
                    "{:<20} {:<12} {:>14} {:>14}  {}",
                    entry.created_at.format("%Y-%m-%d %H:%M:%S"),
                    entry.transaction_type.as_str(),
                    entry.amount,
                    entry.balance_after,
                    entry.description,
                );
            }
            println!(
                "page {}/{} ({} entries)",
                entries.page, entries.total_pages, entries.total
            );
        }
    }
    Ok(())
}
