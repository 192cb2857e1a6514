//! Subscription commands.

use anyhow::{bail, Result};
use clap::Subcommand;
use mira_client::ApiClient;
use mira_core::{Amount, CopyMode, Subscription, SubscriptionCreate, SubscriptionStatus};
use uuid::Uuid;

#[derive(Subcommand, Debug)]
pub enum SubsCommand {
    /// List subscriptions
    List {
        /// Filter by status: active, paused or stopped
        #[arg(long)]
        status: Option<String>,
    },
    /// Start copying a trader
    Follow {
        trader_id: Uuid,
        /// Amount to allocate to this trader
        allocation: Amount,
        /// Copy a fixed size per trade instead of proportional sizing
        #[arg(long)]
        fixed: bool,
    },
    /// Pause a subscription
    Pause { id: Uuid },
    /// Resume a paused subscription
    Resume { id: Uuid },
    /// Stop a subscription permanently
    Stop { id: Uuid },
}

fn parse_status(s: &str) -> Result<SubscriptionStatus> {
    match s.to_lowercase().as_str() {
        "active" => Ok(SubscriptionStatus::Active),
        "paused" => Ok(SubscriptionStatus::Paused),
        "stopped" => Ok(SubscriptionStatus::Stopped),
        other => bail!("unknown status '{other}' (expected active, paused or stopped)"),
    }
}

fn print_subscription(sub: &Subscription) {
    let leader = sub
        .leader_profile
        .as_ref()
        .map(|p| p.alias.clone())
        .unwrap_or_else(|| sub.leader_profile_id.to_string());
    println!(
        "{:<38} {:<24} {:<10} {:>12} {:>12} {:>8}",
        sub.id,
        leader,
        format!("{:?}", sub.status),
        sub.allocation_amount,
        sub.total_pnl,
        sub.total_copied_trades,
    );
}

pub async fn run(client: &ApiClient, command: SubsCommand) -> Result<()> {
    match command {
        SubsCommand::List { status } => {
            let status = status.as_deref().map(parse_status).transpose()?;
            let subs = client.subscriptions(status).await?;

            println!(
                "{:<38} {:<24} {:<10} {:>12} {:>12} {:>8}",
                "ID", "TRADER", "STATUS", "ALLOCATION", "PNL", "TRADES"
            );
            for sub in &subs {
                print_subscription(sub);
            }
        }
        SubsCommand::Follow {
            trader_id,
            allocation,
            fixed,
        } => {
            let create = SubscriptionCreate {
                leader_profile_id: trader_id,
                allocation_amount: allocation,
                copy_mode: fixed.then_some(CopyMode::Fixed),
            };
            let sub = client.create_subscription(&create).await?;
            println!("Following trader, subscription {}", sub.id);
        }
        SubsCommand::Pause { id } => {
            let sub = client.pause_subscription(id).await?;
            println!("Subscription {} is now {:?}", sub.id, sub.status);
        }
        SubsCommand::Resume { id } => {
            let sub = client.resume_subscription(id).await?;
            println!("Subscription {} is now {:?}", sub.id, sub.status);
        }
        SubsCommand::Stop { id } => {
            let sub = client.stop_subscription(id).await?;
            println!("Subscription {} is now {:?}", sub.id, sub.status);
        }
    }
    Ok(())
}
