//! Trader discovery commands.

use anyhow::Result;
use clap::Subcommand;
use mira_client::{ApiClient, TraderListParams};
use rust_decimal::Decimal;
use uuid::Uuid;

#[derive(Subcommand, Debug)]
pub enum TradersCommand {
    /// List traders available for copying
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        page_size: u32,
        /// Sort key, e.g. "roi" or "win_rate"
        #[arg(long)]
        sort_by: Option<String>,
        /// Minimum 30-day ROI filter, in percent
        #[arg(long)]
        min_roi: Option<Decimal>,
    },
    /// Show one trader profile
    Show { id: Uuid },
}

pub async fn run(client: &ApiClient, command: TradersCommand) -> Result<()> {
    match command {
        TradersCommand::List {
            page,
            page_size,
            sort_by,
            min_roi,
        } => {
            let params = TraderListParams {
                page: Some(page),
                page_size: Some(page_size),
                sort_by,
                min_roi,
            };
            let traders = client.traders(&params).await?;

            println!(
                "{:<24} {:<12} {:>8} {:>8} {:>12} {:>6}",
                "ALIAS", "STATUS", "WIN%", "TRADES", "PNL", "SUBS"
            );
            for t in &traders.items {
                println!(
                    "{:<24} {:<12} {:>8} {:>8} {:>12} {:>6}",
                    t.alias,
                    format!("{:?}", t.status),
                    t.win_rate,
                    t.total_trades,
                    t.total_pnl,
                    t.current_subscribers,
                );
            }
            println!(
                "page {}/{} ({} traders)",
                traders.page, traders.total_pages, traders.total
            );
        }
        TradersCommand::Show { id } => {
            let t = client.trader(id).await?;
            println!("{} ({})", t.alias, t.id);
            if let Some(bio) = &t.bio {
                println!("  {bio}");
            }
            println!("  status:          {:?}", t.status);
            println!("  win rate:        {}", t.win_rate);
            println!("  total trades:    {}", t.total_trades);
            println!("  total pnl:       {}", t.total_pnl);
            println!("  performance fee: {}%", t.performance_fee_percentage);
            println!("  min allocation:  {}", t.min_allocation_amount);
            println!(
                "  subscribers:     {}{}",
                t.current_subscribers,
                t.max_subscribers
                    .map(|m| format!("/{m}"))
                    .unwrap_or_default()
            );
            println!(
                "  accepting:       {}",
                if t.accepts_subscribers() { "yes" } else { "no" }
            );
        }
    }
    Ok(())
}
