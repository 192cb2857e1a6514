//! Backend health check.

use anyhow::Result;
use mira_client::ApiClient;

pub async fn run(client: &ApiClient) -> Result<()> {
    let health = client.health().await?;
    match health.service {
        Some(service) => println!("{}: {}", service, health.status),
        None => println!("{}", health.status),
    }
    Ok(())
}
