//! Session commands: login, logout, whoami.

use anyhow::{Context, Result};
use mira_client::ApiClient;
use std::io::Write;

pub async fn login(client: &ApiClient, email: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => prompt("Password: ")?,
    };

    let response = client.login(email, &password).await?;

    if response.require_2fa {
        let pre_auth = response
            .pre_auth_token
            .context("2FA required but no pre-auth token returned")?;
        let code = prompt("2FA code: ")?;
        client.verify_2fa(&pre_auth, code.trim()).await?;
    }

    println!("Logged in as {email}");
    Ok(())
}

pub async fn logout(client: &ApiClient) -> Result<()> {
    client.logout().await?;
    println!("Logged out");
    Ok(())
}

pub async fn whoami(client: &ApiClient) -> Result<()> {
    let me = client.me_full().await?;
    let user = &me.user;

    println!("{} {} <{}>", user.first_name, user.last_name, user.email);
    println!("  id:       {}", user.id);
    println!("  status:   {:?}", user.status);
    println!("  2fa:      {}", if user.is_2fa_enabled { "on" } else { "off" });
    if let Some(kyc) = &me.kyc {
        println!("  kyc:      {:?}", kyc.status);
    }
    if let Some(profile) = &me.trader_profile {
        println!("  trader:   {} ({})", profile.alias, profile.id);
    }
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}
