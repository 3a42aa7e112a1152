// src/bin/grant_admin.rs
//! Register a network address as an admin origin: `grant_admin <ip>`.
use anyhow::{Context, Result, bail};
use gamenews::config::AppConfig;
use gamenews::domain::admin::{AdminRecord, AdminRepository};
use gamenews::infrastructure::{database, repositories::SqliteAdminRepository};
use std::{env, net::IpAddr};

#[tokio::main]
async fn main() -> Result<()> {
    let Some(raw) = env::args().nth(1) else {
        bail!("usage: grant_admin <ip-address>");
    };
    let ip: IpAddr = raw
        .trim()
        .parse()
        .with_context(|| format!("{raw:?} is not an IP address"))?;

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url(), 1).await?;
    database::run_migrations(&pool).await?;

    let repo = SqliteAdminRepository::new(pool);
    let record = AdminRecord::new(uuid::Uuid::new_v4().to_string(), ip.to_canonical().to_string())?;

    if repo.insert(&record).await? {
        println!("{ip} is now an admin origin");
    } else {
        println!("{ip} was already an admin origin");
    }
    Ok(())
}
