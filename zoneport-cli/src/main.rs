mod cli;
mod config;
mod migrate;

use anyhow::Result;
use clap::Parser;
use log::info;
use zoneport_provider::{CloudflareSource, VultrDestination};

use crate::cli::Cli;
use crate::config::Config;
use crate::migrate::Migrator;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // RUST_LOG still wins over --verbose when set explicitly.
    let default_filter = if args.verbose {
        "zoneport_cli=debug,zoneport_provider=debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = Config::from_env()?;

    let source = CloudflareSource::new(config.cloudflare_api_token);
    let destination = VultrDestination::new(config.vultr_api_key);

    let migrator = Migrator::new(source, destination, args.dry_run);
    let report = migrator.run(&args.domain).await?;

    if args.dry_run {
        info!("dry run complete, {} records would be published", report.processed);
    } else {
        info!("migration complete, {} records published", report.processed);
    }

    Ok(())
}
