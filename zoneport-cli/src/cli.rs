//! Command-line argument definitions.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "zoneport",
    author,
    version,
    about = "Migrate a DNS zone from Cloudflare to Vultr, one record at a time"
)]
pub struct Cli {
    /// Zone apex domain to migrate (e.g. example.com)
    #[arg(value_name = "DOMAIN")]
    pub domain: String,

    /// Show what would be published without touching the destination
    #[arg(long)]
    pub dry_run: bool,

    /// Debug-level diagnostics, including request and response bodies
    #[arg(short, long)]
    pub verbose: bool,
}
