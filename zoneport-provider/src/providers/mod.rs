//! Provider implementations for the two ends of a migration.

/// Shared utilities used by provider implementations.
pub mod common;

mod cloudflare;
mod vultr;

pub use cloudflare::CloudflareSource;
pub use vultr::VultrDestination;
