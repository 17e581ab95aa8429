//! # zoneport-provider
//!
//! Provider clients and record translation for `zoneport`, a one-shot DNS
//! zone migration tool.
//!
//! The crate covers the two ends of a migration plus the translation step
//! in between:
//!
//! | Role | Provider | Auth Method |
//! |------|----------|-------------|
//! | Source (read-only) | [Cloudflare](https://www.cloudflare.com/) | Bearer Token |
//! | Destination | [Vultr](https://www.vultr.com/) | Bearer Token |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zoneport_provider::{CloudflareSource, VultrDestination, ZoneDestination, ZoneSource};
//! use zoneport_provider::normalize::normalize_record;
//!
//! # async fn example() -> zoneport_provider::Result<()> {
//! let source = CloudflareSource::new("cf-token".to_string());
//! let destination = VultrDestination::new("vultr-key".to_string());
//!
//! let zone = source.find_zone("example.com").await?;
//! for mut record in source.fetch_records(&zone).await? {
//!     normalize_record(&mut record, "example.com");
//!     destination.create_record("example.com", &record).await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! The error enum provides structured variants for the failure modes that
//! matter to a migration run:
//!
//! - [`ProviderError::ZoneNotFound`] — the zone does not exist at that end
//! - [`ProviderError::InvalidCredentials`] — authentication failed
//! - [`ProviderError::RecordExists`] — the destination already has the record
//! - [`ProviderError::RateLimited`] — API rate limit exceeded
//!
//! Nothing is retried here; the migration driver decides which failures are
//! fatal and which are per-record warnings.

mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub mod normalize;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export core traits
pub use traits::{ZoneDestination, ZoneSource};

// Re-export types
pub use types::{Record, RecordType, SourceZone};

// Re-export utils
pub use utils::log_sanitizer::{mask_secret, truncate_for_log};

// Re-export concrete providers
pub use providers::{CloudflareSource, VultrDestination};

// Re-export name handling shared with callers
pub use providers::common::normalize_domain_name;
