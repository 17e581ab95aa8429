use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{Record, SourceZone};

/// Raw API error (internal).
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Error code, in whatever format the provider uses.
    pub code: Option<String>,
    /// Raw error message.
    pub message: String,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Extra information available when mapping an error (internal).
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Record name, for `RecordExists` and friends.
    pub record_name: Option<String>,
    /// Zone name, for `ZoneNotFound`.
    pub zone: Option<String>,
}

/// Error mapping seam implemented by each provider (internal).
///
/// Providers translate their raw API errors into the unified
/// [`ProviderError`] here, so the callers never see provider-specific codes.
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier used in error and log output.
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error into the unified error type.
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Shortcut: unmapped error (fallback).
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// The read-only end of a migration.
///
/// Implementations resolve a zone and hand back its full record set in the
/// neutral [`Record`] shape: names relativized, escaped wildcards unescaped,
/// apex NS and SOA records already filtered out.
#[async_trait]
pub trait ZoneSource: Send + Sync {
    /// Provider identifier.
    fn id(&self) -> &'static str;

    /// Resolve a zone by its exact name.
    ///
    /// A zone that does not exist at the source is
    /// [`ProviderError::ZoneNotFound`]; the migration driver treats that as
    /// fatal to the whole run.
    async fn find_zone(&self, domain: &str) -> Result<SourceZone>;

    /// Fetch every migratable record in the zone.
    ///
    /// The returned sequence preserves the provider's listing order and
    /// never contains apex NS records or SOA records.
    async fn fetch_records(&self, zone: &SourceZone) -> Result<Vec<Record>>;
}

/// The write end of a migration.
#[async_trait]
pub trait ZoneDestination: Send + Sync {
    /// Provider identifier.
    fn id(&self) -> &'static str;

    /// List the zone names that exist at the destination.
    ///
    /// Informational; the driver uses it to warn when the target zone has
    /// not been created yet.
    async fn list_zones(&self) -> Result<Vec<String>>;

    /// Publish one record into the given zone as a single additive change.
    ///
    /// The record is expected to be normalized already. The apex translation
    /// (`"@"` to the destination's empty-name convention) happens inside the
    /// implementation, at the payload boundary.
    async fn create_record(&self, domain: &str, record: &Record) -> Result<()>;

    /// List the zone's current records, for post-migration display.
    async fn list_records(&self, domain: &str) -> Result<Vec<Record>>;
}
