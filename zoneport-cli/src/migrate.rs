//! The migration driver.
//!
//! One linear pass over the source zone: fetch, normalize, publish. Records
//! are published one at a time with a fixed pause between real publishes so
//! the destination's rate limit is never in play. A failed publish is a
//! warning, not a stop; re-running the tool may duplicate records.

use std::time::Duration;

use log::{error, info, warn};
use zoneport_provider::normalize::normalize_record;
use zoneport_provider::{Result, ZoneDestination, ZoneSource, normalize_domain_name};

/// Pause between consecutive record publishes on real runs.
const INTER_RECORD_DELAY: Duration = Duration::from_secs(2);

/// Outcome of a migration pass.
pub struct MigrationReport {
    /// Records normalized and published (or, in dry-run, that would be).
    pub processed: usize,
}

pub struct Migrator<S, D> {
    source: S,
    destination: D,
    dry_run: bool,
    delay: Duration,
}

impl<S: ZoneSource, D: ZoneDestination> Migrator<S, D> {
    pub fn new(source: S, destination: D, dry_run: bool) -> Self {
        Self {
            source,
            destination,
            dry_run,
            delay: INTER_RECORD_DELAY,
        }
    }

    #[cfg(test)]
    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub async fn run(&self, domain: &str) -> Result<MigrationReport> {
        // Strip a trailing dot once here so both providers see the same
        // name and the destination request paths stay well-formed.
        let domain = &normalize_domain_name(domain);
        let zone = self.source.find_zone(domain).await?;
        info!("source zone {} found on {} (id {})", zone.name, self.source.id(), zone.id);

        let records = self.source.fetch_records(&zone).await?;
        info!("fetched {} records:", records.len());
        for record in &records {
            info!("  {record}");
        }

        self.check_destination_zone(domain).await;

        let mut processed = 0usize;
        for mut record in records {
            // Skips blank entries without counting them.
            if record.is_empty() {
                continue;
            }

            normalize_record(&mut record, &zone.name);

            if self.dry_run {
                info!("dry-run: would publish {record}");
            } else {
                info!("publishing {record}");
                if let Err(err) = self.destination.create_record(domain, &record).await {
                    if err.is_expected() {
                        warn!("failed to publish {}: {err}", record.name);
                    } else {
                        error!("failed to publish {}: {err}", record.name);
                    }
                }
                tokio::time::sleep(self.delay).await;
            }
            processed += 1;
        }

        if !self.dry_run {
            self.show_destination_records(domain).await;
        }

        Ok(MigrationReport { processed })
    }

    /// A missing destination zone is worth a warning up front, but the
    /// per-record errors tell the real story, so it is not fatal.
    async fn check_destination_zone(&self, domain: &str) {
        match self.destination.list_zones().await {
            Ok(zones) if zones.iter().any(|zone| zone == domain) => {
                info!("destination zone {domain} present on {}", self.destination.id());
            }
            Ok(_) => {
                warn!(
                    "destination zone {domain} not found on {}, publishes will likely fail",
                    self.destination.id()
                );
            }
            Err(err) => warn!("could not list destination zones: {err}"),
        }
    }

    async fn show_destination_records(&self, domain: &str) {
        match self.destination.list_records(domain).await {
            Ok(records) => {
                info!("destination zone {domain} now holds {} records:", records.len());
                for record in &records {
                    info!("  {record}");
                }
            }
            Err(err) => warn!("could not list destination records: {err}"),
        }
    }
}
