//! Cloudflare `ZoneSource` trait implementation.

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::providers::common::{full_name_to_relative, normalize_domain_name, unescape_wildcard};
use crate::traits::{ProviderErrorMapper, ZoneSource};
use crate::types::{Record, RecordType, SourceZone};

use super::{
    CloudflareDnsRecord, CloudflareSource, CloudflareSrvData, CloudflareZone,
    MAX_PAGE_SIZE_RECORDS,
};

impl CloudflareSource {
    /// Convert one Cloudflare record into the neutral [`Record`] shape,
    /// or `None` for records that never migrate (SOA, apex NS).
    ///
    /// Folds the out-of-band MX priority and the structured SRV data back
    /// into the single `data` string, relativizes the name against the
    /// zone, and rewrites escaped wildcard labels.
    fn to_record(cf_record: CloudflareDnsRecord, zone_name: &str) -> Option<Record> {
        let record_type = RecordType::from(cf_record.record_type);
        let relative = full_name_to_relative(&cf_record.name, zone_name);

        // SOA stays with whoever holds start-of-authority; the apex NS set
        // stays with whoever manages delegation.
        match record_type {
            RecordType::Soa => return None,
            RecordType::Ns if relative == "@" => return None,
            _ => {}
        }

        let data = match record_type {
            RecordType::Mx => match cf_record.priority {
                Some(priority) => format!("{priority} {}", cf_record.content),
                None => cf_record.content,
            },
            RecordType::Srv => Self::srv_data(
                cf_record.data.as_ref(),
                cf_record.priority,
                cf_record.content,
            ),
            RecordType::Txt => join_txt_fragments(&cf_record.content),
            _ => cf_record.content,
        };

        Some(Record {
            name: unescape_wildcard(&relative),
            ttl: cf_record.ttl,
            record_type,
            data,
        })
    }

    /// Build the `"<priority> <weight> <port> <target>"` payload for an SRV
    /// record, preferring the structured `data` object over the flat content.
    fn srv_data(
        data: Option<&serde_json::Value>,
        priority: Option<u16>,
        content: String,
    ) -> String {
        if let Some(value) = data {
            if let Ok(srv) = serde_json::from_value::<CloudflareSrvData>(value.clone()) {
                return format!("{} {} {} {}", srv.priority, srv.weight, srv.port, srv.target);
            }
        }
        match priority {
            Some(priority) => format!("{priority} {content}"),
            None => content,
        }
    }
}

#[async_trait]
impl ZoneSource for CloudflareSource {
    fn id(&self) -> &'static str {
        "cloudflare"
    }

    async fn find_zone(&self, domain: &str) -> Result<SourceZone> {
        let domain = normalize_domain_name(domain);
        let (zones, _): (Vec<CloudflareZone>, u32) = self
            .get_list(&format!("/zones?name={}", urlencoding::encode(&domain)))
            .await?;

        zones
            .into_iter()
            .find(|z| z.name == domain)
            .map(|z| SourceZone {
                id: z.id,
                name: z.name,
            })
            .ok_or_else(|| ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone: domain,
                raw_message: None,
            })
    }

    async fn fetch_records(&self, zone: &SourceZone) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut page = 1u32;

        loop {
            let (cf_records, total_count): (Vec<CloudflareDnsRecord>, u32) = self
                .get_list(&format!(
                    "/zones/{}/dns_records?page={page}&per_page={MAX_PAGE_SIZE_RECORDS}",
                    zone.id
                ))
                .await?;

            if page == 1 {
                log::debug!(
                    "[{}] zone {} lists {total_count} records",
                    self.provider_name(),
                    zone.name
                );
            }

            let batch_len = cf_records.len();
            records.extend(
                cf_records
                    .into_iter()
                    .filter_map(|r| Self::to_record(r, &zone.name)),
            );

            if batch_len < MAX_PAGE_SIZE_RECORDS as usize {
                break;
            }
            page += 1;
        }

        Ok(records)
    }
}

/// Join a multi-fragment quoted TXT value (`"frag1" "frag2"`) into one
/// string. Unquoted or unbalanced content is passed through unchanged.
fn join_txt_fragments(content: &str) -> String {
    let trimmed = content.trim();
    if !trimmed.starts_with('"') {
        return content.to_string();
    }

    let mut joined = String::new();
    let mut rest = trimmed;
    while let Some(stripped) = rest.strip_prefix('"') {
        match stripped.find('"') {
            Some(end) => {
                joined.push_str(&stripped[..end]);
                rest = stripped[end + 1..].trim_start();
            }
            None => return content.to_string(),
        }
    }

    if rest.is_empty() {
        joined
    } else {
        content.to_string()
    }
}
