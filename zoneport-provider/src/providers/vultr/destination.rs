//! Vultr `ZoneDestination` trait implementation.

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{ErrorContext, ZoneDestination};
use crate::types::{Record, RecordType};

use super::types::CreateRecordBody;
use super::{MAX_PAGE_SIZE, VultrDestination, VultrDomainsResponse, VultrRecord, VultrRecordsResponse};

impl VultrDestination {
    /// Translate the neutral `"@"` apex marker into Vultr's convention,
    /// where the apex is the empty name. This is a Vultr convention, not a
    /// DNS one, so it lives here at the payload boundary.
    fn payload_name(name: &str) -> String {
        if name == "@" {
            String::new()
        } else {
            name.to_string()
        }
    }

    /// Build the one-record additive change body.
    ///
    /// `data` is carried verbatim; the JSON serializer handles any quoting
    /// the wire needs. Escaping here as well would double up and the
    /// destination would store data with literal backslashes.
    fn record_to_body(record: &Record) -> CreateRecordBody {
        CreateRecordBody {
            name: Self::payload_name(&record.name),
            record_type: record.record_type.as_str().to_string(),
            data: record.data.clone(),
            ttl: record.ttl,
        }
    }

    /// Convert a Vultr record back into the neutral shape for display.
    fn from_vultr_record(record: VultrRecord) -> Record {
        let name = if record.name.is_empty() {
            "@".to_string()
        } else {
            record.name
        };
        Record {
            name,
            ttl: record.ttl,
            record_type: RecordType::from(record.record_type),
            data: record.data,
        }
    }
}

#[async_trait]
impl ZoneDestination for VultrDestination {
    fn id(&self) -> &'static str {
        "vultr"
    }

    async fn list_zones(&self) -> Result<Vec<String>> {
        let mut zones = Vec::new();
        let mut cursor = String::new();

        loop {
            let path = if cursor.is_empty() {
                format!("/domains?per_page={MAX_PAGE_SIZE}")
            } else {
                format!(
                    "/domains?per_page={MAX_PAGE_SIZE}&cursor={}",
                    urlencoding::encode(&cursor)
                )
            };

            let response: VultrDomainsResponse =
                self.get(&path, ErrorContext::default()).await?;
            zones.extend(response.domains.into_iter().map(|d| d.domain));

            cursor = response.meta.links.next;
            if cursor.is_empty() {
                break;
            }
        }

        Ok(zones)
    }

    async fn create_record(&self, domain: &str, record: &Record) -> Result<()> {
        let body = Self::record_to_body(record);
        let context = ErrorContext {
            record_name: Some(record.name.clone()),
            zone: Some(domain.to_string()),
        };

        self.post(&format!("/domains/{domain}/records"), &body, context)
            .await
    }

    async fn list_records(&self, domain: &str) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut cursor = String::new();

        loop {
            let path = if cursor.is_empty() {
                format!("/domains/{domain}/records?per_page={MAX_PAGE_SIZE}")
            } else {
                format!(
                    "/domains/{domain}/records?per_page={MAX_PAGE_SIZE}&cursor={}",
                    urlencoding::encode(&cursor)
                )
            };

            let context = ErrorContext {
                record_name: None,
                zone: Some(domain.to_string()),
            };
            let response: VultrRecordsResponse = self.get(&path, context).await?;
            records.extend(response.records.into_iter().map(Self::from_vultr_record));

            cursor = response.meta.links.next;
            if cursor.is_empty() {
                break;
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============ payload_name ============

    #[test]
    fn apex_becomes_empty_name() {
        assert_eq!(VultrDestination::payload_name("@"), "");
    }

    #[test]
    fn subdomain_name_unchanged() {
        assert_eq!(VultrDestination::payload_name("www"), "www");
        assert_eq!(VultrDestination::payload_name("*"), "*");
    }

    // ============ record_to_body ============

    #[test]
    fn body_fields_carried_over() {
        let record = Record {
            name: "www".to_string(),
            ttl: 300,
            record_type: RecordType::Cname,
            data: "server.example.com.".to_string(),
        };
        let body = VultrDestination::record_to_body(&record);
        assert_eq!(body.name, "www");
        assert_eq!(body.record_type, "CNAME");
        assert_eq!(body.data, "server.example.com.");
        assert_eq!(body.ttl, 300);
    }

    #[test]
    fn body_apex_record() {
        let record = Record {
            name: "@".to_string(),
            ttl: 3600,
            record_type: RecordType::Mx,
            data: "10 mail.example.com.".to_string(),
        };
        let body = VultrDestination::record_to_body(&record);
        assert_eq!(body.name, "");
        assert_eq!(body.record_type, "MX");
        assert_eq!(body.data, "10 mail.example.com.");
    }

    #[test]
    fn quote_bearing_data_survives_the_wire_unchanged() {
        let data = r#"v=DKIM1; p="MIGf""#;
        let record = Record {
            name: "selector._domainkey".to_string(),
            ttl: 300,
            record_type: RecordType::Txt,
            data: data.to_string(),
        };
        let body = VultrDestination::record_to_body(&record);
        assert_eq!(body.data, data);

        // What the destination decodes from the wire payload must be the
        // original value, not a backslash-riddled one.
        let wire_res = serde_json::to_string(&body);
        assert!(wire_res.is_ok(), "serialize failed: {wire_res:?}");
        let Ok(wire) = wire_res else {
            return;
        };
        let decoded_res: serde_json::Result<serde_json::Value> = serde_json::from_str(&wire);
        assert!(decoded_res.is_ok(), "deserialize failed: {decoded_res:?}");
        let Ok(decoded) = decoded_res else {
            return;
        };
        assert_eq!(decoded["data"], data);
    }

    // ============ from_vultr_record ============

    #[test]
    fn empty_name_becomes_apex_marker() {
        let record = VultrRecord {
            id: "rec-1".to_string(),
            record_type: "A".to_string(),
            name: String::new(),
            data: "192.0.2.10".to_string(),
            ttl: 300,
        };
        let converted = VultrDestination::from_vultr_record(record);
        assert_eq!(converted.name, "@");
        assert_eq!(converted.record_type, RecordType::A);
    }

    #[test]
    fn named_record_unchanged() {
        let record = VultrRecord {
            id: "rec-2".to_string(),
            record_type: "TXT".to_string(),
            name: "www".to_string(),
            data: "hello".to_string(),
            ttl: 60,
        };
        let converted = VultrDestination::from_vultr_record(record);
        assert_eq!(converted.name, "www");
        assert_eq!(converted.data, "hello");
    }
}
