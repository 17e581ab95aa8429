//! Cloudflare API type definitions.

use serde::Deserialize;
use serde_json::Value;

/// Cloudflare API envelope.
#[derive(Debug, Deserialize)]
pub struct CloudflareResponse<T> {
    pub success: bool,
    pub result: Option<T>,
    pub errors: Option<Vec<CloudflareError>>,
    pub result_info: Option<CloudflareResultInfo>,
}

#[derive(Debug, Deserialize)]
pub struct CloudflareError {
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CloudflareResultInfo {
    #[allow(dead_code)]
    pub page: u32,
    #[allow(dead_code)]
    pub per_page: u32,
    pub total_count: u32,
}

/// Cloudflare zone.
#[derive(Debug, Deserialize)]
pub struct CloudflareZone {
    pub id: String,
    pub name: String,
    #[allow(dead_code)]
    pub status: String,
}

/// Cloudflare DNS record (response shape).
#[derive(Debug, Deserialize)]
pub struct CloudflareDnsRecord {
    #[allow(dead_code)]
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    /// MX/SRV priority, returned out-of-band from `content`.
    pub priority: Option<u16>,
    /// Structured data for SRV and other composite record types.
    pub data: Option<Value>,
}

/// The `data` field of an SRV record.
#[derive(Debug, Deserialize)]
pub struct CloudflareSrvData {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: String,
}
