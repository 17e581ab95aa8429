//! Vultr API type definitions.

use serde::{Deserialize, Serialize};

/// Vultr error body, e.g. `{"error":"invalid API token","status":401}`.
#[derive(Debug, Deserialize)]
pub struct VultrApiError {
    pub error: String,
    #[allow(dead_code)]
    pub status: Option<u16>,
}

/// Cursor-based pagination metadata.
#[derive(Debug, Deserialize, Default)]
pub struct VultrMeta {
    #[allow(dead_code)]
    pub total: Option<u32>,
    #[serde(default)]
    pub links: VultrLinks,
}

#[derive(Debug, Deserialize, Default)]
pub struct VultrLinks {
    #[serde(default)]
    pub next: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub prev: String,
}

/// Response of `GET /domains`.
#[derive(Debug, Deserialize)]
pub struct VultrDomainsResponse {
    pub domains: Vec<VultrDomain>,
    #[serde(default)]
    pub meta: VultrMeta,
}

#[derive(Debug, Deserialize)]
pub struct VultrDomain {
    pub domain: String,
}

/// Response of `GET /domains/{domain}/records`.
#[derive(Debug, Deserialize)]
pub struct VultrRecordsResponse {
    pub records: Vec<VultrRecord>,
    #[serde(default)]
    pub meta: VultrMeta,
}

/// A DNS record as Vultr returns it. The apex is the empty name.
#[derive(Debug, Deserialize)]
pub struct VultrRecord {
    #[allow(dead_code)]
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub data: String,
    pub ttl: u32,
}

/// Body of `POST /domains/{domain}/records`, one additive record change.
#[derive(Debug, Serialize)]
pub struct CreateRecordBody {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub data: String,
    pub ttl: u32,
}
