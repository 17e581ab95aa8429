//! Cloudflare source provider (read-only).

mod error;
mod http;
mod source;
mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;
use crate::utils::log_sanitizer::mask_secret;

pub(crate) use types::{CloudflareDnsRecord, CloudflareResponse, CloudflareSrvData, CloudflareZone};

pub(crate) const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";
/// Cloudflare DNS Records API maximum page size.
pub(crate) const MAX_PAGE_SIZE_RECORDS: u32 = 100;

/// Cloudflare client used as the source of a migration.
pub struct CloudflareSource {
    pub(crate) client: Client,
    pub(crate) api_token: String,
}

impl CloudflareSource {
    pub fn new(api_token: String) -> Self {
        log::debug!("cloudflare source ready (token {})", mask_secret(&api_token));
        Self {
            client: create_http_client(),
            api_token,
        }
    }
}
