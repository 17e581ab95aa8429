//! Vultr destination provider.

mod destination;
mod error;
mod http;
mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;
use crate::utils::log_sanitizer::mask_secret;

pub(crate) use types::{VultrDomainsResponse, VultrRecord, VultrRecordsResponse};

pub(crate) const VULTR_API_BASE: &str = "https://api.vultr.com/v2";
/// Vultr list endpoints maximum page size.
pub(crate) const MAX_PAGE_SIZE: u32 = 500;

/// Vultr client used as the destination of a migration.
pub struct VultrDestination {
    pub(crate) client: Client,
    pub(crate) api_key: String,
}

impl VultrDestination {
    pub fn new(api_key: String) -> Self {
        log::debug!("vultr destination ready (key {})", mask_secret(&api_key));
        Self {
            client: create_http_client(),
            api_key,
        }
    }
}
