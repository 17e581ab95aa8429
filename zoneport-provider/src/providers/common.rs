//! Helpers shared by the provider implementations.

use std::time::Duration;

use reqwest::Client;

// ============ HTTP Client ============

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Create an HTTP client with the shared timeout configuration.
pub fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

// ============ Name handling ============

/// Strip the trailing dot from a domain name.
pub fn normalize_domain_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

/// Convert a full name into a zone-relative one.
/// `"www.example.com"` + `"example.com"` -> `"www"`
/// `"example.com"` + `"example.com"` -> `"@"`
pub fn full_name_to_relative(full_name: &str, zone_name: &str) -> String {
    let full = normalize_domain_name(full_name);
    let zone = normalize_domain_name(zone_name);

    if full == zone {
        "@".to_string()
    } else if let Some(subdomain) = full.strip_suffix(&format!(".{zone}")) {
        subdomain.to_string()
    } else {
        full
    }
}

/// Rewrite escaped wildcard labels into a literal `*`.
///
/// Some provider exports escape the asterisk as its octal code point
/// (`\052`), the way zone files do.
pub fn unescape_wildcard(name: &str) -> String {
    name.replace("\\052", "*")
}
