//! Vultr error mapping
//!
//! Vultr reports failures through the HTTP status code plus a structured
//! `{"error": "..."}` body, so the raw "code" here is the status code.

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::VultrDestination;

impl ProviderErrorMapper for VultrDestination {
    fn provider_name(&self) -> &'static str {
        "vultr"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            Some("401" | "403") => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            Some("404") => ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone: context.zone.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            Some("400") => {
                if raw.message.to_lowercase().contains("already exists") {
                    ProviderError::RecordExists {
                        provider: self.provider_name().to_string(),
                        record_name: context
                            .record_name
                            .unwrap_or_else(|| "<unknown>".to_string()),
                        raw_message: Some(raw.message),
                    }
                } else {
                    ProviderError::InvalidParameter {
                        provider: self.provider_name().to_string(),
                        param: "record".to_string(),
                        detail: raw.message,
                    }
                }
            }

            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> VultrDestination {
        VultrDestination::new(String::new())
    }

    fn ctx() -> ErrorContext {
        ErrorContext::default()
    }

    fn ctx_full() -> ErrorContext {
        ErrorContext {
            record_name: Some("www".to_string()),
            zone: Some("example.com".to_string()),
        }
    }

    #[test]
    fn unauthorized_maps_to_invalid_credentials() {
        let p = provider();
        for status in ["401", "403"] {
            let err = p.map_error(RawApiError::with_code(status, "invalid API token"), ctx());
            assert!(
                matches!(err, ProviderError::InvalidCredentials { .. }),
                "status {status} should map to InvalidCredentials"
            );
        }
    }

    #[test]
    fn not_found_maps_to_zone_not_found() {
        let p = provider();
        let err = p.map_error(
            RawApiError::with_code("404", "domain not found"),
            ctx_full(),
        );
        assert!(matches!(
            err,
            ProviderError::ZoneNotFound { zone, .. } if zone == "example.com"
        ));
    }

    #[test]
    fn bad_request_duplicate_maps_to_record_exists() {
        let p = provider();
        let err = p.map_error(
            RawApiError::with_code("400", "A record with that name already exists"),
            ctx_full(),
        );
        assert!(matches!(
            err,
            ProviderError::RecordExists { record_name, .. } if record_name == "www"
        ));
    }

    #[test]
    fn bad_request_other_maps_to_invalid_parameter() {
        let p = provider();
        let err = p.map_error(RawApiError::with_code("400", "ttl out of range"), ctx());
        assert!(matches!(
            err,
            ProviderError::InvalidParameter { param, .. } if param == "record"
        ));
    }

    #[test]
    fn fallback_unknown_status() {
        let p = provider();
        let err = p.map_error(RawApiError::with_code("500", "internal error"), ctx());
        assert!(matches!(
            err,
            ProviderError::Unknown { raw_code, .. } if raw_code.as_deref() == Some("500")
        ));
    }

    #[test]
    fn provider_name_is_vultr() {
        assert_eq!(provider().provider_name(), "vultr");
    }
}
