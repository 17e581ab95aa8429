//! Cloudflare HTTP request methods.

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{CF_API_BASE, CloudflareResponse, CloudflareSource};

impl CloudflareSource {
    /// Perform a GET request for a list endpoint, keeping the pagination info.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
    ) -> Result<(Vec<T>, u32)> {
        let envelope: CloudflareResponse<Vec<T>> =
            self.get_envelope(path_and_query).await?;
        let total_count = envelope.result_info.map_or(0, |i| i.total_count);
        Ok((envelope.result.unwrap_or_default(), total_count))
    }

    async fn get_envelope<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
    ) -> Result<CloudflareResponse<T>> {
        let url = format!("{CF_API_BASE}{path_and_query}");
        let request = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_token));

        let (_, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;

        let envelope: CloudflareResponse<T> =
            HttpUtils::parse_json(&response_text, self.provider_name())?;

        if !envelope.success {
            let (code, message) = envelope
                .errors
                .and_then(|errors| {
                    errors
                        .first()
                        .map(|e| (e.code.to_string(), e.message.clone()))
                })
                .unwrap_or_else(|| (String::new(), "Unknown error".to_string()));
            log::error!("[{}] API error: {message}", self.provider_name());
            return Err(self.map_error(
                RawApiError::with_code(code, message),
                ErrorContext::default(),
            ));
        }

        Ok(envelope)
    }
}
