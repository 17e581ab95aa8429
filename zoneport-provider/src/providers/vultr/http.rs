//! Vultr HTTP request methods.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::VultrDestination;
use super::VULTR_API_BASE;
use super::types::VultrApiError;

impl VultrDestination {
    /// Perform a GET request and decode the JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let url = format!("{VULTR_API_BASE}{path_and_query}");
        let request = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key));

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;

        self.check_status(status, &response_text, context)?;
        HttpUtils::parse_json(&response_text, self.provider_name())
    }

    /// Perform a POST request; the caller does not consume the response body.
    pub(crate) async fn post<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<()> {
        let url = format!("{VULTR_API_BASE}{path}");
        let body_json = serde_json::to_string(body).map_err(|e| {
            crate::error::ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            }
        })?;
        log::debug!("[{}] Request Body: {body_json}", self.provider_name());

        let request = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .body(body_json);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "POST", &url).await?;

        self.check_status(status, &response_text, context)
    }

    /// Decode the structured error body on a non-2xx status.
    ///
    /// Status codes and error fields are checked explicitly; the body is
    /// never scanned for error-looking substrings.
    fn check_status(&self, status: u16, response_text: &str, context: ErrorContext) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        let message = serde_json::from_str::<VultrApiError>(response_text)
            .map(|e| e.error)
            .unwrap_or_else(|_| response_text.to_string());
        log::debug!("[{}] API error (HTTP {status}): {message}", self.provider_name());

        Err(self.map_error(RawApiError::with_code(status.to_string(), message), context))
    }
}
