//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from remote stores.
//! These are shared utilities, not ports.

use fanmatch_domain::error::{Error, Result};
use reqwest::Response;

/// Format error message for a remote store
fn storage_error(provider: &str, context: &str, details: &str) -> Error {
    Error::storage(format!("{provider} {context}: {details}"))
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// # Returns
    /// Parsed JSON value on success, or an appropriate storage error
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(match code {
                401 | 403 => storage_error(provider_name, "permission denied", &error_text),
                404 => storage_error(provider_name, "database not found", &error_text),
                429 => storage_error(provider_name, "rate limit exceeded", &error_text),
                500..=599 => storage_error(
                    provider_name,
                    &format!("server error ({code})"),
                    &error_text,
                ),
                _ => storage_error(
                    provider_name,
                    &format!("request failed ({code})"),
                    &error_text,
                ),
            });
        }

        response
            .json()
            .await
            .map_err(|e| storage_error(provider_name, "response parse failed", &e.to_string()))
    }
}
