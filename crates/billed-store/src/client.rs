//! HTTP client for the bills store REST API.
//!
//! Wraps `reqwest` with bearer-token handling and typed response
//! deserialization. A 4xx answer is reported as a store rejection carrying
//! the status code. Endpoints:
//!
//! | Operation | Request                                   |
//! |-----------|-------------------------------------------|
//! | list      | `GET {base}/bills`                        |
//! | create    | `POST {base}/bills` (multipart `file`, `email`) |
//! | update    | `PATCH {base}/bills/{id}` (JSON bill)     |

use std::time::Duration;

use async_trait::async_trait;
use billed_core::{AppConfig, Bill};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::store::BillStore;
use crate::types::{CreatedReceipt, ReceiptUpload};

/// Client for the bills store API.
///
/// Use [`HttpStore::from_config`] in the binary or
/// [`HttpStore::with_base_url`] to point at a mock server in tests.
pub struct HttpStore {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpStore {
    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`HttpStore::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, StoreError> {
        Self::with_base_url(
            &config.api_url,
            config.api_token.as_deref(),
            config.request_timeout_secs,
        )
    }

    /// Creates a client for the store rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`StoreError::InvalidBaseUrl`] if
    /// `base_url` is not an http(s) URL.
    pub fn with_base_url(
        base_url: &str,
        token: Option<&str>,
        timeout_secs: u64,
    ) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("billed/0.1")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| StoreError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(StoreError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
            token: token.map(str::to_owned),
        })
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Asserts a 2xx status and parses the body as `T`.
    ///
    /// A 4xx answer is the store refusing the request and becomes
    /// [`StoreError::Rejected`]; other failures stay [`StoreError::Http`].
    async fn read_json<T: DeserializeOwned>(
        response: Response,
        context: &str,
    ) -> Result<T, StoreError> {
        let status = response.status();
        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, context, "store rejected the request");
            return Err(StoreError::Rejected(rejection_message(status, &body)));
        }

        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| StoreError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}

/// `"Erreur 404"`, followed by the response body when there is one.
fn rejection_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("Erreur {}", status.as_u16())
    } else {
        format!("Erreur {}: {body}", status.as_u16())
    }
}

#[async_trait]
impl BillStore for HttpStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        let url = self.endpoint(&["bills"]);
        let response = self.authorize(self.client.get(url)).send().await?;
        let entries: Vec<serde_json::Value> = Self::read_json(response, "list bills").await?;

        let total = entries.len();
        let bills: Vec<Bill> = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<Bill>(entry) {
                Ok(bill) => Some(bill),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping store entry that is not a bill");
                    None
                }
            })
            .collect();

        tracing::debug!(total, kept = bills.len(), "fetched bills");
        Ok(bills)
    }

    async fn create(&self, upload: ReceiptUpload) -> Result<CreatedReceipt, StoreError> {
        let url = self.endpoint(&["bills"]);
        let file = Part::bytes(upload.bytes)
            .file_name(upload.file_name.clone())
            .mime_str(&upload.content_type)?;
        let form = Form::new().part("file", file).text("email", upload.email);

        let response = self
            .authorize(self.client.post(url))
            .multipart(form)
            .send()
            .await?;
        let created: CreatedReceipt = Self::read_json(response, "create bill").await?;

        tracing::info!(bill_id = %created.key, file_name = %upload.file_name, "receipt uploaded");
        Ok(created)
    }

    async fn update(&self, selector: &str, bill: &Bill) -> Result<Bill, StoreError> {
        if selector.is_empty() {
            return Err(StoreError::MissingSelector);
        }

        let url = self.endpoint(&["bills", selector]);
        let response = self
            .authorize(self.client.patch(url))
            .json(bill)
            .send()
            .await?;
        let stored: Bill = Self::read_json(response, &format!("update bill {selector}")).await?;

        tracing::info!(bill_id = selector, status = %stored.status, "bill updated");
        Ok(stored)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
