use reqwest::header;
use reqwest::Client;
use std::time::Duration;

use crate::models::{CreateTransferResponse, TransferClientError, TransferPage, TransferRequest};

/// Client for the remote transfer service.
///
/// Wraps a `reqwest::Client` and an immutable base URL. One instance per
/// target environment; operations are stateless single request/response
/// exchanges and may run concurrently.
pub struct TransferClient {
    client: Client,
    base_url: String,
}

impl TransferClient {
    /// Create a new transfer client with optimized HTTP client
    pub fn new(base_url: String) -> Self {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self { client, base_url }
    }

    pub fn from_config(config: &crate::configure::AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of transfers.
    ///
    /// Issues a single GET to `/transfers?page=..&size=..` and returns the
    /// decoded page envelope unchanged. Every failure mode (transport,
    /// non-2xx, decode) maps to `TransferClientError::Fetch`; the cause is
    /// logged and kept on the error value.
    pub async fn list_transfers(
        &self,
        page: u32,
        size: u32,
    ) -> Result<TransferPage, TransferClientError> {
        let url = format!("{}/transfers", self.base_url);
        log::debug!("GET {} page={} size={}", url, page, size);

        let response = match self
            .client
            .get(&url)
            .query(&[("page", page), ("size", size)])
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("Error fetching transfers: {:?}", e);
                return Err(TransferClientError::Fetch {
                    status: e.status().map(|s| s.as_u16()),
                    detail: e.to_string(),
                });
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Error fetching transfers: HTTP {} - {}", status, body);
            return Err(TransferClientError::Fetch {
                status: Some(status.as_u16()),
                detail: body,
            });
        }

        response.json::<TransferPage>().await.map_err(|e| {
            log::error!("Error fetching transfers: bad response body: {:?}", e);
            TransferClientError::Fetch {
                status: Some(status.as_u16()),
                detail: e.to_string(),
            }
        })
    }

    /// Schedule a new transfer.
    ///
    /// Issues a single POST to `/transfers` with the request JSON-encoded
    /// verbatim. On failure the server error body's `message` field, when
    /// present, becomes the error's display message; otherwise the fixed
    /// fallback applies.
    pub async fn create_transfer(
        &self,
        request: &TransferRequest,
    ) -> Result<CreateTransferResponse, TransferClientError> {
        let url = format!("{}/transfers", self.base_url);
        log::debug!(
            "POST {} {} -> {}",
            url,
            request.source_account,
            request.destination_account
        );

        let response = match self.client.post(&url).json(request).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("Failed to create transfer: {:?}", e);
                return Err(TransferClientError::Create {
                    message: None,
                    status: e.status().map(|s| s.as_u16()),
                    detail: e.to_string(),
                });
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Failed to create transfer: HTTP {} - {}", status, body);
            return Err(TransferClientError::Create {
                message: extract_server_message(&body),
                status: Some(status.as_u16()),
                detail: body,
            });
        }

        response.json::<CreateTransferResponse>().await.map_err(|e| {
            log::error!("Failed to create transfer: bad response body: {:?}", e);
            TransferClientError::Create {
                message: None,
                status: Some(status.as_u16()),
                detail: e.to_string(),
            }
        })
    }
}

/// Pull the `message` field out of a server error body, if the body is
/// JSON and carries one as a string.
fn extract_server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = TransferClient::new("http://localhost:8080".to_string());
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_request_serialization() {
        let request = TransferRequest {
            source_account: "1234567890".to_string(),
            destination_account: "0987654321".to_string(),
            amount: 250.0,
            transfer_date: "2024-01-01".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["sourceAccount"], "1234567890");
        assert_eq!(json["destinationAccount"], "0987654321");
        assert_eq!(json["amount"], 250.0);
        assert_eq!(json["transferDate"], "2024-01-01");
        // Server-computed fields must not leak into the body
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_extract_server_message() {
        assert_eq!(
            extract_server_message("{\"message\":\"duplicate account\"}"),
            Some("duplicate account".to_string())
        );
        assert_eq!(extract_server_message("<html>502</html>"), None);
        assert_eq!(extract_server_message("{\"message\":42}"), None);
        assert_eq!(extract_server_message(""), None);
    }
}
