//! Dashboard API Client
//!
//! HTTP client for the two read-only dashboard resources. Each call issues
//! exactly one GET and unwraps the response envelope; there is no caching,
//! retry or request deduplication.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::dto::{BalanceEnvelope, BalancePoint, Bet, BetsEnvelope};
use super::error::{ApiError, ApiResult};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/dashboard";

/// Configuration for the dashboard client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL both resources hang off (e.g., "http://localhost:8000/api/dashboard")
    pub base_url: String,
    /// Per-request timeout; `None` waits for the backend indefinitely
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            request_timeout: None,
        }
    }
}

/// Dashboard REST API client
pub struct DashboardClient {
    client: Client,
    base_url: String,
}

impl DashboardClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::Request)?;

        Ok(Self {
            client,
            // Normalize: remove trailing slash
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the account balance history (`GET {base}/balance`)
    pub async fn fetch_balance_history(&self) -> ApiResult<Vec<BalancePoint>> {
        let envelope: BalanceEnvelope = self.get_json("balance").await?;
        Ok(envelope.history)
    }

    /// Fetch the most recent bets (`GET {base}/bets`)
    pub async fn fetch_recent_bets(&self) -> ApiResult<Vec<Bet>> {
        let envelope: BetsEnvelope = self.get_json("bets").await?;
        Ok(envelope.bets)
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: &str) -> ApiResult<T> {
        let url = format!("{}/{}", self.base_url, resource);
        tracing::debug!(%url, "Fetching dashboard resource");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::from_transport(&url, e))?;

        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            endpoint: url,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::BetStatus;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    /// Serve `router` on an ephemeral port and return the dashboard base URL
    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api/dashboard", addr)
    }

    fn client_for(base_url: String) -> DashboardClient {
        DashboardClient::new(ClientConfig {
            base_url,
            request_timeout: None,
        })
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/api/dashboard");
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = client_for("http://localhost:8000/api/dashboard/".to_string());
        assert_eq!(client.base_url, "http://localhost:8000/api/dashboard");
    }

    #[tokio::test]
    async fn test_balance_history_unwraps_envelope() {
        let router = Router::new().route(
            "/api/dashboard/balance",
            get(|| async {
                Json(json!({
                    "history": [
                        {"date": "2024-01-01", "balance": 1000},
                        {"date": "2024-01-02", "balance": -250.5}
                    ]
                }))
            }),
        );
        let client = client_for(spawn_backend(router).await);

        let history = client.fetch_balance_history().await.unwrap();

        assert_eq!(
            history,
            vec![
                BalancePoint { date: "2024-01-01".to_string(), balance: 1000.0 },
                BalancePoint { date: "2024-01-02".to_string(), balance: -250.5 },
            ]
        );
    }

    #[tokio::test]
    async fn test_recent_bets_unwraps_envelope() {
        let router = Router::new().route(
            "/api/dashboard/bets",
            get(|| async {
                Json(json!({
                    "bets": [{
                        "date": "2024-01-01",
                        "place_id": 3,
                        "race_number": 5,
                        "combination": "1-2-3",
                        "odds": 4.5,
                        "amount": 1000,
                        "return_amount": 4500,
                        "status": "won",
                        "created_at": "2024-01-01T08:00:00"
                    }]
                }))
            }),
        );
        let client = client_for(spawn_backend(router).await);

        let bets = client.fetch_recent_bets().await.unwrap();

        assert_eq!(bets.len(), 1);
        assert_eq!(bets[0].combination, "1-2-3");
        assert_eq!(bets[0].return_amount, Some(4500.0));
        assert_eq!(bets[0].status, BetStatus::Won);
    }

    #[tokio::test]
    async fn test_unsettled_bets_decode_alongside_settled() {
        // Newly placed bets carry no return_amount until the race is settled
        let router = Router::new().route(
            "/api/dashboard/bets",
            get(|| async {
                Json(json!({
                    "bets": [
                        {
                            "date": "2024-01-02",
                            "place_id": 12,
                            "race_number": 8,
                            "combination": "2-1-4",
                            "odds": 9.1,
                            "amount": 500,
                            "status": "pending",
                            "created_at": "2024-01-02T10:30:00"
                        },
                        {
                            "date": "2024-01-01",
                            "place_id": 3,
                            "race_number": 5,
                            "combination": "1-2-3",
                            "odds": 4.5,
                            "amount": 1000,
                            "return_amount": 4500,
                            "status": "won",
                            "result_checked_at": "2024-01-01T16:00:00"
                        }
                    ]
                }))
            }),
        );
        let client = client_for(spawn_backend(router).await);

        let bets = client.fetch_recent_bets().await.unwrap();

        assert_eq!(bets.len(), 2);
        assert_eq!(bets[0].status, BetStatus::Other("pending".to_string()));
        assert_eq!(bets[0].return_amount, None);
        assert_eq!(bets[1].return_amount, Some(4500.0));
    }

    #[tokio::test]
    async fn test_empty_sequences_pass_through() {
        let router = Router::new()
            .route("/api/dashboard/balance", get(|| async { Json(json!({"history": []})) }))
            .route("/api/dashboard/bets", get(|| async { Json(json!({"bets": []})) }));
        let client = client_for(spawn_backend(router).await);

        assert!(client.fetch_balance_history().await.unwrap().is_empty());
        assert!(client.fetch_recent_bets().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let router = Router::new().route(
            "/api/dashboard/balance",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "firestore down") }),
        );
        let client = client_for(spawn_backend(router).await);

        match client.fetch_balance_history().await {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "firestore down");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_envelope_field_is_decode_error() {
        let router = Router::new().route(
            "/api/dashboard/bets",
            get(|| async { Json(json!({"items": []})) }),
        );
        let client = client_for(spawn_backend(router).await);

        let err = client.fetch_recent_bets().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert!(err.to_string().contains("/bets"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_unavailable() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}/api/dashboard", addr));

        let err = client.fetch_balance_history().await.unwrap_err();
        assert!(matches!(err, ApiError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_configured_timeout_applies() {
        let router = Router::new().route(
            "/api/dashboard/balance",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"history": []}))
            }),
        );
        let client = DashboardClient::new(ClientConfig {
            base_url: spawn_backend(router).await,
            request_timeout: Some(Duration::from_millis(100)),
        })
        .unwrap();

        let err = client.fetch_balance_history().await.unwrap_err();
        assert!(matches!(err, ApiError::Timeout));
    }
}
