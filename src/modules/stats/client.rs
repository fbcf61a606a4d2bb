use super::format;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("stats API rejected the configured key")]
    Unauthorized,
    #[error("player does not exist")]
    UnknownPlayer,
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Raw stats object as returned by the API. Field values arrive as either
/// JSON numbers or numeric strings, so they stay untyped until formatting.
#[derive(Debug, Default, Deserialize)]
struct RawStats {
    #[serde(alias = "Playtime", alias = "timePlayed")]
    playtime: Option<Value>,
    #[serde(alias = "Money", alias = "balance")]
    money: Option<Value>,
}

/// Display-ready stats for one player; exists only for one lookup.
#[derive(Debug, Clone)]
pub struct PlayerStats {
    pub playtime: String,
    pub balance: String,
}

#[derive(Debug, Clone)]
pub struct StatsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl StatsClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// One GET against the stats endpoint, no retry and no backoff. A 500
    /// from this API means the player does not exist; a 401 means the key
    /// is misconfigured. Both surface as errors the caller routes to the
    /// invalid-account response path.
    pub async fn lookup(&self, username: &str) -> Result<PlayerStats, StatsError> {
        debug!("querying stats for {username}");

        let response = self
            .http
            .get(format!("{}/v1/stats/{username}", self.base_url))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let body: Value = response.json().await?;
                Ok(Self::stats_from_body(&body))
            }
            StatusCode::UNAUTHORIZED => Err(StatsError::Unauthorized),
            StatusCode::INTERNAL_SERVER_ERROR => Err(StatsError::UnknownPlayer),
            status => Err(StatsError::Status(status)),
        }
    }

    /// The result object is either nested under `result` or the body
    /// itself. Missing or malformed fields degrade to the `Unknown`
    /// sentinel rather than failing the lookup.
    fn stats_from_body(body: &Value) -> PlayerStats {
        let result = body.get("result").unwrap_or(body);
        let raw: RawStats = serde_json::from_value(result.clone()).unwrap_or_default();

        PlayerStats {
            playtime: format::playtime_display(raw.playtime.as_ref()),
            balance: format::balance_display(raw.money.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode as HttpStatus;
    use axum::{routing::get, Json, Router};
    use serde_json::json;

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn nested_result_object_is_formatted() {
        let router = Router::new().route(
            "/v1/stats/:username",
            get(|| async { Json(json!({"result": {"playtime": 7265, "money": 1500000}})) }),
        );
        let client = StatsClient::new(spawn_stub(router).await, "key");

        let stats = client.lookup("Steve").await.unwrap();
        assert_eq!(stats.playtime, "2h 1m");
        assert_eq!(stats.balance, "$1,500,000");
    }

    #[tokio::test]
    async fn flat_body_with_aliased_keys_is_accepted() {
        let router = Router::new().route(
            "/v1/stats/:username",
            get(|| async { Json(json!({"timePlayed": "7265", "Money": 1500000})) }),
        );
        let client = StatsClient::new(spawn_stub(router).await, "key");

        let stats = client.lookup("Steve").await.unwrap();
        assert_eq!(stats.playtime, "2h 1m");
        assert_eq!(stats.balance, "$1,500,000");
    }

    #[tokio::test]
    async fn non_numeric_fields_degrade_to_unknown() {
        let router = Router::new().route(
            "/v1/stats/:username",
            get(|| async { Json(json!({"result": {"playtime": "soon", "money": null}})) }),
        );
        let client = StatsClient::new(spawn_stub(router).await, "key");

        let stats = client.lookup("Steve").await.unwrap();
        assert_eq!(stats.playtime, "Unknown");
        assert_eq!(stats.balance, "Unknown");
    }

    #[tokio::test]
    async fn server_error_means_unknown_player() {
        let router = Router::new().route(
            "/v1/stats/:username",
            get(|| async { HttpStatus::INTERNAL_SERVER_ERROR }),
        );
        let client = StatsClient::new(spawn_stub(router).await, "key");

        let err = client.lookup("Nobody").await.unwrap_err();
        assert!(matches!(err, StatsError::UnknownPlayer));
    }

    #[tokio::test]
    async fn unauthorized_wins_over_body_content() {
        let router = Router::new().route(
            "/v1/stats/:username",
            get(|| async {
                (
                    HttpStatus::UNAUTHORIZED,
                    Json(json!({"result": {"playtime": 7265, "money": 1}})),
                )
            }),
        );
        let client = StatsClient::new(spawn_stub(router).await, "key");

        let err = client.lookup("Steve").await.unwrap_err();
        assert!(matches!(err, StatsError::Unauthorized));
    }

    #[tokio::test]
    async fn other_statuses_are_invalid_lookups() {
        let router = Router::new()
            .route("/v1/stats/:username", get(|| async { HttpStatus::NOT_FOUND }));
        let client = StatsClient::new(spawn_stub(router).await, "key");

        let err = client.lookup("Steve").await.unwrap_err();
        assert!(matches!(err, StatsError::Status(StatusCode::NOT_FOUND)));
    }
}
