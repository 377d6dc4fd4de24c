use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::config::UPSTREAM;
use crate::domain::parse_listings;

#[derive(Clone)]
pub struct ProxyState {
    /// Read from the environment at startup. None means every request fails
    /// with a 500 until the operator sets the key; the process stays up.
    pub api_key: Option<String>,
    pub upstream_url: String,
    pub client: reqwest::Client,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET /api/crypto
///
/// Forwards the upstream listings call with fixed pagination and the
/// server-held API key, then relays the JSON body verbatim. Upstream
/// failures are relayed with their status code; a 200 whose body does not
/// match the expected listings shape becomes a 502 so malformed data never
/// reaches the client.
pub async fn listings(State(state): State<ProxyState>) -> Response {
    let Some(api_key) = state.api_key else {
        log::error!("{} is not set; refusing to call upstream", UPSTREAM.api_key_env);
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "API key is missing");
    };

    let result = state
        .client
        .get(&state.upstream_url)
        .query(&[
            ("start", UPSTREAM.query.start.to_string()),
            ("limit", UPSTREAM.query.limit.to_string()),
            ("convert", UPSTREAM.query.convert.to_string()),
        ])
        .header(UPSTREAM.api_key_header, api_key)
        .header(header::ACCEPT, "application/json")
        .send()
        .await;

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            log::warn!("upstream transport failure: {}", e);
            let status = relay_status(e.status().map(|s| s.as_u16()));
            return error_response(status, &e.to_string());
        }
    };

    let status = relay_status(Some(response.status().as_u16()));
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            log::warn!("failed reading upstream body: {}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string());
        }
    };

    if !status.is_success() {
        log::warn!("upstream returned {}", status);
        return error_response(status, &format!("upstream returned {}", status));
    }

    // Validate the shape before relaying so the sort/filter side can trust it.
    if let Err(e) = parse_listings(&body) {
        log::error!("upstream payload failed validation: {:#}", e);
        return error_response(StatusCode::BAD_GATEWAY, &format!("{:#}", e));
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

fn relay_status(upstream: Option<u16>) -> StatusCode {
    upstream
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_without_key() -> ProxyState {
        ProxyState {
            api_key: None,
            upstream_url: UPSTREAM.listings_url.to_string(),
            client: reqwest::Client::new(),
        }
    }

    #[tokio::test]
    async fn missing_key_is_a_500_with_a_message() {
        let response = listings(State(state_without_key())).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(!body.error.is_empty());
    }

    #[test]
    fn relay_prefers_the_upstream_status() {
        assert_eq!(relay_status(Some(429)), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(relay_status(Some(503)), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn relay_defaults_to_500() {
        assert_eq!(relay_status(None), StatusCode::INTERNAL_SERVER_ERROR);
        // Out-of-range codes fall back too
        assert_eq!(relay_status(Some(42)), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
