//! Shared helpers for reading HTTP responses in integration tests.

use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;

/// Deserializes the JSON body of a response.
pub async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}
