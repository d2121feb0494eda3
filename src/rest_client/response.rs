use crate::error::{Error, NetworkError, Result, truncate_message};
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use super::builder::RestClient;

const BODY_PREVIEW_SIZE: usize = 200;

impl RestClient {
    /// Reads the full response body, then validates the status code.
    ///
    /// Non-2xx responses fail with the status code and canonical status text;
    /// the body is discarded on that path. The body is always read to
    /// completion first so the connection returns to the pool on every exit.
    pub(crate) async fn process_response(&self, response: Response, url: &str) -> Result<Vec<u8>> {
        let status = response.status();

        let body = response.bytes().await.map_err(|e| {
            error!(url = %url, error = %e, "Failed to read response body");
            Error::from(NetworkError::BodyRead(truncate_message(e.to_string())))
        })?;

        let preview_len = body.len().min(BODY_PREVIEW_SIZE);
        let body_preview = String::from_utf8_lossy(&body[..preview_len]);

        debug!(
            status = status.as_u16(),
            body_length = body.len(),
            body_preview = %body_preview,
            "HTTP response received"
        );

        if !status.is_success() {
            let err = Error::http_status(status.as_u16(), status.canonical_reason().unwrap_or(""));
            error!(
                url = %url,
                status = status.as_u16(),
                error = %err,
                "HTTP error response"
            );
            return Err(err);
        }

        Ok(body.to_vec())
    }
}

/// Decodes the response body as JSON into the caller's output type.
///
/// Empty bodies are not special-cased: decoding an empty body fails unless
/// the target type accepts empty input.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(Error::decode)
}
