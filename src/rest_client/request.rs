use crate::error::{Error, Result};
use reqwest::Url;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use super::builder::RestClient;
use super::method::Method;

impl RestClient {
    /// Executes a GET request and decodes the JSON response into `T`.
    ///
    /// # Arguments
    ///
    /// * `path` - URL suffix concatenated directly onto the base URL
    /// * `headers` - Optional custom headers
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(name = "rest_get", skip(self, headers), fields(path = %path))]
    pub async fn get<T>(&self, path: &str, headers: Option<HeaderMap>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.request(Method::Get, path, headers, None, None).await
    }

    /// Executes a POST request with a JSON body and decodes the response.
    ///
    /// The body is serialized before any network activity; a serialization
    /// failure aborts the call. `Content-Type: application/json` is set by
    /// default and caller headers may override it.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized, the request fails,
    /// or the response cannot be decoded.
    #[instrument(name = "rest_post", skip(self, headers, body), fields(path = %path))]
    pub async fn post<B, T>(&self, path: &str, headers: Option<HeaderMap>, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(Error::encode)?;
        self.request(Method::Post, path, headers, None, Some(body))
            .await
    }

    /// Executes a PUT request with a JSON body and decodes the response.
    ///
    /// Same contract as [`RestClient::post`].
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized, the request fails,
    /// or the response cannot be decoded.
    #[instrument(name = "rest_put", skip(self, headers, body), fields(path = %path))]
    pub async fn put<B, T>(&self, path: &str, headers: Option<HeaderMap>, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(Error::encode)?;
        self.request(Method::Put, path, headers, None, Some(body))
            .await
    }

    /// Executes a DELETE request and decodes the JSON response into `T`.
    ///
    /// The verb method is body-less; a DELETE that must carry a body goes
    /// through [`RestClient::request`] instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(name = "rest_delete", skip(self, headers), fields(path = %path))]
    pub async fn delete<T>(&self, path: &str, headers: Option<HeaderMap>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.request(Method::Delete, path, headers, None, None).await
    }

    /// Executes a request with a runtime method, optional query parameters,
    /// and an optional pre-encoded JSON body, decoding the response into `T`.
    ///
    /// Query parameters are applied by parsing the composed URL, overwriting
    /// each query key (last write per key wins), and re-serializing with keys
    /// in sorted order. `body: None` skips encoding and attachment entirely.
    ///
    /// Callers holding the method as a string parse it first, which rejects
    /// anything outside GET/POST/PUT/DELETE before any network call:
    ///
    /// ```rust,no_run
    /// use restkit::{Method, RestClient};
    /// use std::collections::HashMap;
    /// use std::time::Duration;
    ///
    /// # async fn example() -> restkit::Result<()> {
    /// let client = RestClient::new("http://localhost:8888", Duration::from_secs(30))?;
    /// let method: Method = "GET".parse()?;
    /// let query = HashMap::from([("a".to_string(), "1".to_string())]);
    /// let items: serde_json::Value = client
    ///     .request(method, "/items", None, Some(&query), None)
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the composed URL is malformed, the request fails,
    /// the server responds outside the 200-299 range, or the response cannot
    /// be decoded.
    #[instrument(
        name = "rest_request",
        skip(self, headers, query, body),
        fields(method = %method, endpoint = %endpoint, timeout_ms = %self.config().timeout.as_millis())
    )]
    pub async fn request<T>(
        &self,
        method: Method,
        endpoint: &str,
        headers: Option<HeaderMap>,
        query: Option<&HashMap<String, String>>,
        body: Option<Value>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let bytes = self.execute(method, endpoint, headers, query, body).await?;
        super::response::decode_body(&bytes)
    }

    /// Executes a request like [`RestClient::request`] but discards the
    /// response body, reporting only success or failure.
    ///
    /// Useful for calls whose response carries nothing of interest (for
    /// example a DELETE answered with 204 No Content).
    ///
    /// # Errors
    ///
    /// Returns an error if the composed URL is malformed, the request fails,
    /// or the server responds outside the 200-299 range.
    #[instrument(
        name = "rest_send",
        skip(self, headers, query, body),
        fields(method = %method, endpoint = %endpoint)
    )]
    pub async fn send(
        &self,
        method: Method,
        endpoint: &str,
        headers: Option<HeaderMap>,
        query: Option<&HashMap<String, String>>,
        body: Option<Value>,
    ) -> Result<()> {
        self.execute(method, endpoint, headers, query, body)
            .await
            .map(|_body| ())
    }

    /// Shared execution path: compose the URL, run the round trip under the
    /// configured total timeout, and race it against the cancellation token
    /// when one is attached.
    async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        headers: Option<HeaderMap>,
        query: Option<&HashMap<String, String>>,
        body: Option<Value>,
    ) -> Result<Vec<u8>> {
        let url = compose_url(self.base_url(), endpoint, query)?;
        let total_timeout = self.config().timeout;

        let timed = tokio::time::timeout(
            total_timeout,
            self.execute_once(method, url.clone(), headers, body),
        );

        if let Some(token) = self.cancellation() {
            tokio::select! {
                () = token.cancelled() => {
                    warn!(url = %url, "HTTP request cancelled");
                    Err(Error::cancelled(format!("Request to {url} cancelled")))
                }
                result = timed => flatten_timeout(result, &url, total_timeout),
            }
        } else {
            flatten_timeout(timed.await, &url, total_timeout)
        }
    }

    async fn execute_once(
        &self,
        method: Method,
        url: Url,
        headers: Option<HeaderMap>,
        body: Option<Value>,
    ) -> Result<Vec<u8>> {
        let mut request = self.client().request(method.as_reqwest(), url.clone());

        let merged = merge_headers(method, headers);
        if !merged.is_empty() {
            request = request.headers(merged);
        }

        if let Some(ref body) = body {
            let encoded = serde_json::to_vec(body).map_err(Error::encode)?;
            request = request.body(encoded);
        }

        debug!(
            method = %method,
            url = %url,
            has_body = body.is_some(),
            "Sending HTTP request"
        );

        let response = request.send().await.map_err(|e| {
            error!(url = %url, error = %e, "HTTP request send failed");
            Error::from(e)
        })?;

        self.process_response(response, url.as_str()).await
    }
}

/// Builds the effective header map: the default `Content-Type` for
/// body-carrying methods first, then caller headers, so caller-supplied
/// values overwrite the default. Duplicate keys overwrite rather than append.
pub(crate) fn merge_headers(method: Method, caller: Option<HeaderMap>) -> HeaderMap {
    let mut merged = HeaderMap::new();

    if method.sends_json_body() {
        merged.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }

    if let Some(caller) = caller {
        for (name, value) in &caller {
            merged.insert(name.clone(), value.clone());
        }
    }

    merged
}

/// Concatenates the base URL and endpoint verbatim, then applies query
/// parameters with last-write-wins per key, re-serializing the query string
/// with keys in sorted order.
pub(crate) fn compose_url(
    base_url: &str,
    endpoint: &str,
    query: Option<&HashMap<String, String>>,
) -> Result<Url> {
    let raw = format!("{base_url}{endpoint}");
    let mut url = Url::parse(&raw).map_err(|e| Error::invalid_url(format!("{raw}: {e}")))?;

    if let Some(params) = query {
        let mut merged: BTreeMap<String, String> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        for (k, v) in params {
            merged.insert(k.clone(), v.clone());
        }

        if merged.is_empty() {
            url.set_query(None);
        } else {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            for (k, v) in &merged {
                pairs.append_pair(k, v);
            }
        }
    }

    Ok(url)
}

fn flatten_timeout(
    result: std::result::Result<Result<Vec<u8>>, tokio::time::error::Elapsed>,
    url: &Url,
    timeout: Duration,
) -> Result<Vec<u8>> {
    match result {
        Ok(inner) => inner,
        Err(_elapsed) => {
            warn!(
                url = %url,
                timeout_ms = %timeout.as_millis(),
                "HTTP request timed out"
            );
            Err(Error::timeout(format!(
                "Request to {url} timed out after {}ms",
                timeout.as_millis()
            )))
        }
    }
}
