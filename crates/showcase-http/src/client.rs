//! HTTP client implementation.

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use showcase_core::response::{parse_body, server_error};
use showcase_core::{ApiUrl, FetchError};

/// A response that arrived, whatever its status.
#[derive(Debug)]
pub(crate) struct Reply {
    pub status: StatusCode,
    pub body: Value,
}

impl Reply {
    /// The body on success; otherwise an error carrying the server's
    /// `error` field, or `fallback` built from the status.
    pub fn into_body(self, fallback: impl FnOnce(StatusCode) -> String) -> Result<Value, FetchError> {
        if self.status.is_success() {
            return Ok(self.body);
        }

        let message = server_error(&self.body).unwrap_or_else(|| fallback(self.status));
        Err(FetchError::http(self.status.as_u16(), message))
    }
}

/// HTTP client bound to one API deployment.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
    api: ApiUrl,
}

impl HttpClient {
    pub fn new(api: ApiUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("showcase/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, api }
    }

    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// GET `{base}/{path}` with query parameters.
    pub async fn get<Q>(&self, path: &str, params: &Q) -> Result<Reply, FetchError>
    where
        Q: Serialize + std::fmt::Debug,
    {
        let url = self.url(path);
        debug!(%url, "GET");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(transport_error)?;

        Ok(Self::read(response).await)
    }

    /// POST a JSON body to `{base}/{path}`.
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Reply, FetchError>
    where
        B: Serialize + std::fmt::Debug,
    {
        let url = self.url(path);
        debug!(%url, "POST");
        trace!(?body, "request body");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        Ok(Self::read(response).await)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api.as_str().trim_end_matches('/'), path)
    }

    /// Read the body leniently; an unreadable or non-JSON body is `{}`.
    async fn read(response: reqwest::Response) -> Reply {
        let status = response.status();
        trace!(%status, "response");

        let body = match response.bytes().await {
            Ok(bytes) => parse_body(&bytes),
            Err(err) => {
                debug!(error = %err, "failed to read response body");
                parse_body(&[])
            }
        };

        Reply { status, body }
    }
}

/// Status text for a response, e.g. `Not Found`.
pub(crate) fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| status.as_u16().to_string(), str::to_string)
}

/// Status code for a response, e.g. `404`.
pub(crate) fn status_code(status: StatusCode) -> String {
    status.as_u16().to_string()
}

fn transport_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::transport(format!("request timed out: {err}"))
    } else if err.is_connect() {
        FetchError::transport(format!("connection failed: {err}"))
    } else {
        FetchError::transport(err.to_string())
    }
}
