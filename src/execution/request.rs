//! The request executor.
//!
//! Translates a (method, relative path, parameters) triple into exactly one
//! HTTP round trip against the configured endpoint: endpoint join,
//! credential header injection, method-directed parameter encoding, status
//! classification, and typed decoding. No retries, no caching, no per-call
//! mutable state; concurrent calls share only the read-only client
//! configuration and the transport's connection pool. Dropping the returned
//! future cancels the in-flight request.

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::GitLab;
use crate::error::{GitLabError, extract_error_message};
use crate::execution::headers::build_headers;
use crate::types::{ApiResponse, ResponseMeta};

/// Parameter bags travel in the query string for body-less methods and as a
/// JSON body everywhere else.
fn params_in_query(method: &Method) -> bool {
    method == Method::GET || method == Method::DELETE || method == Method::HEAD
}

impl GitLab {
    /// Build a request against the configured endpoint.
    ///
    /// `path` is relative to the versioned API root (e.g.
    /// `projects/42/labels`). `params` is encoded per `method`; `None`
    /// sends no parameters at all.
    pub(crate) fn build_request<P>(
        &self,
        method: Method,
        path: &str,
        params: Option<&P>,
    ) -> Result<reqwest::Request, GitLabError>
    where
        P: Serialize + ?Sized,
    {
        let inner = self.inner();
        let url = inner.endpoint.join(path).map_err(|e| {
            GitLabError::Configuration(format!("invalid request path '{path}': {e}"))
        })?;

        let mut headers = build_headers(&inner.config, inner.credentials.as_ref())?;
        let mut builder = inner.http.request(method.clone(), url);

        if let Some(params) = params {
            if params_in_query(&method) {
                builder = builder.query(params);
            } else {
                let body = serde_json::to_vec(params).map_err(|e| {
                    GitLabError::Encoding(format!("failed to serialize request body: {e}"))
                })?;
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                builder = builder.body(body);
            }
        }

        let request = builder.headers(headers).build().map_err(|e| {
            GitLabError::Encoding(format!("failed to encode request parameters: {e}"))
        })?;
        tracing::debug!(method = %request.method(), url = %request.url(), "built api request");
        Ok(request)
    }

    /// Execute a request and decode the success body into `T`.
    pub(crate) async fn execute<T>(
        &self,
        request: reqwest::Request,
    ) -> Result<ApiResponse<T>, GitLabError>
    where
        T: DeserializeOwned,
    {
        let (meta, text) = self.round_trip(request).await?;
        match serde_json::from_str(&text) {
            Ok(body) => Ok(ApiResponse { body, meta }),
            Err(e) => Err(GitLabError::Decode {
                meta,
                message: format!("response body did not match the expected shape: {e}"),
            }),
        }
    }

    /// Execute a request whose success body is irrelevant (DELETE-style
    /// calls); only the envelope is returned.
    pub(crate) async fn execute_no_content(
        &self,
        request: reqwest::Request,
    ) -> Result<ResponseMeta, GitLabError> {
        let (meta, _text) = self.round_trip(request).await?;
        Ok(meta)
    }

    /// One network round trip. Returns the envelope and the raw body on any
    /// received response; classifies non-success statuses, extracting the
    /// structured error message when the body carries one.
    async fn round_trip(
        &self,
        request: reqwest::Request,
    ) -> Result<(ResponseMeta, String), GitLabError> {
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self
            .inner()
            .http
            .execute(request)
            .await
            .map_err(|e| GitLabError::Transport(e.to_string()))?;

        let status = response.status();
        let meta = ResponseMeta::from_parts(status.as_u16(), response.headers().clone());
        // A read failure after headers arrived is still a transport failure.
        let text = response
            .text()
            .await
            .map_err(|e| GitLabError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = extract_error_message(&text)
                .or_else(|| status.canonical_reason().map(String::from));
            tracing::warn!(status = meta.status, %method, %url, "api request failed");
            return Err(GitLabError::Status { meta, message });
        }

        tracing::debug!(status = meta.status, %method, %url, "api request completed");
        Ok((meta, text))
    }
}
