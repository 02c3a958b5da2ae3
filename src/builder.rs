//! Client construction.

use reqwest::Url;

use crate::auth::Credentials;
use crate::client::{ClientInner, GitLab};
use crate::config::HttpConfig;
use crate::error::GitLabError;

const DEFAULT_ENDPOINT: &str = "https://gitlab.com";
const API_PATH: &str = "api/v4";

/// Builder for [`GitLab`].
///
/// All knobs are optional: the default is an unauthenticated client against
/// gitlab.com with the default [`HttpConfig`].
#[derive(Default)]
pub struct GitLabBuilder {
    endpoint: Option<String>,
    credentials: Option<Credentials>,
    http_config: HttpConfig,
    http_client: Option<reqwest::Client>,
}

impl GitLabBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base URL of the instance, with or without the `/api/v4` suffix
    /// (e.g. `https://gitlab.example.com`).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Authenticate with explicit [`Credentials`].
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Authenticate with a personal/project/group access token.
    pub fn private_token(self, token: impl Into<String>) -> Self {
        self.credentials(Credentials::private_token(token))
    }

    /// Authenticate with an OAuth2 access token.
    pub fn oauth_token(self, token: impl Into<String>) -> Self {
        self.credentials(Credentials::oauth_token(token))
    }

    /// Authenticate with a CI job token.
    pub fn job_token(self, token: impl Into<String>) -> Self {
        self.credentials(Credentials::job_token(token))
    }

    /// Transport-level configuration (timeouts, proxy, user agent,
    /// default headers).
    pub fn http_config(mut self, config: HttpConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Use a pre-built `reqwest::Client` instead of constructing one from
    /// the [`HttpConfig`]. Timeout and proxy settings of the config are
    /// ignored on this path; header settings still apply per request.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Validate the endpoint, build the transport, and produce the client.
    pub fn build(self) -> Result<GitLab, GitLabError> {
        let endpoint = normalize_endpoint(self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))?;
        let http = match self.http_client {
            Some(client) => client,
            None => build_http_client(&self.http_config)?,
        };
        tracing::debug!(endpoint = %endpoint, "constructed api client");
        Ok(GitLab::from_inner(ClientInner {
            http,
            endpoint,
            credentials: self.credentials,
            config: self.http_config,
        }))
    }
}

/// Normalize a base URL into the versioned API root, always ending in a
/// trailing slash so relative paths join under it.
fn normalize_endpoint(raw: &str) -> Result<Url, GitLabError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(GitLabError::Configuration("endpoint must not be empty".into()));
    }
    let base = if trimmed.ends_with(API_PATH) {
        format!("{trimmed}/")
    } else {
        format!("{trimmed}/{API_PATH}/")
    };
    let url = Url::parse(&base)
        .map_err(|e| GitLabError::Configuration(format!("invalid endpoint '{raw}': {e}")))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(GitLabError::Configuration(format!(
            "endpoint '{raw}' must use http or https"
        )));
    }
    Ok(url)
}

fn build_http_client(config: &HttpConfig) -> Result<reqwest::Client, GitLabError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }
    if let Some(proxy) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy)
            .map_err(|e| GitLabError::Configuration(format!("invalid proxy '{proxy}': {e}")))?;
        builder = builder.proxy(proxy);
    }
    builder
        .build()
        .map_err(|e| GitLabError::Configuration(format!("failed to build http transport: {e}")))
}
