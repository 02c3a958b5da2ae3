//! Request header assembly.
//!
//! Builds the base header map for every outgoing request: accept type,
//! user agent, configured default headers, and the credential header.
//! Headers are rebuilt per request from the shared configuration rather
//! than cached, so token material lives in a `HeaderMap` only for the
//! lifetime of one request.

use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue, USER_AGENT};

use crate::auth::Credentials;
use crate::config::{HttpConfig, defaults};
use crate::error::GitLabError;

pub(crate) fn build_headers(
    config: &HttpConfig,
    credentials: Option<&Credentials>,
) -> Result<HeaderMap, GitLabError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let user_agent = config.user_agent.as_deref().unwrap_or(defaults::USER_AGENT);
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent)
            .map_err(|e| GitLabError::Configuration(format!("invalid user agent: {e}")))?,
    );

    for (key, value) in &config.headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| GitLabError::Configuration(format!("invalid header name '{key}': {e}")))?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            GitLabError::Configuration(format!("invalid header value '{value}': {e}"))
        })?;
        headers.insert(name, value);
    }

    if let Some(credentials) = credentials {
        credentials.apply(&mut headers)?;
    }

    Ok(headers)
}
