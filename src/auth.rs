//! Credential handling.
//!
//! Tokens are held as [`SecretString`] and only exposed at the moment the
//! authentication header value is built, just before a request goes out.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::GitLabError;

pub(crate) const PRIVATE_TOKEN_HEADER: &str = "PRIVATE-TOKEN";
pub(crate) const JOB_TOKEN_HEADER: &str = "JOB-TOKEN";

/// Authentication material for the API.
///
/// Each variant maps to the request header the service documents for that
/// token kind.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Personal, project or group access token, sent as `PRIVATE-TOKEN`.
    PrivateToken(SecretString),
    /// OAuth2 access token, sent as `Authorization: Bearer`.
    OAuthToken(SecretString),
    /// CI job token, sent as `JOB-TOKEN`.
    JobToken(SecretString),
}

impl Credentials {
    pub fn private_token(token: impl Into<String>) -> Self {
        Self::PrivateToken(SecretString::from(token.into()))
    }

    pub fn oauth_token(token: impl Into<String>) -> Self {
        Self::OAuthToken(SecretString::from(token.into()))
    }

    pub fn job_token(token: impl Into<String>) -> Self {
        Self::JobToken(SecretString::from(token.into()))
    }

    /// Insert the authentication header for these credentials.
    pub(crate) fn apply(&self, headers: &mut HeaderMap) -> Result<(), GitLabError> {
        match self {
            Self::PrivateToken(token) => {
                insert_sensitive(headers, PRIVATE_TOKEN_HEADER, token.expose_secret())
            }
            Self::OAuthToken(token) => insert_sensitive(
                headers,
                AUTHORIZATION.as_str(),
                &format!("Bearer {}", token.expose_secret()),
            ),
            Self::JobToken(token) => {
                insert_sensitive(headers, JOB_TOKEN_HEADER, token.expose_secret())
            }
        }
    }
}

fn insert_sensitive(headers: &mut HeaderMap, name: &str, value: &str) -> Result<(), GitLabError> {
    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| GitLabError::Configuration(format!("invalid header name '{name}': {e}")))?;
    let mut value = HeaderValue::from_str(value)
        .map_err(|e| GitLabError::Configuration(format!("invalid token format: {e}")))?;
    value.set_sensitive(true);
    headers.insert(name, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_token_uses_its_own_header() {
        let mut headers = HeaderMap::new();
        Credentials::private_token("secret").apply(&mut headers).unwrap();
        assert_eq!(headers.get(PRIVATE_TOKEN_HEADER).unwrap(), "secret");
        assert!(headers.get(PRIVATE_TOKEN_HEADER).unwrap().is_sensitive());
    }

    #[test]
    fn oauth_token_uses_bearer_authorization() {
        let mut headers = HeaderMap::new();
        Credentials::oauth_token("tok").apply(&mut headers).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer tok");
    }

    #[test]
    fn job_token_uses_its_own_header() {
        let mut headers = HeaderMap::new();
        Credentials::job_token("ci-token").apply(&mut headers).unwrap();
        assert_eq!(headers.get(JOB_TOKEN_HEADER).unwrap(), "ci-token");
    }

    #[test]
    fn control_characters_in_tokens_are_rejected() {
        let mut headers = HeaderMap::new();
        let err = Credentials::private_token("bad\ntoken")
            .apply(&mut headers)
            .unwrap_err();
        assert!(matches!(err, GitLabError::Configuration(_)));
    }

    #[test]
    fn debug_output_redacts_the_token() {
        let rendered = format!("{:?}", Credentials::private_token("hunter2"));
        assert!(!rendered.contains("hunter2"));
    }
}
