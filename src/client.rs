//! The client type.
//!
//! `GitLab` is a cheap-to-clone handle over immutable shared state: the
//! normalized endpoint URL, the credentials, and the `reqwest::Client`
//! whose connection pool all in-flight calls share. Nothing is mutated
//! after construction, so one client can serve any number of concurrent
//! calls without synchronization.

use std::sync::Arc;

use reqwest::Url;

use crate::api::labels::Labels;
use crate::auth::Credentials;
use crate::builder::GitLabBuilder;
use crate::config::HttpConfig;
use crate::error::GitLabError;

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) endpoint: Url,
    pub(crate) credentials: Option<Credentials>,
    pub(crate) config: HttpConfig,
}

/// GitLab API client.
#[derive(Clone)]
pub struct GitLab {
    inner: Arc<ClientInner>,
}

impl GitLab {
    /// Start building a client.
    pub fn builder() -> GitLabBuilder {
        GitLabBuilder::new()
    }

    /// Connect to gitlab.com with a private token.
    pub fn new(token: impl Into<String>) -> Result<Self, GitLabError> {
        Self::builder().private_token(token).build()
    }

    pub(crate) fn from_inner(inner: ClientInner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    pub(crate) fn inner(&self) -> &ClientInner {
        &self.inner
    }

    /// The versioned API root every request path is joined onto.
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// Label operations.
    pub fn labels(&self) -> Labels {
        Labels::new(self.clone())
    }
}

impl std::fmt::Debug for GitLab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitLab")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("authenticated", &self.inner.credentials.is_some())
            .finish()
    }
}
