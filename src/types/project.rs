//! Project identifiers.

use crate::error::GitLabError;

/// A project reference, addressed either by numeric id or by its full
/// `namespace/name` path.
///
/// The path form is percent-encoded into a single URL path segment before it
/// is inserted into a request path, so callers can pass the human-readable
/// form directly:
///
/// ```rust
/// use gitlab_client::types::ProjectRef;
///
/// let by_id = ProjectRef::from(42);
/// let by_path = ProjectRef::from("my group/my project");
/// assert_eq!(by_id.path_segment().unwrap(), "42");
/// assert_eq!(by_path.path_segment().unwrap(), "my%20group%2Fmy%20project");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProjectRef {
    /// Numeric project id.
    Id(u64),
    /// Full path of the project, e.g. `group/subgroup/project`.
    Path(String),
}

impl ProjectRef {
    /// The normalized URL path segment for this reference.
    ///
    /// Fails with a validation error on an empty path form; this is the only
    /// locally enforced well-formedness rule, everything else is the remote
    /// service's to judge.
    pub fn path_segment(&self) -> Result<String, GitLabError> {
        match self {
            Self::Id(id) => Ok(id.to_string()),
            Self::Path(path) => {
                if path.trim().is_empty() {
                    return Err(GitLabError::Validation(
                        "project path must not be empty".into(),
                    ));
                }
                Ok(urlencoding::encode(path).into_owned())
            }
        }
    }
}

impl From<u64> for ProjectRef {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ProjectRef {
    fn from(path: &str) -> Self {
        Self::Path(path.to_owned())
    }
}

impl From<String> for ProjectRef {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl std::fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Path(path) => f.write_str(path),
        }
    }
}
