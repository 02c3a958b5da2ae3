//! Project label operations.
//!
//! Bindings for the label endpoints of a project:
//! - `GET    /projects/:id/labels`
//! - `POST   /projects/:id/labels`
//! - `PUT    /projects/:id/labels`
//! - `DELETE /projects/:id/labels`
//!
//! Update and delete address a label by its current `name` carried in the
//! options bag, not in the path.

use reqwest::Method;

use crate::client::GitLab;
use crate::error::GitLabError;
use crate::types::{
    ApiResponse, CreateLabelOptions, DeleteLabelOptions, Label, ListLabelsOptions, ProjectRef,
    ResponseMeta, UpdateLabelOptions,
};

/// Handle for the label operations of the API.
///
/// Obtained from [`GitLab::labels`]; cheap to clone and safe to use
/// concurrently.
#[derive(Debug, Clone)]
pub struct Labels {
    client: GitLab,
}

impl Labels {
    pub(crate) fn new(client: GitLab) -> Self {
        Self { client }
    }

    fn collection_path(project: &ProjectRef) -> Result<String, GitLabError> {
        Ok(format!("projects/{}/labels", project.path_segment()?))
    }

    /// List the labels of a project, in the order the service returns them.
    pub async fn list(
        &self,
        project: impl Into<ProjectRef>,
        options: Option<&ListLabelsOptions>,
    ) -> Result<ApiResponse<Vec<Label>>, GitLabError> {
        let path = Self::collection_path(&project.into())?;
        let request = self.client.build_request(Method::GET, &path, options)?;
        self.client.execute(request).await
    }

    /// Create a label. A duplicate name is rejected by the service and
    /// surfaces as a status error.
    pub async fn create(
        &self,
        project: impl Into<ProjectRef>,
        options: &CreateLabelOptions,
    ) -> Result<ApiResponse<Label>, GitLabError> {
        let path = Self::collection_path(&project.into())?;
        let request = self
            .client
            .build_request(Method::POST, &path, Some(options))?;
        self.client.execute(request).await
    }

    /// Update the label named in `options`. Only supplied fields change;
    /// the service rejects an update that specifies nothing to change.
    pub async fn update(
        &self,
        project: impl Into<ProjectRef>,
        options: &UpdateLabelOptions,
    ) -> Result<ApiResponse<Label>, GitLabError> {
        let path = Self::collection_path(&project.into())?;
        let request = self
            .client
            .build_request(Method::PUT, &path, Some(options))?;
        self.client.execute(request).await
    }

    /// Delete the label named in `options`. Whatever status the service
    /// returns is surfaced untranslated.
    pub async fn delete(
        &self,
        project: impl Into<ProjectRef>,
        options: &DeleteLabelOptions,
    ) -> Result<ResponseMeta, GitLabError> {
        let path = Self::collection_path(&project.into())?;
        let request = self
            .client
            .build_request(Method::DELETE, &path, Some(options))?;
        self.client.execute_no_content(request).await
    }
}
