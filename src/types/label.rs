//! Label wire types and per-operation options bags.
//!
//! Every options field is optional: `None` means the parameter is left out
//! of the request entirely, never sent as an empty value. The wire field
//! names are fixed by the remote API (`name`, `color`, `new_name`).

use serde::{Deserialize, Serialize};

/// A named, colored tag attachable to issues within a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label name; also the identity key for update and delete.
    pub name: String,
    /// Color encoded as the service returns it, e.g. `#ff0000`.
    pub color: String,
}

/// Parameters for listing the labels of a project.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListLabelsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u64>,
}

impl ListLabelsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: u64) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

/// Parameters for creating a label.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateLabelOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CreateLabelOptions {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            color: Some(color.into()),
        }
    }
}

/// Parameters for updating a label, addressed by its current `name`.
///
/// The service requires at least one of `new_name` or `color`; that rule is
/// enforced remotely, not here, so an update that specifies nothing to
/// change surfaces as a status error from the API.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateLabelOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl UpdateLabelOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_new_name(mut self, new_name: impl Into<String>) -> Self {
        self.new_name = Some(new_name.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Parameters for deleting a label by name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteLabelOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DeleteLabelOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}
