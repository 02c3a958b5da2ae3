//! Request and response types.

pub mod label;
pub mod pagination;
pub mod project;
pub mod response;

pub use label::{
    CreateLabelOptions, DeleteLabelOptions, Label, ListLabelsOptions, UpdateLabelOptions,
};
pub use pagination::PageInfo;
pub use project::ProjectRef;
pub use response::{ApiResponse, ResponseMeta};
