//! Resource bindings.
//!
//! Each binding is a thin composition over the request executor: normalize
//! the resource identifier, build the relative path, pick the method, and
//! hand the options bag to the executor. All domain rules (name uniqueness,
//! color formats, and the like) are the remote service's to enforce and
//! surface as status errors.

pub mod labels;

pub use labels::Labels;
