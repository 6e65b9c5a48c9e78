//! Custom extractors for request handling
//!
//! Wrap axum's extractors so that rejections use the API error body.

mod json;
mod path;

pub use json::JsonBody;
pub use path::IdPath;
