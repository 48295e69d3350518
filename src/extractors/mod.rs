//! Request extractors.

pub mod id;
pub mod json;
pub use id::IdPath;
pub use json::JsonBody;
