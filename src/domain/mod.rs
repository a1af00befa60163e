//! Domain logic - value types independent of repository access

pub mod object_id;
pub mod tag;
pub mod version;

pub use object_id::ObjectId;
pub use tag::TagReference;
pub use version::{is_semantic_version, parse_version, Version};
