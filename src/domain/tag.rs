use crate::domain::version::parse_version;
use crate::domain::ObjectId;
use crate::error::Result;
use std::fmt;

/// Prefix of tag references in the reference namespace
pub const TAG_REF_PREFIX: &str = "refs/tags/";

/// A tag reference as a value: short name plus the object the reference points to
///
/// For a lightweight tag `id` is the tagged commit; for an annotated tag it is
/// the tag object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagReference {
    pub name: String,
    pub id: ObjectId,
}

impl TagReference {
    /// Create a tag reference from a short or fully-qualified name
    pub fn new(name: impl Into<String>, id: ObjectId) -> Self {
        let name = name.into();
        let name = match name.strip_prefix(TAG_REF_PREFIX) {
            Some(short) => short.to_string(),
            None => name,
        };
        TagReference { name, id }
    }

    /// Fully-qualified reference name (e.g. `refs/tags/v1.2.3`)
    pub fn full_name(&self) -> String {
        format!("{}{}", TAG_REF_PREFIX, self.name)
    }

    /// Parse the short name as a semantic version
    pub fn version(&self) -> Result<semver::Version> {
        parse_version(&self.name)
    }
}

impl fmt::Display for TagReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
