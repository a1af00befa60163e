use crate::describe::candidate::TagCandidate;
use crate::domain::{parse_version, ObjectId, Version};
use crate::error::{GitverError, Result};
use tracing::debug;

/// Number of hex characters of the tip commit appended as build metadata
pub const SHORT_HASH_LEN: usize = 8;

/// Parse the caller-supplied default version
pub fn parse_default_version(default_version: &str) -> Result<semver::Version> {
    if default_version.is_empty() {
        return Err(GitverError::invalid_input("default version must not be empty"));
    }
    parse_version(default_version).map_err(|e| {
        GitverError::invalid_input(format!("failed to parse default version: {}", e))
    })
}

/// Build metadata recording the distance to the tag and the tip commit
///
/// Existing metadata is kept and joined with a hyphen.
pub fn compose_build_metadata(
    existing: &semver::BuildMetadata,
    distance: u64,
    tip: ObjectId,
) -> Result<semver::BuildMetadata> {
    let suffix = format!("{}.{}", distance, tip.short_hex(SHORT_HASH_LEN));
    let metadata = if existing.is_empty() {
        suffix
    } else {
        format!("{}-{}", existing, suffix)
    };

    semver::BuildMetadata::new(&metadata).map_err(|e| {
        GitverError::composition(format!(
            "failed to set version metadata '{}': {}",
            metadata, e
        ))
    })
}

/// Combine the winning candidate, or the default, into the final version
///
/// The tag name is parsed again here even though the tag index only holds
/// tags with version names.
pub fn compose(
    default_version: semver::Version,
    candidate: Option<&TagCandidate>,
    tip: ObjectId,
) -> Result<Version> {
    let Some(candidate) = candidate else {
        debug!(version = %default_version, "no version tag found, using default");
        return Ok(Version::from_default(default_version));
    };

    let mut base = candidate.reference.version().map_err(|e| {
        GitverError::parse(format!(
            "failed to parse version from Git tag {}: {}",
            candidate.reference, e
        ))
    })?;

    if candidate.distance > 0 {
        base.build = compose_build_metadata(&base.build, candidate.distance, tip)?;
    }

    debug!(
        version = %base,
        tag = %candidate.reference,
        commits_ahead = candidate.distance,
        "composed version"
    );

    Ok(Version {
        base,
        commits_ahead: candidate.distance,
        commit_hash: tip,
        latest_version_tag: Some(candidate.reference.clone()),
    })
}
