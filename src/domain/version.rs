use crate::domain::{ObjectId, TagReference};
use crate::error::{GitverError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Tolerant semantic version grammar: optional lowercase `v` prefix, missing minor and
/// patch components default to 0.
fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^v?([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?(-[0-9A-Za-z.-]+)?(\+[0-9A-Za-z.-]+)?$",
        )
        .unwrap_or_else(|e| panic!("invalid built-in version pattern: {}", e))
    })
}

/// Parse a semantic version from text such as `1.2.3`, `v1.2.3-rc.1+build.5` or `v2.1`
///
/// Prerelease and build metadata are validated by the `semver` crate.
pub fn parse_version(input: &str) -> Result<semver::Version> {
    let captures = version_pattern().captures(input).ok_or_else(|| {
        GitverError::parse(format!("'{}' is not a semantic version", input))
    })?;

    let component = |index: usize, label: &str| -> Result<u64> {
        match captures.get(index) {
            Some(m) => m.as_str().parse::<u64>().map_err(|e| {
                GitverError::parse(format!("invalid {} version in '{}': {}", label, input, e))
            }),
            None => Ok(0),
        }
    };

    let mut version = semver::Version::new(
        component(1, "major")?,
        component(2, "minor")?,
        component(3, "patch")?,
    );

    if let Some(pre) = captures.get(4) {
        version.pre = semver::Prerelease::new(&pre.as_str()[1..]).map_err(|e| {
            GitverError::parse(format!("invalid prerelease in '{}': {}", input, e))
        })?;
    }

    if let Some(build) = captures.get(5) {
        version.build = semver::BuildMetadata::new(&build.as_str()[1..]).map_err(|e| {
            GitverError::parse(format!("invalid build metadata in '{}': {}", input, e))
        })?;
    }

    Ok(version)
}

/// Check whether text is a semantic version without keeping the result
pub fn is_semantic_version(input: &str) -> bool {
    parse_version(input).is_ok()
}

/// Version information derived from a repository
///
/// Holds the semantic version together with the distance to the tag it was
/// derived from. When no tag qualified, `latest_version_tag` is `None`,
/// `commits_ahead` is 0 and `commit_hash` is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    /// The semantic version, including any appended build metadata
    pub base: semver::Version,

    /// Commits between the latest version tag and the branch tip
    pub commits_ahead: u64,

    /// Branch tip commit
    pub commit_hash: ObjectId,

    /// Tag the version was derived from
    pub latest_version_tag: Option<TagReference>,
}

impl Version {
    /// Version used when no qualifying tag exists
    pub fn from_default(base: semver::Version) -> Self {
        Version {
            base,
            commits_ahead: 0,
            commit_hash: ObjectId::zero(),
            latest_version_tag: None,
        }
    }

    pub fn major(&self) -> u64 {
        self.base.major
    }

    pub fn minor(&self) -> u64 {
        self.base.minor
    }

    pub fn patch(&self) -> u64 {
        self.base.patch
    }

    pub fn pre(&self) -> &str {
        self.base.pre.as_str()
    }

    pub fn build(&self) -> &str {
        self.base.build.as_str()
    }

    /// True when the branch tip is exactly a tagged commit
    pub fn is_exact(&self) -> bool {
        self.latest_version_tag.is_some() && self.commits_ahead == 0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let v = parse_version("1.2.3").unwrap();
        assert_eq!(v, semver::Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_with_prefix() {
        assert_eq!(parse_version("v1.2.3").unwrap(), semver::Version::new(1, 2, 3));
        assert_eq!(parse_version("v0.1.0").unwrap(), semver::Version::new(0, 1, 0));
    }

    #[test]
    fn test_parse_rejects_uppercase_prefix() {
        assert!(parse_version("V1.0.0").is_err());
        assert!(!is_semantic_version("V0.1.0"));
    }

    #[test]
    fn test_parse_partial() {
        assert_eq!(parse_version("v2").unwrap(), semver::Version::new(2, 0, 0));
        assert_eq!(parse_version("2.1").unwrap(), semver::Version::new(2, 1, 0));
    }

    #[test]
    fn test_parse_prerelease_and_build() {
        let v = parse_version("v1.0.0-rc.1+build.7").unwrap();
        assert_eq!(v.pre.as_str(), "rc.1");
        assert_eq!(v.build.as_str(), "build.7");
        assert_eq!(v.to_string(), "1.0.0-rc.1+build.7");
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", "not-a-version", "release-1.0.0", "1.2.3.4", "v", "1.2.3-", "1.2.3+"] {
            assert!(parse_version(input).is_err(), "'{}' should not parse", input);
        }
    }

    #[test]
    fn test_parse_rejects_leading_zero_prerelease() {
        assert!(parse_version("1.0.0-01").is_err());
    }

    #[test]
    fn test_is_semantic_version() {
        assert!(is_semantic_version("v3.4.5"));
        assert!(!is_semantic_version("latest"));
    }

    #[test]
    fn test_version_from_default() {
        let v = Version::from_default(semver::Version::new(0, 1, 0));
        assert_eq!(v.commits_ahead, 0);
        assert!(v.commit_hash.is_zero());
        assert!(v.latest_version_tag.is_none());
        assert!(!v.is_exact());
        assert_eq!(v.to_string(), "0.1.0");
    }

    #[test]
    fn test_version_accessors_delegate() {
        let v = Version::from_default(parse_version("4.5.6-beta+meta").unwrap());
        assert_eq!(v.major(), 4);
        assert_eq!(v.minor(), 5);
        assert_eq!(v.patch(), 6);
        assert_eq!(v.pre(), "beta");
        assert_eq!(v.build(), "meta");
    }
}
