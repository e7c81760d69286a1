use crate::domain::prerelease::PreRelease;
use crate::error::{HarborTagError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Semantic version of an image tag, rendered as `vMAJOR.MINOR.PATCH[-KIND.N]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Option<PreRelease>,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64, pre: Option<PreRelease>) -> Self {
        Version {
            major,
            minor,
            patch,
            pre,
        }
    }

    /// Create a release version without a pre-release label
    pub fn release(major: u64, minor: u64, patch: u64) -> Self {
        Version::new(major, minor, patch, None)
    }

    /// Parse a tag string (e.g., "v1.2.3" or "v1.2.3-rc.4")
    ///
    /// The leading `v` is required. Components are plain digit sequences;
    /// leading zeros are accepted and dropped when rendering.
    pub fn parse(tag: &str) -> Result<Self> {
        let rest = tag.strip_prefix('v').ok_or_else(|| {
            HarborTagError::version(format!("Invalid version format: '{}' - missing 'v' prefix", tag))
        })?;

        let (core, pre) = match rest.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (rest, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return Err(HarborTagError::version(format!(
                "Invalid version format: '{}' - expected vX.Y.Z",
                tag
            )));
        }

        let major = parse_component(parts[0], "major", tag)?;
        let minor = parse_component(parts[1], "minor", tag)?;
        let patch = parse_component(parts[2], "patch", tag)?;
        let pre = pre.map(PreRelease::parse).transpose()?;

        Ok(Version {
            major,
            minor,
            patch,
            pre,
        })
    }

    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some()
    }
}

fn parse_component(part: &str, name: &str, tag: &str) -> Result<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HarborTagError::version(format!(
            "Invalid {} version '{}' in '{}'",
            name, part, tag
        )));
    }
    part.parse::<u64>().map_err(|_| {
        HarborTagError::version(format!(
            "{} version '{}' in '{}' is out of range",
            name, part, tag
        ))
    })
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.pre, &other.pre) {
                (None, None) => Ordering::Equal,
                // a release outranks any pre-release of the same triple
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Version {
    type Err = HarborTagError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prerelease::PreReleaseKind;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_version_parse() {
        let ver = v("v1.2.3");
        assert_eq!(ver.major, 1);
        assert_eq!(ver.minor, 2);
        assert_eq!(ver.patch, 3);
        assert_eq!(ver.pre, None);
    }

    #[test]
    fn test_version_parse_prerelease() {
        let ver = v("v1.2.3-rc.4");
        assert_eq!(ver, Version::new(1, 2, 3, Some(PreRelease::new(PreReleaseKind::Rc, 4))));
        assert!(ver.is_prerelease());
    }

    #[test]
    fn test_version_parse_requires_v_prefix() {
        assert!(Version::parse("1.2.3").is_err());
        assert!(Version::parse("V1.2.3").is_err());
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("v1.2").is_err());
        assert!(Version::parse("v1.2.3.4").is_err());
        assert!(Version::parse("v1.+2.3").is_err());
        assert!(Version::parse("v1..3").is_err());
        assert!(Version::parse("v1.2.3-").is_err());
        assert!(Version::parse("v1.2.3-alpha.1").is_err());
        assert!(Version::parse("").is_err());
    }

    #[test]
    fn test_version_parse_overflow() {
        assert!(Version::parse("v99999999999999999999999.0.0").is_err());
    }

    #[test]
    fn test_canonical_render_is_identity() {
        for s in ["v0.0.0", "v1.2.3", "v10.20.30-rc.4", "v0.0.0-dev.0", "v3.0.1-dev.117"] {
            assert_eq!(v(s).to_string(), s);
        }
    }

    #[test]
    fn test_leading_zeros_are_normalised() {
        assert_eq!(v("v01.002.3-rc.04").to_string(), "v1.2.3-rc.4");
    }

    #[test]
    fn test_ordering_by_components() {
        assert!(v("v1.2.3") < v("v1.2.4"));
        assert!(v("v1.2.9") < v("v1.10.0"));
        assert!(v("v1.99.99") < v("v2.0.0"));
    }

    #[test]
    fn test_release_outranks_prerelease() {
        assert!(v("v1.0.0-rc.99") < v("v1.0.0"));
        assert!(v("v1.0.0-dev.5") < v("v1.0.0"));
        assert!(v("v1.0.0") < v("v1.0.1-rc.0"));
    }

    #[test]
    fn test_prerelease_counter_ordering() {
        assert!(v("v1.0.0-rc.2") < v("v1.0.0-rc.10"));
        assert!(v("v1.0.0-dev.10") < v("v1.0.0-rc.1"));
        assert_eq!(v("v1.0.0-rc.01").cmp(&v("v1.0.0-rc.1")), Ordering::Equal);
    }
}
