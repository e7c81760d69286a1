//! Pre-release labels carried by dev and staging tags
//!
//! Only two identifiers exist, `dev` and `rc`, and each always carries a
//! numeric counter (`dev.3`, `rc.12`).

use crate::error::{HarborTagError, Result};
use std::fmt;
use std::str::FromStr;

/// Pre-release identifier
///
/// Declaration order is the comparison order: `dev` sorts before `rc`, the
/// same as comparing the identifiers as ASCII text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreReleaseKind {
    /// Development build (`-dev.N`)
    Dev,
    /// Release candidate (`-rc.N`)
    Rc,
}

impl PreReleaseKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PreReleaseKind::Dev => "dev",
            PreReleaseKind::Rc => "rc",
        }
    }
}

impl FromStr for PreReleaseKind {
    type Err = HarborTagError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dev" => Ok(PreReleaseKind::Dev),
            "rc" => Ok(PreReleaseKind::Rc),
            other => Err(HarborTagError::version(format!(
                "Invalid pre-release identifier: '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for PreReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pre-release label with its counter, e.g. "rc.3"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PreRelease {
    pub kind: PreReleaseKind,
    pub counter: u64,
}

impl PreRelease {
    pub fn new(kind: PreReleaseKind, counter: u64) -> Self {
        PreRelease { kind, counter }
    }

    /// Parse a label of the form `KIND.N`
    ///
    /// # Examples
    /// ```ignore
    /// let pr = PreRelease::parse("rc.2")?;
    /// assert_eq!(pr.kind, PreReleaseKind::Rc);
    /// assert_eq!(pr.counter, 2);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let (kind, counter) = s.split_once('.').ok_or_else(|| {
            HarborTagError::version(format!("Pre-release '{}' has no counter", s))
        })?;

        let kind = kind.parse::<PreReleaseKind>()?;
        if counter.is_empty() || !counter.bytes().all(|b| b.is_ascii_digit()) {
            return Err(HarborTagError::version(format!(
                "Invalid pre-release counter: '{}'",
                counter
            )));
        }
        let counter = counter.parse::<u64>().map_err(|_| {
            HarborTagError::version(format!("Pre-release counter out of range: '{}'", counter))
        })?;

        Ok(PreRelease { kind, counter })
    }
}

impl FromStr for PreRelease {
    type Err = HarborTagError;

    fn from_str(s: &str) -> Result<Self> {
        PreRelease::parse(s)
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind, self.counter)
    }
}
