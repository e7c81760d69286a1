//! Deployment environments, bump kinds and the rules pairing them

use crate::domain::prerelease::{PreRelease, PreReleaseKind};
use crate::domain::version::Version;
use crate::error::{HarborTagError, Result};
use std::fmt;
use std::str::FromStr;

/// Deployment stage an image tag belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    /// Anchored pattern a tag name must match to belong to this environment
    pub fn tag_pattern(self) -> &'static str {
        match self {
            Environment::Dev => r"^v[0-9]+\.[0-9]+\.[0-9]+-dev\.[0-9]+$",
            Environment::Staging => r"^v[0-9]+\.[0-9]+\.[0-9]+-rc\.[0-9]+$",
            Environment::Prod => r"^v[0-9]+\.[0-9]+\.[0-9]+$",
        }
    }

    /// Version assumed when the repository has no tag for this environment yet
    ///
    /// - dev -> `v0.0.0-dev.0`
    /// - staging -> `v0.0.0-rc.0`
    /// - prod -> `v0.0.0`
    pub fn default_version(self) -> Version {
        let pre = match self {
            Environment::Dev => Some(PreRelease::new(PreReleaseKind::Dev, 0)),
            Environment::Staging => Some(PreRelease::new(PreReleaseKind::Rc, 0)),
            Environment::Prod => None,
        };
        Version::new(0, 0, 0, pre)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Staging => "staging",
            Environment::Prod => "prod",
        }
    }
}

impl FromStr for Environment {
    type Err = HarborTagError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dev" => Ok(Environment::Dev),
            "staging" => Ok(Environment::Staging),
            "prod" => Ok(Environment::Prod),
            other => Err(HarborTagError::config(format!(
                "Unknown environment '{}', expected one of dev, staging, prod",
                other
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Version component a "next" computation increments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
    Rc,
    Dev,
}

impl BumpKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
            BumpKind::Rc => "rc",
            BumpKind::Dev => "dev",
        }
    }
}

impl FromStr for BumpKind {
    type Err = HarborTagError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            "rc" => Ok(BumpKind::Rc),
            "dev" => Ok(BumpKind::Dev),
            other => Err(HarborTagError::config(format!(
                "Unknown bump type '{}', expected one of major, minor, patch, rc, dev",
                other
            ))),
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `kind` may be used to compute the next tag in `environment`.
///
/// dev forbids `rc`, staging forbids `dev`, prod forbids both.
pub fn is_valid_pairing(environment: Environment, kind: BumpKind) -> bool {
    !matches!(
        (environment, kind),
        (Environment::Dev, BumpKind::Rc)
            | (Environment::Staging, BumpKind::Dev)
            | (Environment::Prod, BumpKind::Dev | BumpKind::Rc)
    )
}

/// Fallible form of [`is_valid_pairing`] for the CLI boundary
pub fn validate_pairing(environment: Environment, kind: BumpKind) -> Result<()> {
    if is_valid_pairing(environment, kind) {
        Ok(())
    } else {
        Err(HarborTagError::InvalidPairing { environment, kind })
    }
}
