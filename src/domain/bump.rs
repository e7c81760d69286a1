//! Next-version computation
//!
//! Bumps are text substitutions on the canonical form of the current
//! version: the targeted number is replaced and everything after it is kept
//! verbatim. Lower components are not reset and a pre-release suffix is not
//! cleared, so `v1.2.3-rc.4` bumped by `major` becomes `v2.2.3-rc.4`.

use crate::domain::environment::BumpKind;
use crate::domain::version::Version;
use crate::error::{HarborTagError, Result};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static MAJOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(v)([0-9]+)(.*)$").expect("major pattern compiles"));
static MINOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(v[0-9]+\.)([0-9]+)(.*)$").expect("minor pattern compiles"));
static PATCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(v[0-9]+\.[0-9]+\.)([0-9]+)(.*)$").expect("patch pattern compiles")
});
static RC_COUNTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(v[0-9]+\.[0-9]+\.[0-9]+-rc\.)([0-9]+)$").expect("rc pattern compiles")
});
static DEV_COUNTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(v[0-9]+\.[0-9]+\.[0-9]+-dev\.)([0-9]+)$").expect("dev pattern compiles")
});

/// Compute the version following `current` for the given bump kind.
///
/// # Errors
/// * `MalformedCounter` - `rc`/`dev` bump on a version without a matching
///   `-rc.N`/`-dev.N` suffix, or whose counter cannot be incremented
/// * `VersionParse` - the substituted text is not a valid version
pub fn bump(current: &Version, kind: BumpKind) -> Result<Version> {
    let text = current.to_string();

    let next = match kind {
        BumpKind::Major => increment_component(&MAJOR, &text, current.major, "major")?,
        BumpKind::Minor => increment_component(&MINOR, &text, current.minor, "minor")?,
        BumpKind::Patch => increment_component(&PATCH, &text, current.patch, "patch")?,
        BumpKind::Rc => increment_counter(&RC_COUNTER, &text, kind)?,
        BumpKind::Dev => increment_counter(&DEV_COUNTER, &text, kind)?,
    };

    Version::parse(&next)
}

fn increment_component(re: &Regex, text: &str, value: u64, name: &str) -> Result<String> {
    let caps = re.captures(text).ok_or_else(|| {
        HarborTagError::version(format!("Cannot locate {} component in '{}'", name, text))
    })?;
    let next = value.checked_add(1).ok_or_else(|| {
        HarborTagError::version(format!("{} component of '{}' overflows", name, text))
    })?;

    Ok(format!("{}{}{}", &caps[1], next, group(&caps, 3)))
}

fn increment_counter(re: &Regex, text: &str, kind: BumpKind) -> Result<String> {
    let malformed = || HarborTagError::MalformedCounter {
        version: text.to_string(),
        kind,
    };

    let caps = re.captures(text).ok_or_else(malformed)?;
    let counter = caps[2].parse::<u64>().map_err(|_| malformed())?;
    let next = counter.checked_add(1).ok_or_else(malformed)?;

    Ok(format!("{}{}", &caps[1], next))
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next(current: &str, kind: BumpKind) -> Result<String> {
        bump(&Version::parse(current).unwrap(), kind).map(|v| v.to_string())
    }

    #[test]
    fn test_bump_release_components() {
        assert_eq!(next("v1.2.3", BumpKind::Patch).unwrap(), "v1.2.4");
        assert_eq!(next("v1.2.3", BumpKind::Minor).unwrap(), "v1.3.3");
        assert_eq!(next("v1.2.3", BumpKind::Major).unwrap(), "v2.2.3");
    }

    #[test]
    fn test_bump_keeps_suffix_verbatim() {
        assert_eq!(next("v1.2.3-rc.4", BumpKind::Major).unwrap(), "v2.2.3-rc.4");
        assert_eq!(next("v1.2.3-rc.4", BumpKind::Minor).unwrap(), "v1.3.3-rc.4");
        assert_eq!(next("v1.2.3-dev.9", BumpKind::Patch).unwrap(), "v1.2.4-dev.9");
    }

    #[test]
    fn test_bump_counters() {
        assert_eq!(next("v1.0.0-rc.0", BumpKind::Rc).unwrap(), "v1.0.0-rc.1");
        assert_eq!(next("v0.0.0-dev.0", BumpKind::Dev).unwrap(), "v0.0.0-dev.1");
        assert_eq!(next("v2.5.1-rc.9", BumpKind::Rc).unwrap(), "v2.5.1-rc.10");
    }

    #[test]
    fn test_bump_counter_wrong_kind() {
        let err = next("v1.0.0-rc.0", BumpKind::Dev).unwrap_err();
        assert!(matches!(
            err,
            HarborTagError::MalformedCounter {
                kind: BumpKind::Dev,
                ..
            }
        ));
    }

    #[test]
    fn test_bump_counter_on_release() {
        assert!(matches!(
            next("v1.0.0", BumpKind::Rc),
            Err(HarborTagError::MalformedCounter { .. })
        ));
        assert!(matches!(
            next("v1.0.0", BumpKind::Dev),
            Err(HarborTagError::MalformedCounter { .. })
        ));
    }

    #[test]
    fn test_bump_counter_overflow() {
        let err = next("v1.0.0-rc.18446744073709551615", BumpKind::Rc).unwrap_err();
        assert!(matches!(err, HarborTagError::MalformedCounter { .. }));
    }

    #[test]
    fn test_bump_component_overflow() {
        let err = next("v18446744073709551615.0.0", BumpKind::Major).unwrap_err();
        assert!(matches!(err, HarborTagError::VersionParse(_)));
    }

    #[test]
    fn test_bump_normalises_leading_zeros() {
        assert_eq!(next("v01.02.03", BumpKind::Patch).unwrap(), "v1.2.4");
    }
}
