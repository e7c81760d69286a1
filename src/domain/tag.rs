//! Tag classification: which raw tag names belong to an environment, and
//! which of them is the current version.

use crate::domain::environment::Environment;
use crate::domain::version::Version;
use regex::Regex;
use std::sync::LazyLock;

static DEV_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(Environment::Dev.tag_pattern()).expect("dev tag pattern compiles"));
static STAGING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(Environment::Staging.tag_pattern()).expect("staging tag pattern compiles")
});
static PROD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(Environment::Prod.tag_pattern()).expect("prod tag pattern compiles")
});

/// Tag naming convention of one environment
#[derive(Debug, Clone, Copy)]
pub struct TagPattern {
    environment: Environment,
}

impl TagPattern {
    pub fn new(environment: Environment) -> Self {
        TagPattern { environment }
    }

    /// Whether `tag` matches the whole pattern (case-sensitive)
    pub fn matches(&self, tag: &str) -> bool {
        let re: &Regex = match self.environment {
            Environment::Dev => &*DEV_PATTERN,
            Environment::Staging => &*STAGING_PATTERN,
            Environment::Prod => &*PROD_PATTERN,
        };
        re.is_match(tag)
    }
}

/// A tag that matched the environment pattern but did not parse as a version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTag {
    pub tag: String,
    pub reason: String,
}

/// Result of classifying a tag listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    /// Parsed versions, ascending
    pub versions: Vec<Version>,
    pub skipped: Vec<SkippedTag>,
}

/// Filter `tag_names` to the versions of `environment`, sorted ascending.
///
/// Names that do not match the environment pattern, or match but fail to
/// parse, are dropped.
pub fn classify<S: AsRef<str>>(tag_names: &[S], environment: Environment) -> Vec<Version> {
    classify_with_report(tag_names, environment).versions
}

/// Like [`classify`], but also reports names that matched the pattern and
/// still could not be parsed (for example a component too large for `u64`).
///
/// Names that do not match the pattern at all are not reported; they
/// belong to other environments or are not version tags.
pub fn classify_with_report<S: AsRef<str>>(
    tag_names: &[S],
    environment: Environment,
) -> Classification {
    let pattern = TagPattern::new(environment);
    let mut classification = Classification::default();

    for name in tag_names {
        let name: &str = name.as_ref();
        if !pattern.matches(name) {
            continue;
        }
        match Version::parse(name) {
            Ok(version) => classification.versions.push(version),
            Err(e) => classification.skipped.push(SkippedTag {
                tag: name.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    classification.versions.sort();
    classification
}

/// Current version of an environment: the highest classified version, or
/// the environment default when there is none.
pub fn select_current(versions: &[Version], environment: Environment) -> Version {
    versions
        .last()
        .copied()
        .unwrap_or_else(|| environment.default_version())
}
