use crate::domain::{Environment, SkippedTag, Version};
use std::fmt;

/// Non-fatal conditions met while turning a tag listing into a version.
/// These are reported to the user on stderr and never change stdout.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag matched the environment pattern but cannot be parsed as a version
    SkippedTag { tag: String, reason: String },
    /// No tag of the environment exists; the default seed version is used
    NoMatchingTags {
        environment: Environment,
        default: Version,
    },
}

impl From<SkippedTag> for BoundaryWarning {
    fn from(skipped: SkippedTag) -> Self {
        BoundaryWarning::SkippedTag {
            tag: skipped.tag,
            reason: skipped.reason,
        }
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::SkippedTag { tag, reason } => {
                write!(f, "Skipping tag '{}': {}", tag, reason)
            }
            BoundaryWarning::NoMatchingTags {
                environment,
                default,
            } => {
                write!(
                    f,
                    "No '{}' tags found, starting from {}",
                    environment, default
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skipped_tag_display() {
        let warning = BoundaryWarning::from(SkippedTag {
            tag: "v1.0.0-rc.99999999999999999999".to_string(),
            reason: "out of range".to_string(),
        });
        assert_eq!(
            warning.to_string(),
            "Skipping tag 'v1.0.0-rc.99999999999999999999': out of range"
        );
    }

    #[test]
    fn test_no_matching_tags_display() {
        let warning = BoundaryWarning::NoMatchingTags {
            environment: Environment::Staging,
            default: Environment::Staging.default_version(),
        };
        assert_eq!(
            warning.to_string(),
            "No 'staging' tags found, starting from v0.0.0-rc.0"
        );
    }
}
