//! `latest` and `next` workflows
//!
//! Kept free of clap and terminal output: a workflow takes a tag source and
//! the caller's choices and returns the version to print together with the
//! warnings met on the way.

use anyhow::{Context, Result};
use tracing::debug;

use crate::boundary::BoundaryWarning;
use crate::domain::{self, BumpKind, Environment, Version};
use crate::registry::TagSource;

/// Outcome of a successful workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Highest existing version of the environment, or its default
    pub current: Version,

    /// The version to print: `current` for `latest`, the bumped version for `next`
    pub output: Version,

    pub warnings: Vec<BoundaryWarning>,
}

struct Resolution {
    current: Version,
    warnings: Vec<BoundaryWarning>,
}

/// List, classify and select the current version of `environment`
fn resolve_current<S: TagSource>(source: &S, environment: Environment) -> Result<Resolution> {
    let tags = source.list_tags().context("Failed to list tags")?;
    debug!(count = tags.len(), "listed tags");

    let classification = domain::classify_with_report(&tags, environment);
    let mut warnings: Vec<BoundaryWarning> = classification
        .skipped
        .into_iter()
        .map(BoundaryWarning::from)
        .collect();

    let versions = classification.versions;
    debug!(
        "Tags: [{}]",
        versions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let current = domain::select_current(&versions, environment);
    if versions.is_empty() {
        warnings.push(BoundaryWarning::NoMatchingTags {
            environment,
            default: current,
        });
    }
    debug!(%current, "current version");

    Ok(Resolution { current, warnings })
}

/// Current version of `environment`
pub fn run_latest<S: TagSource>(source: &S, environment: Environment) -> Result<WorkflowResult> {
    let Resolution { current, warnings } = resolve_current(source, environment)?;

    Ok(WorkflowResult {
        current,
        output: current,
        warnings,
    })
}

/// Next version of `environment` after applying `kind`
///
/// The environment / bump kind pair is validated before the tag source is
/// queried.
pub fn run_next<S: TagSource>(
    source: &S,
    environment: Environment,
    kind: BumpKind,
) -> Result<WorkflowResult> {
    domain::validate_pairing(environment, kind)?;

    let Resolution { current, warnings } = resolve_current(source, environment)?;
    let next = domain::bump(&current, kind)?;
    debug!(%next, %kind, "next version");

    Ok(WorkflowResult {
        current,
        output: next,
        warnings,
    })
}
