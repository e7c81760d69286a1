//! Tag listing abstraction layer
//!
//! The version rules in [crate::domain] only need raw tag names. This module
//! defines where those names come from:
//!
//! - [harbor::HarborRegistry]: lists the tags of a Harbor repository over HTTP
//! - [fixed::FixedTagSource]: a fixed list, read from memory, a file or stdin
//!
//! Workflows depend on the [TagSource] trait rather than a concrete source,
//! so they can be driven from tests without a registry.

pub mod fixed;
pub mod harbor;

pub use fixed::FixedTagSource;
pub use harbor::{HarborCoordinates, HarborRegistry};

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Image artifact as returned by the Harbor artifacts endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Artifact {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub project_id: i64,
    #[serde(default)]
    pub pull_time: Option<String>,
    #[serde(default)]
    pub push_time: Option<String>,
    /// Harbor sends `null` for untagged artifacts
    #[serde(default)]
    pub tags: Option<Vec<ArtifactTag>>,
}

/// Tag attached to an [Artifact]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArtifactTag {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub pull_time: Option<String>,
    #[serde(default)]
    pub push_time: Option<String>,
}

/// Flatten the tag names of `artifacts`, keeping response order
pub fn tag_names(artifacts: &[Artifact]) -> Vec<String> {
    artifacts
        .iter()
        .flat_map(|artifact| artifact.tags.iter().flatten())
        .map(|tag| tag.name.clone())
        .collect()
}

/// Source of raw tag names for one image repository
///
/// ## Error Handling
///
/// Implementations map transport and decoding failures to
/// [crate::error::HarborTagError::Registry] (or `Io` for local sources).
/// The returned names are untrusted; filtering is the classifier's job.
pub trait TagSource {
    /// List every tag name currently attached to the image repository
    fn list_tags(&self) -> Result<Vec<String>>;
}

impl<T: TagSource + ?Sized> TagSource for &T {
    fn list_tags(&self) -> Result<Vec<String>> {
        (**self).list_tags()
    }
}

impl<T: TagSource + ?Sized> TagSource for Box<T> {
    fn list_tags(&self) -> Result<Vec<String>> {
        (**self).list_tags()
    }
}
