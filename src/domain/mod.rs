//! Domain logic - pure version-tag rules, no I/O

pub mod bump;
pub mod environment;
pub mod prerelease;
pub mod tag;
pub mod version;

pub use bump::bump;
pub use environment::{is_valid_pairing, validate_pairing, BumpKind, Environment};
pub use prerelease::{PreRelease, PreReleaseKind};
pub use tag::{classify, classify_with_report, select_current, Classification, SkippedTag, TagPattern};
pub use version::Version;
