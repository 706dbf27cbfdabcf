//! Error types for patchmeta-builder.
//!
//! Every variant is a violated precondition of [`PatchBuilder::try_build`](crate::PatchBuilder):
//! the caller did not supply a required field before freezing.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("patch identity is not set")]
    MissingIdentity,

    #[error("patch id is not set")]
    MissingPatchId,

    #[error("patch type is not set (call set_upgrade or set_no_upgrade)")]
    MissingPatchType,

    #[error("upgrade patch has no resulting version")]
    MissingResultingVersion,

    #[error("element {element_id} is an upgrade with no resulting version")]
    ElementMissingResultingVersion { element_id: String },

    /// Legacy one-off setter was given a list that was not exactly one version.
    #[error("patch must apply to exactly one version, got {count}")]
    AppliesToCount { count: usize },
}
