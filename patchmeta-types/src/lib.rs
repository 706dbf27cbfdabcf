//! Shared value types for the patchmeta workspace.
//!
//! These are the collaborator-facing values a patch builder consumes:
//! identities, classifications, content modifications and pre-built elements.
//!
//! # Design constraints
//! - Values are owned and immutable once handed to a builder.
//! - Be conservative with breaking changes; these types are serialized.
//! - Prefer adding optional fields over changing semantics.

pub mod element;
pub mod identity;
pub mod modification;
pub mod patch_type;

pub use element::PrebuiltElement;
pub use identity::Identity;
pub use modification::{ContentHash, ContentItem, ContentModification, ModificationType};
pub use patch_type::PatchType;

/// Schema identifiers.
pub mod schema {
    pub const PATCHMETA_PATCH_V1: &str = "patchmeta.patch.v1";
}
