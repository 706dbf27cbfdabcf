//! Construction protocol: accumulate patch facts, then freeze them into an immutable descriptor.
//!
//! This crate owns *how* a patch description is assembled and what shape it must have. It does
//! not read or write patch files and it does not apply anything.
//!
//! # Flow
//!
//! - configure a [`PatchBuilder`] (identity, id, classification, modifications)
//! - attach elements, either through a nested [`PatchElementBuilder`] or as a
//!   [`PrebuiltElement`](patchmeta_types::PrebuiltElement)
//! - call [`PatchBuilder::try_build`] (or [`PatchBuilder::build`]) once
//!
//! Elements may be attached before the parent's classification is chosen. Each one is held as an
//! [`ElementSource`] and only [`resolve`]d against the parent's classification at build time.

mod builder;
mod element;
mod error;
mod patch;
mod source;
mod target;

pub use builder::PatchBuilder;
pub use element::PatchElementBuilder;
pub use error::BuildError;
pub use patch::{Patch, PatchElement};
pub use source::{ElementSource, resolve};
pub use target::ModificationTarget;
