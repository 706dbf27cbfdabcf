use patchmeta_types::{ContentModification, Identity, PatchType, PrebuiltElement};
use serde::Serialize;

/// A resolved, fully classified patch element.
///
/// Only produced by resolution at build time; there is no way to change its classification
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchElement {
    element_id: String,
    layer_name: String,
    add_on: bool,
    patch_type: PatchType,
    modifications: Vec<ContentModification>,
}

impl PatchElement {
    pub(crate) fn new(
        element_id: String,
        layer_name: String,
        add_on: bool,
        patch_type: PatchType,
        modifications: Vec<ContentModification>,
    ) -> Self {
        Self {
            element_id,
            layer_name,
            add_on,
            patch_type,
            modifications,
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn layer_name(&self) -> &str {
        &self.layer_name
    }

    pub fn is_add_on(&self) -> bool {
        self.add_on
    }

    pub fn patch_type(&self) -> &PatchType {
        &self.patch_type
    }

    pub fn resulting_version(&self) -> Option<&str> {
        self.patch_type.resulting_version()
    }

    pub fn modifications(&self) -> &[ContentModification] {
        &self.modifications
    }
}

impl From<PatchElement> for PrebuiltElement {
    fn from(element: PatchElement) -> Self {
        PrebuiltElement {
            element_id: element.element_id,
            layer_name: element.layer_name,
            add_on: element.add_on,
            patch_type: Some(element.patch_type),
            modifications: element.modifications,
        }
    }
}

/// The frozen patch descriptor.
///
/// All accessors are projections of builder state at freeze time and are stable for the lifetime
/// of the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patch {
    patch_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    identity: Identity,
    patch_type: PatchType,
    applies_to: Vec<String>,
    modifications: Vec<ContentModification>,
    elements: Vec<PatchElement>,
}

impl Patch {
    pub(crate) fn new(
        patch_id: String,
        description: Option<String>,
        identity: Identity,
        patch_type: PatchType,
        modifications: Vec<ContentModification>,
        elements: Vec<PatchElement>,
    ) -> Self {
        // Single-identity model: a patch applies to exactly one version.
        let applies_to = vec![identity.version().to_string()];
        Self {
            patch_id,
            description,
            identity,
            patch_type,
            applies_to,
            modifications,
            elements,
        }
    }

    pub fn patch_id(&self) -> &str {
        &self.patch_id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn patch_type(&self) -> &PatchType {
        &self.patch_type
    }

    /// Present iff the patch is an upgrade.
    pub fn resulting_version(&self) -> Option<&str> {
        self.patch_type.resulting_version()
    }

    pub fn applies_to(&self) -> &[String] {
        &self.applies_to
    }

    pub fn modifications(&self) -> &[ContentModification] {
        &self.modifications
    }

    pub fn elements(&self) -> &[PatchElement] {
        &self.elements
    }
}
