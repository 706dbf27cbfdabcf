use crate::patch::PatchElement;
use crate::target::ModificationTarget;
use patchmeta_types::{ContentModification, PatchType, PrebuiltElement};

/// Builder for one nested patch element.
///
/// Id, layer and add-on flag are fixed at construction. There is no classification setter: the
/// element takes its parent's classification when the parent is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchElementBuilder {
    element_id: String,
    layer_name: String,
    add_on: bool,
    modifications: Vec<ContentModification>,
}

impl PatchElementBuilder {
    pub fn new(element_id: impl Into<String>, layer_name: impl Into<String>, add_on: bool) -> Self {
        Self {
            element_id: element_id.into(),
            layer_name: layer_name.into(),
            add_on,
            modifications: vec![],
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

    /// Hand the element out as an unclassified pre-built value.
    pub fn into_prebuilt(self) -> PrebuiltElement {
        PrebuiltElement {
            element_id: self.element_id,
            layer_name: self.layer_name,
            add_on: self.add_on,
            patch_type: None,
            modifications: self.modifications,
        }
    }

    pub(crate) fn finish(self, patch_type: PatchType) -> PatchElement {
        PatchElement::new(
            self.element_id,
            self.layer_name,
            self.add_on,
            patch_type,
            self.modifications,
        )
    }
}

impl ModificationTarget for PatchElementBuilder {
    fn push_modification(&mut self, modification: ContentModification) {
        self.modifications.push(modification);
    }

    fn modifications(&self) -> &[ContentModification] {
        &self.modifications
    }
}
