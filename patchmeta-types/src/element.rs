use crate::modification::ContentModification;
use crate::patch_type::PatchType;
use serde::{Deserialize, Serialize};

/// A patch element constructed outside the builder (e.g. read back from an
/// existing patch).
///
/// `patch_type == None` means the element has not been classified yet; it
/// will take its parent's classification when the parent is built. An
/// element that already carries a classification keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrebuiltElement {
    pub element_id: String,
    pub layer_name: String,

    #[serde(default)]
    pub add_on: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch_type: Option<PatchType>,

    #[serde(default)]
    pub modifications: Vec<ContentModification>,
}

impl PrebuiltElement {
    pub fn new(element_id: impl Into<String>, layer_name: impl Into<String>, add_on: bool) -> Self {
        Self {
            element_id: element_id.into(),
            layer_name: layer_name.into(),
            add_on,
            patch_type: None,
            modifications: vec![],
        }
    }

    pub fn with_upgrade(mut self, resulting_version: impl Into<String>) -> Self {
        self.patch_type = Some(PatchType::upgrade(resulting_version));
        self
    }

    pub fn with_no_upgrade(mut self) -> Self {
        self.patch_type = Some(PatchType::OneOff);
        self
    }

    pub fn is_classified(&self) -> bool {
        self.patch_type.is_some()
    }
}
