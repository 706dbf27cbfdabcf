use crate::element::PatchElementBuilder;
use crate::patch::PatchElement;
use patchmeta_types::{PatchType, PrebuiltElement};
use tracing::debug;

/// An element registered on a [`PatchBuilder`](crate::PatchBuilder), not yet resolved.
///
/// Held until the parent's classification is known; [`resolve`] turns it into a
/// [`PatchElement`]. The source is consumed, so it resolves at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementSource {
    Builder(PatchElementBuilder),
    Prebuilt(PrebuiltElement),
}

impl ElementSource {
    pub fn element_id(&self) -> &str {
        match self {
            ElementSource::Builder(b) => b.element_id(),
            ElementSource::Prebuilt(e) => &e.element_id,
        }
    }
}

impl From<PatchElementBuilder> for ElementSource {
    fn from(builder: PatchElementBuilder) -> Self {
        ElementSource::Builder(builder)
    }
}

impl From<PrebuiltElement> for ElementSource {
    fn from(element: PrebuiltElement) -> Self {
        ElementSource::Prebuilt(element)
    }
}

/// Resolve an element source against the parent patch's classification.
///
/// - nested builders always take the parent's classification
/// - pre-built elements without a classification take the parent's
/// - pre-built elements that already carry one keep it
pub fn resolve(source: ElementSource, parent: &PatchType) -> PatchElement {
    match source {
        ElementSource::Builder(builder) => {
            debug!(
                element_id = builder.element_id(),
                patch_type = %parent,
                "element inherits parent classification"
            );
            builder.finish(parent.clone())
        }
        ElementSource::Prebuilt(element) => {
            let inherited = element.patch_type.is_none();
            let patch_type = element.patch_type.unwrap_or_else(|| parent.clone());
            debug!(
                element_id = %element.element_id,
                patch_type = %patch_type,
                inherited,
                "resolved pre-built element"
            );
            PatchElement::new(
                element.element_id,
                element.layer_name,
                element.add_on,
                patch_type,
                element.modifications,
            )
        }
    }
}
