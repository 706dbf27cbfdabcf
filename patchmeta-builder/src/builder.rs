use crate::element::PatchElementBuilder;
use crate::error::BuildError;
use crate::patch::Patch;
use crate::source::{ElementSource, resolve};
use crate::target::ModificationTarget;
use patchmeta_types::{ContentModification, Identity, PatchType, PrebuiltElement};
use tracing::debug;

/// Accumulates the facts of a patch and freezes them into a [`Patch`].
///
/// Setters may be called in any order. Only the modification and element sequences are
/// order-sensitive. `build`/`try_build` consume the builder, so a builder freezes exactly once.
#[derive(Debug, Clone, Default)]
pub struct PatchBuilder {
    patch_id: Option<String>,
    description: Option<String>,
    identity: Option<Identity>,
    patch_type: Option<PatchType>,
    modifications: Vec<ContentModification>,
    elements: Vec<ElementSource>,
    bad_applies_to: Option<usize>,
}

impl PatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_patch_id(mut self, patch_id: impl Into<String>) -> Self {
        self.patch_id = Some(patch_id.into());
        self
    }

    pub fn set_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_identity(self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.set_identity_value(Identity::new(name, version))
    }

    pub fn set_identity_value(mut self, identity: Identity) -> Self {
        self.identity = Some(identity);
        self.bad_applies_to = None;
        self
    }

    /// Classify as an upgrade to `to_version`, replacing any earlier classification.
    pub fn set_upgrade(mut self, to_version: impl Into<String>) -> Self {
        self.patch_type = Some(PatchType::upgrade(to_version));
        self
    }

    /// Classify as a one-off, replacing any earlier classification and its resulting version.
    pub fn set_no_upgrade(mut self) -> Self {
        self.patch_type = Some(PatchType::OneOff);
        self
    }

    #[deprecated(note = "use set_identity and set_upgrade")]
    pub fn set_cumulative_type(
        self,
        applies_to_version: impl Into<String>,
        resulting_version: impl Into<String>,
    ) -> Self {
        self.set_identity("", applies_to_version)
            .set_upgrade(resulting_version)
    }

    /// `applies_to` must hold exactly one version; anything else fails at build time.
    #[deprecated(note = "use set_identity and set_no_upgrade")]
    pub fn set_one_off_type<I, S>(self, applies_to: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut versions: Vec<String> = applies_to.into_iter().map(Into::into).collect();
        if versions.len() == 1 {
            let version = versions.remove(0);
            return self.set_identity("", version).set_no_upgrade();
        }

        let mut this = self.set_no_upgrade();
        this.bad_applies_to = Some(versions.len());
        this
    }

    /// Register a new element, configured by `configure`.
    ///
    /// The element takes this patch's classification at build time, whenever that is chosen.
    pub fn add_element<F>(
        self,
        element_id: impl Into<String>,
        layer_name: impl Into<String>,
        add_on: bool,
        configure: F,
    ) -> Self
    where
        F: FnOnce(PatchElementBuilder) -> PatchElementBuilder,
    {
        let builder = configure(PatchElementBuilder::new(element_id, layer_name, add_on));
        self.add_element_builder(builder)
    }

    /// Register an element builder configured elsewhere.
    pub fn add_element_builder(mut self, builder: PatchElementBuilder) -> Self {
        self.elements.push(ElementSource::Builder(builder));
        self
    }

    /// Register an already constructed element.
    ///
    /// An unclassified element takes this patch's classification at build time; a classified one
    /// is kept as is.
    pub fn add_prebuilt_element(mut self, element: PrebuiltElement) -> Self {
        self.elements.push(ElementSource::Prebuilt(element));
        self
    }

    /// Validate and freeze.
    pub fn try_build(self) -> Result<Patch, BuildError> {
        if let Some(count) = self.bad_applies_to {
            return Err(BuildError::AppliesToCount { count });
        }
        let identity = self
            .identity
            .filter(|i| !i.version().trim().is_empty())
            .ok_or(BuildError::MissingIdentity)?;
        let patch_id = self
            .patch_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(BuildError::MissingPatchId)?;
        let patch_type = self.patch_type.ok_or(BuildError::MissingPatchType)?;
        if patch_type
            .resulting_version()
            .is_some_and(|v| v.trim().is_empty())
        {
            return Err(BuildError::MissingResultingVersion);
        }
        if let Some(element_id) = self.elements.iter().find_map(|source| match source {
            ElementSource::Prebuilt(element) => element
                .patch_type
                .as_ref()
                .and_then(PatchType::resulting_version)
                .is_some_and(|v| v.trim().is_empty())
                .then(|| element.element_id.clone()),
            ElementSource::Builder(_) => None,
        }) {
            return Err(BuildError::ElementMissingResultingVersion { element_id });
        }

        let elements: Vec<_> = self
            .elements
            .into_iter()
            .map(|source| resolve(source, &patch_type))
            .collect();

        debug!(
            patch_id = %patch_id,
            identity = %identity,
            patch_type = %patch_type,
            modifications = self.modifications.len(),
            elements = elements.len(),
            "froze patch"
        );

        Ok(Patch::new(
            patch_id,
            self.description,
            identity,
            patch_type,
            self.modifications,
            elements,
        ))
    }

    /// Validate and freeze, treating a missing required field as a programmer error.
    ///
    /// # Panics
    ///
    /// On any [`BuildError`] that [`try_build`](Self::try_build) would return: identity, patch id
    /// or classification unset (blank values count as unset), an upgrade without a resulting
    /// version on the patch or a pre-classified element, or a legacy applies-to list that was
    /// not exactly one version.
    pub fn build(self) -> Patch {
        match self.try_build() {
            Ok(patch) => patch,
            Err(err) => panic!("patch builder precondition violated: {err}"),
        }
    }
}

impl ModificationTarget for PatchBuilder {
    fn push_modification(&mut self, modification: ContentModification) {
        self.modifications.push(modification);
    }

    fn modifications(&self) -> &[ContentModification] {
        &self.modifications
    }
}
