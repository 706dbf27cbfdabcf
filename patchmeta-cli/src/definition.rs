//! Patch definition files: the TOML input `build` and `check` turn into a builder.

use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;
use patchmeta_builder::{ModificationTarget, PatchBuilder};
use patchmeta_types::{ContentModification, PatchType, PrebuiltElement};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatchDefinition {
    pub patch_id: Option<String>,
    pub description: Option<String>,
    pub identity: Option<IdentityDefinition>,
    pub patch_type: Option<PatchType>,

    #[serde(default)]
    pub modifications: Vec<ContentModification>,

    #[serde(default)]
    pub elements: Vec<PrebuiltElement>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentityDefinition {
    /// Falls back to the configured product name, then to "".
    pub name: Option<String>,
    pub version: String,
}

pub fn load_definition(path: &Utf8Path) -> anyhow::Result<PatchDefinition> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read definition {}", path))?;
    parse_definition(&contents).with_context(|| format!("parse definition {}", path))
}

pub fn parse_definition(contents: &str) -> anyhow::Result<PatchDefinition> {
    let def: PatchDefinition = toml::from_str(contents).context("invalid TOML")?;
    Ok(def)
}

impl PatchDefinition {
    /// Feed the definition into a fresh builder. Nothing is validated here; that is `try_build`'s
    /// job.
    pub fn into_builder(self, product_name: Option<&str>) -> PatchBuilder {
        let mut builder = PatchBuilder::new();

        if let Some(id) = self.patch_id {
            builder = builder.set_patch_id(id);
        }
        if let Some(desc) = self.description {
            builder = builder.set_description(desc);
        }
        if let Some(identity) = self.identity {
            let name = identity
                .name
                .or_else(|| product_name.map(str::to_string))
                .unwrap_or_default();
            builder = builder.set_identity(name, identity.version);
        }
        builder = match self.patch_type {
            Some(PatchType::Upgrade { resulting_version }) => builder.set_upgrade(resulting_version),
            Some(PatchType::OneOff) => builder.set_no_upgrade(),
            None => builder,
        };

        debug!(
            modifications = self.modifications.len(),
            elements = self.elements.len(),
            "loaded patch definition"
        );

        for m in self.modifications {
            builder = builder.add_content_modification(m);
        }
        for element in self.elements {
            builder = builder.add_prebuilt_element(element);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patchmeta_builder::BuildError;
    use patchmeta_types::{ContentItem, ModificationType};

    const FULL: &str = r#"
patch_id = "p1"
description = "first patch"

[identity]
name = "base"
version = "1.0"

[patch_type]
type = "upgrade"
resulting_version = "1.1"

[[modifications]]
kind = "add"
content_hash = "aa"
item = { type = "module", name = "org.example", slot = "main" }

[[elements]]
element_id = "e1"
layer_name = "core"

[[elements.modifications]]
kind = "remove"
target_hash = "bb"
item = { type = "misc", name = "README.txt", path = ["docs"] }

[[elements]]
element_id = "e2"
layer_name = "addons"
add_on = true
patch_type = { type = "one_off" }
"#;

    #[test]
    fn full_definition_builds() {
        let patch = parse_definition(FULL)
            .expect("parse")
            .into_builder(None)
            .try_build()
            .expect("build");

        assert_eq!(patch.patch_id(), "p1");
        assert_eq!(patch.identity().name(), "base");
        assert_eq!(patch.resulting_version(), Some("1.1"));
        assert_eq!(patch.modifications().len(), 1);
        assert_eq!(
            patch.modifications()[0].item,
            ContentItem::module("org.example", "main")
        );

        let elements = patch.elements();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].patch_type(), &PatchType::upgrade("1.1"));
        assert_eq!(elements[0].modifications()[0].kind, ModificationType::Remove);
        assert_eq!(elements[1].patch_type(), &PatchType::OneOff);
        assert!(elements[1].is_add_on());
    }

    #[test]
    fn product_name_fills_missing_identity_name() {
        let def = parse_definition(
            r#"
patch_id = "p1"
identity = { version = "1.0" }
patch_type = { type = "one_off" }
"#,
        )
        .expect("parse");

        let patch = def.clone().into_builder(Some("product")).build();
        assert_eq!(patch.identity().name(), "product");

        let patch = def.into_builder(None).build();
        assert_eq!(patch.identity().name(), "");
    }

    #[test]
    fn missing_fields_surface_as_build_errors() {
        let def = parse_definition("patch_id = \"p1\"\n").expect("parse");
        let err = def.into_builder(None).try_build().expect_err("no identity");
        assert_eq!(err, BuildError::MissingIdentity);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse_definition("patch_idd = \"p1\"\n").expect_err("typo");
        assert!(err.to_string().contains("invalid TOML"));
    }
}
