//! Rendering helpers (markdown) for human-readable patch summaries.

use patchmeta_builder::Patch;
use patchmeta_types::{ContentItem, ContentModification, ModificationType};

pub fn render_patch_md(patch: &Patch) -> String {
    let mut out = String::new();
    out.push_str(&format!("# patch {}\n\n", patch.patch_id()));
    out.push_str(&format!("- Identity: `{}`\n", patch.identity()));
    out.push_str(&format!("- Type: `{}`\n", patch.patch_type()));
    if let Some(version) = patch.resulting_version() {
        out.push_str(&format!("- Resulting version: `{}`\n", version));
    }
    out.push_str(&format!("- Applies to: {}\n", patch.applies_to().join(", ")));
    out.push_str(&format!(
        "- Modifications: {}\n- Elements: {}\n",
        patch.modifications().len(),
        patch.elements().len()
    ));
    if let Some(desc) = patch.description() {
        out.push_str(&format!("\n{}\n", desc));
    }

    out.push_str("\n## Modifications\n\n");
    render_modifications(&mut out, patch.modifications());

    out.push_str("\n## Elements\n\n");
    if patch.elements().is_empty() {
        out.push_str("_No elements._\n");
        return out;
    }

    for (i, element) in patch.elements().iter().enumerate() {
        out.push_str(&format!("### {}. {}\n\n", i + 1, element.element_id()));
        out.push_str(&format!("- Layer: `{}`\n", element.layer_name()));
        out.push_str(&format!("- Add-on: `{}`\n", element.is_add_on()));
        out.push_str(&format!("- Type: `{}`\n", element.patch_type()));
        if let Some(version) = element.resulting_version() {
            out.push_str(&format!("- Resulting version: `{}`\n", version));
        }
        out.push('\n');
        render_modifications(&mut out, element.modifications());
        out.push('\n');
    }

    out
}

fn render_modifications(out: &mut String, mods: &[ContentModification]) {
    if mods.is_empty() {
        out.push_str("_No modifications._\n");
        return;
    }
    for (i, m) in mods.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} {} `{}`\n",
            i + 1,
            kind_label(m.kind),
            item_label(&m.item),
            item_path(&m.item)
        ));
    }
}

fn kind_label(k: ModificationType) -> &'static str {
    match k {
        ModificationType::Add => "add",
        ModificationType::Modify => "modify",
        ModificationType::Remove => "remove",
    }
}

fn item_label(item: &ContentItem) -> &'static str {
    match item {
        ContentItem::Module { .. } => "module",
        ContentItem::Bundle { .. } => "bundle",
        ContentItem::Misc { .. } => "file",
    }
}

fn item_path(item: &ContentItem) -> String {
    match item {
        ContentItem::Module { name, slot } | ContentItem::Bundle { name, slot } => {
            format!("{}:{}", name, slot)
        }
        ContentItem::Misc { name, path, .. } => {
            let mut parts = path.clone();
            parts.push(name.clone());
            parts.join("/")
        }
    }
}
