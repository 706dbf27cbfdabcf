use patchmeta_types::{
    ContentHash, ContentItem, ContentModification, ModificationType, PatchType, PrebuiltElement,
};
use pretty_assertions::assert_eq;

#[test]
fn patch_type_serializes_with_type_tag() {
    let upgrade = serde_json::to_value(PatchType::upgrade("1.1")).expect("serialize");
    let one_off = serde_json::to_value(PatchType::OneOff).expect("serialize");

    assert_eq!(
        upgrade,
        serde_json::json!({ "type": "upgrade", "resulting_version": "1.1" })
    );
    assert_eq!(one_off, serde_json::json!({ "type": "one_off" }));
}

#[test]
fn patch_type_parses_from_tagged_form() {
    let parsed: PatchType =
        serde_json::from_str(r#"{ "type": "upgrade", "resulting_version": "2.0" }"#)
            .expect("parse upgrade");
    assert_eq!(parsed, PatchType::upgrade("2.0"));

    let parsed: PatchType = serde_json::from_str(r#"{ "type": "one_off" }"#).expect("parse");
    assert_eq!(parsed, PatchType::OneOff);
}

#[test]
fn content_modification_omits_absent_hashes() {
    let m = ContentModification::add(
        ContentItem::module("org.example.core", "main"),
        ContentHash::from_hex("aa"),
    );

    let value = serde_json::to_value(&m).expect("serialize");
    assert_eq!(value["kind"], "add");
    assert_eq!(value["item"]["type"], "module");
    assert_eq!(value["item"]["name"], "org.example.core");
    assert_eq!(value["content_hash"], "aa");
    assert!(value.get("target_hash").is_none());
}

#[test]
fn misc_item_defaults_path_and_directory_flag() {
    let raw = r#"{
        "item": { "type": "misc", "name": "README.txt" },
        "kind": "remove",
        "target_hash": "bb"
    }"#;

    let m: ContentModification = serde_json::from_str(raw).expect("parse modification");
    assert_eq!(m.kind, ModificationType::Remove);
    assert_eq!(m.item, ContentItem::misc("README.txt", vec![], false));
    assert!(m.content_hash.is_none());
}

#[test]
fn prebuilt_element_defaults_missing_fields() {
    let raw = r#"{ "element_id": "e1", "layer_name": "base" }"#;

    let element: PrebuiltElement = serde_json::from_str(raw).expect("parse element");
    assert_eq!(element, PrebuiltElement::new("e1", "base", false));
    assert!(!element.is_classified());
    assert!(element.modifications.is_empty());
}

#[test]
fn prebuilt_element_skips_unset_patch_type() {
    let element = PrebuiltElement::new("e1", "base", true);
    let value = serde_json::to_value(&element).expect("serialize");
    assert!(value.get("patch_type").is_none());
    assert_eq!(value["add_on"], true);

    let value = serde_json::to_value(element.with_no_upgrade()).expect("serialize");
    assert_eq!(value["patch_type"]["type"], "one_off");
}
