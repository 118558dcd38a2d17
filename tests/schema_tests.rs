use form_binding::node::node_model::WidgetNode;
use form_binding::round_trip;
use serde_json::json;

use crate::common::utils::fixture;

mod common;

#[test]
fn tree_description_loads_from_yaml() {
    let yaml = r#"
children:
  - name: email
    input: true
  - name: address
    children:
      - name: city
        input: true
        value: Graz
"#;

    let tree: WidgetNode = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(tree.children.len(), 2);
    assert_eq!(tree.children[0].name.as_deref(), Some("email"));
    assert!(tree.children[0].input);
    assert_eq!(tree.children[1].children[0].value, json!("Graz"));
}

#[test]
fn template_loads_from_yaml() {
    let yaml = r#"
role: list
template:
  children:
    - name: entry
      input: true
"#;

    let tree: WidgetNode = serde_yaml::from_str(yaml).unwrap();
    let template = tree.template.as_deref().expect("template present");

    assert_eq!(template.children[0].name.as_deref(), Some("entry"));
}

#[test]
fn fixture_schema_round_trips_its_document() {
    let schema = std::fs::read_to_string(fixture("record.yaml")).unwrap();
    let document = std::fs::read_to_string(fixture("record.json")).unwrap();

    let mut tree: WidgetNode = serde_yaml::from_str(&schema).unwrap();
    let document: serde_json::Value = serde_json::from_str(&document).unwrap();

    let readback = round_trip(&mut tree, &document).unwrap();
    assert_eq!(readback, document);
}

#[test]
fn loaded_tree_serializes_back_to_equivalent_yaml() {
    let yaml = "children:\n- name: email\n  input: true\n";
    let tree: WidgetNode = serde_yaml::from_str(yaml).unwrap();

    let rendered = serde_yaml::to_string(&tree).unwrap();
    let reloaded: WidgetNode = serde_yaml::from_str(&rendered).unwrap();

    assert_eq!(tree, reloaded);
}
