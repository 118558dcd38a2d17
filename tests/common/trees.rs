use form_binding::node::node_model::WidgetNode;
use serde_json::{Value, json};

/// Unnamed form wrapper: a named input at the top level plus one nested
/// under an unnamed fieldset.
pub fn contact_form() -> WidgetNode {
    WidgetNode::group()
        .with_child(WidgetNode::input("email").with_value(json!("ben@example.org")))
        .with_child(
            WidgetNode::group().with_child(WidgetNode::input("city").with_value(json!("Graz"))),
        )
}

/// Record editor: named inputs plus a list of field groups, the shape of a
/// small schema-editing form.
pub fn record_editor() -> WidgetNode {
    WidgetNode::group()
        .with_child(WidgetNode::input("name"))
        .with_child(WidgetNode::input("type").with_value(json!("record")))
        .with_child(
            WidgetNode::group()
                .with_name("fields")
                .with_role("list")
                .with_template(field_template()),
        )
}

/// One list item: a group holding name/type inputs.
pub fn field_template() -> WidgetNode {
    WidgetNode::group()
        .with_child(WidgetNode::input("name"))
        .with_child(WidgetNode::input("type"))
}

/// Unnamed input leaf carrying a value, for list items.
pub fn item(value: Value) -> WidgetNode {
    let mut node = WidgetNode::group();
    node.input = true;
    node.value = value;
    node
}

pub fn sample_record() -> Value {
    json!({
        "name": "person",
        "type": "record",
        "fields": [
            { "name": "id", "type": "long" },
            { "name": "email", "type": "string" }
        ]
    })
}
