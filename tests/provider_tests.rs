//! Binding over a custom tree provider: leaves hold raw JSON text that is
//! parsed on read, so scalar reads can genuinely fail.

use form_binding::bind::binder::Binder;
use form_binding::bind::error::BindError;
use form_binding::node::node_model::{ScalarError, TreeNode};
use serde_json::{Value, json};

#[derive(Clone)]
struct RawNode {
    name: Option<String>,
    /// Raw JSON text; `Some` marks the node as an input leaf.
    raw: Option<String>,
    children: Vec<RawNode>,
}

impl RawNode {
    fn group(children: Vec<RawNode>) -> Self {
        RawNode {
            name: None,
            raw: None,
            children,
        }
    }

    fn leaf(name: &str, raw: &str) -> Self {
        RawNode {
            name: Some(name.to_string()),
            raw: Some(raw.to_string()),
            children: Vec::new(),
        }
    }
}

impl TreeNode for RawNode {
    fn role(&self) -> Option<&str> {
        None
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn is_input(&self) -> bool {
        self.raw.is_some()
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Self> {
        &mut self.children
    }

    fn item_template(&self) -> Option<&Self> {
        None
    }

    fn read_scalar(&self) -> Result<Value, ScalarError> {
        let Some(raw) = &self.raw else {
            return Err(ScalarError::NotAnInput {
                label: self.label(),
            });
        };
        serde_json::from_str(raw).map_err(|e| ScalarError::Malformed {
            label: self.label(),
            detail: e.to_string(),
        })
    }

    fn write_scalar(&mut self, value: &Value) -> Result<(), ScalarError> {
        if self.raw.is_none() {
            return Err(ScalarError::NotAnInput {
                label: self.label(),
            });
        }
        self.raw = Some(value.to_string());
        Ok(())
    }
}

#[test]
fn custom_provider_serializes_parsed_leaves() {
    let tree = RawNode::group(vec![
        RawNode::leaf("count", "42"),
        RawNode::leaf("label", "\"hi\""),
    ]);

    let binder = Binder::new();
    assert_eq!(
        binder.serialize(&tree).unwrap(),
        json!({ "count": 42, "label": "hi" })
    );
}

#[test]
fn custom_provider_round_trips_writes() {
    let mut tree = RawNode::group(vec![RawNode::leaf("count", "0")]);
    let binder = Binder::new();

    binder
        .deserialize(&mut tree, &json!({ "count": 7 }))
        .unwrap();

    assert_eq!(binder.serialize(&tree).unwrap(), json!({ "count": 7 }));
}

#[test]
fn malformed_leaf_surfaces_a_read_error() {
    // The broken leaf sits one unnamed level down, so the failure has to
    // travel up through the recursive walk unchanged.
    let tree = RawNode::group(vec![RawNode::group(vec![RawNode::leaf(
        "broken",
        "not json at all",
    )])]);

    let binder = Binder::new();
    let result = binder.serialize(&tree);

    match result {
        Err(BindError::ScalarRead { node, source }) => {
            assert_eq!(node, "broken");
            assert!(matches!(source, ScalarError::Malformed { .. }));
        }
        other => panic!("expected a scalar read error, got {:?}", other),
    }
}
