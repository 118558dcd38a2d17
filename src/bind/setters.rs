use serde_json::Value;

use crate::bind::binder::Binder;
use crate::bind::error::BindError;
use crate::node::node_model::TreeNode;
use crate::node::walk::{descend_mut, named_index};

/// Undefined-role behavior: input leaves take the raw scalar, anything else
/// is treated as an object.
pub fn set_base<N: TreeNode + 'static>(
    binder: &Binder<N>,
    node: &mut N,
    value: &Value,
) -> Result<(), BindError> {
    if node.is_input() {
        node.write_scalar(value)
            .map_err(|source| BindError::ScalarWrite {
                node: node.label(),
                source,
            })
    } else {
        binder.invoke_setter("object", node, value)
    }
}

/// `object` role: keys matching a named descendant deserialize into it;
/// unmatched keys are ignored so documents can carry fields the tree does
/// not know about. Duplicate names write to the first instance only,
/// matching the getter.
pub fn set_object<N: TreeNode + 'static>(
    binder: &Binder<N>,
    node: &mut N,
    value: &Value,
) -> Result<(), BindError> {
    let entries = value.as_object().ok_or_else(|| BindError::ValueShape {
        node: node.label(),
        expected: "object",
        found: json_kind(value),
    })?;

    let index = named_index(&*node);

    for (key, item) in entries {
        if let Some(path) = index.get(key) {
            // Paths stop at named boundaries, and recursion only mutates at
            // or below those boundaries, so the index stays valid.
            if let Some(child) = descend_mut(node, path) {
                binder.deserialize(child, item)?;
            }
        }
    }

    Ok(())
}

/// `list` role: existing children are replaced by one template clone per
/// array element, populated in input order. The swap happens only after
/// every element deserialized, so a failing element leaves the list as it
/// was.
pub fn set_list<N: TreeNode + 'static>(
    binder: &Binder<N>,
    node: &mut N,
    value: &Value,
) -> Result<(), BindError> {
    let items = value.as_array().ok_or_else(|| BindError::ValueShape {
        node: node.label(),
        expected: "array",
        found: json_kind(value),
    })?;

    if items.is_empty() {
        node.children_mut().clear();
        return Ok(());
    }

    let template = node
        .item_template()
        .cloned()
        .ok_or_else(|| BindError::MissingTemplate {
            node: node.label(),
        })?;

    let mut fresh = Vec::with_capacity(items.len());
    for item in items {
        let mut clone = template.clone();
        binder.deserialize(&mut clone, item)?;
        fresh.push(clone);
    }

    *node.children_mut() = fresh;
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
