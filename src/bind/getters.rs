use serde_json::{Map, Value};

use crate::bind::binder::Binder;
use crate::bind::error::BindError;
use crate::node::node_model::TreeNode;
use crate::node::walk::named_descendants;

/// Undefined-role behavior: input leaves read their raw scalar, anything
/// else is treated as an object.
pub fn get_base<N: TreeNode + 'static>(binder: &Binder<N>, node: &N) -> Result<Value, BindError> {
    if node.is_input() {
        node.read_scalar().map_err(|source| BindError::ScalarRead {
            node: node.label(),
            source,
        })
    } else {
        binder.invoke_getter("object", node)
    }
}

/// `object` role: each named descendant (shallow boundary, document order)
/// becomes a key. Duplicate names keep the first instance.
pub fn get_object<N: TreeNode + 'static>(binder: &Binder<N>, node: &N) -> Result<Value, BindError> {
    let mut object = Map::new();

    for (name, _, child) in named_descendants(node) {
        if object.contains_key(&name) {
            continue;
        }
        object.insert(name, binder.serialize(child)?);
    }

    Ok(Value::Object(object))
}

/// `list` role: direct children in order become array elements.
pub fn get_list<N: TreeNode + 'static>(binder: &Binder<N>, node: &N) -> Result<Value, BindError> {
    let mut items = Vec::with_capacity(node.children().len());

    for child in node.children() {
        items.push(binder.serialize(child)?);
    }

    Ok(Value::Array(items))
}
