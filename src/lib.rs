use serde_json::Value;

use crate::bind::binder::Binder;
use crate::bind::error::BindError;
use crate::node::node_model::WidgetNode;

pub mod bind;
pub mod cli;
pub mod node;
pub mod role;
pub mod trace;
pub mod widget;

/// Apply `document` to `tree` in place and read back the resulting value,
/// using the stock role behaviors.
pub fn round_trip(tree: &mut WidgetNode, document: &Value) -> Result<Value, BindError> {
    let binder = Binder::new();
    binder.deserialize(tree, document)?;
    binder.serialize(tree)
}
