use crate::node::node_model::TreeNode;
use crate::node::walk::NodePath;

/// Stable structural identity for a node inside a tree.
///
/// The identity is a readable path built from node names where present and
/// child indices where not, prefixed with the node's kind, e.g.
/// `input:record/fields/idx:2/name`. Identities key per-node state records
/// and survive value edits; they change only when the tree's shape changes
/// above the node.
pub fn node_identity<N: TreeNode>(root: &N, path: &NodePath) -> Option<String> {
    let mut segments = vec![root.name().unwrap_or("root").to_string()];
    let mut node = root;

    for &idx in path {
        node = node.children().get(idx)?;
        segments.push(match node.name() {
            Some(name) => name.to_string(),
            None => format!("idx:{}", idx),
        });
    }

    let kind = if node.is_input() { "input" } else { "group" };
    Some(format!("{}:{}", kind, segments.join("/")))
}

/// Hex SHA-1 digest of a text payload. Used wherever a value must be
/// referenced without embedding it, e.g. scalar payloads in trace events.
pub fn value_fingerprint(text: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
