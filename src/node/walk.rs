use std::collections::HashMap;

use crate::node::node_model::TreeNode;

/// Child-index path from a root node down to one of its descendants.
pub type NodePath = Vec<usize>;

/// Named descendants of `node` in document order, stopping at each named
/// node: a named descendant is collected but never walked into, so nested
/// named structure stays owned by the node that carries the name.
///
/// The node itself is never collected, only descendants.
pub fn named_descendants<N: TreeNode>(node: &N) -> Vec<(String, NodePath, &N)> {
    let mut found = Vec::new();
    collect(node, &mut Vec::new(), &mut found);
    found
}

fn collect<'a, N: TreeNode>(
    node: &'a N,
    prefix: &mut NodePath,
    found: &mut Vec<(String, NodePath, &'a N)>,
) {
    for (idx, child) in node.children().iter().enumerate() {
        prefix.push(idx);
        if let Some(name) = child.name() {
            found.push((name.to_string(), prefix.clone(), child));
        } else {
            collect(child, prefix, found);
        }
        prefix.pop();
    }
}

/// Name -> path index over the named descendants of `node`. Duplicate names
/// keep the first (document-order) instance.
pub fn named_index<N: TreeNode>(node: &N) -> HashMap<String, NodePath> {
    let mut index = HashMap::new();
    for (name, path, _) in named_descendants(node) {
        index.entry(name).or_insert(path);
    }
    index
}

/// Follow a child-index path to a mutable node reference.
pub fn descend_mut<'a, N: TreeNode>(root: &'a mut N, path: &NodePath) -> Option<&'a mut N> {
    let mut node = root;
    for &idx in path {
        node = node.children_mut().get_mut(idx)?;
    }
    Some(node)
}
