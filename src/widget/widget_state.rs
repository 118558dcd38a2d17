use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Owned per-node state records for one widget feature, keyed by structural
/// node identity (see [`crate::node::identity::node_identity`]).
///
/// Instance-per-element widget state lives here instead of on the nodes
/// themselves: the tree stays plain data, and a feature attaches whatever
/// record type it needs under its own set.
pub struct WidgetSet<S> {
    name: String,
    records: HashMap<String, S>,
}

impl<S> WidgetSet<S> {
    pub fn new(name: impl Into<String>) -> Self {
        WidgetSet {
            name: name.into(),
            records: HashMap::new(),
        }
    }

    /// The feature name this set belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create a record for `id` unless one already exists. Returns `false`
    /// when a record was already present; the existing record is untouched.
    pub fn create_with(&mut self, id: impl Into<String>, init: impl FnOnce() -> S) -> bool {
        match self.records.entry(id.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(init());
                true
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&S> {
        self.records.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut S> {
        self.records.get_mut(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<S> {
        self.records.remove(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
