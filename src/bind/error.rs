use std::fmt;

use crate::node::node_model::ScalarError;
use crate::role::registry::DispatchError;

#[derive(Debug, Clone, PartialEq)]
pub enum BindError {
    /// Role resolution produced no handler
    Dispatch(DispatchError),

    /// A leaf value could not be read while serializing
    ScalarRead { node: String, source: ScalarError },

    /// A leaf value could not be written while deserializing
    ScalarWrite { node: String, source: ScalarError },

    /// A list node was asked to populate data but has no item template
    MissingTemplate { node: String },

    /// The JSON shape of the value contradicts the node's role
    ValueShape {
        node: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::Dispatch(source) => {
                write!(f, "dispatch failed: {}", source)
            }
            BindError::ScalarRead { node, source } => {
                write!(f, "cannot read value of '{}': {}", node, source)
            }
            BindError::ScalarWrite { node, source } => {
                write!(f, "cannot write value of '{}': {}", node, source)
            }
            BindError::MissingTemplate { node } => {
                write!(f, "list '{}' has no item template to clone", node)
            }
            BindError::ValueShape {
                node,
                expected,
                found,
            } => {
                write!(f, "'{}' expects a JSON {}, got {}", node, expected, found)
            }
        }
    }
}

impl std::error::Error for BindError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BindError::Dispatch(source) => Some(source),
            BindError::ScalarRead { source, .. } => Some(source),
            BindError::ScalarWrite { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<DispatchError> for BindError {
    fn from(source: DispatchError) -> Self {
        BindError::Dispatch(source)
    }
}
