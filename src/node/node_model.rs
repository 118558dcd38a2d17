use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Capability surface the binder needs from a tree provider.
///
/// The provider owns the tree; the binder only reads attributes, walks
/// children, reads and writes scalar leaves, and clones item templates when
/// rebuilding lists. Host layers wrapping a real widget toolkit implement
/// this over their own node handles.
pub trait TreeNode: Clone {
    /// Space-separated role tags, most specific first.
    fn role(&self) -> Option<&str>;

    /// Identifier among siblings; named nodes become object keys.
    fn name(&self) -> Option<&str>;

    /// Whether this node is a scalar-carrying input leaf.
    fn is_input(&self) -> bool;

    fn children(&self) -> &[Self];

    fn children_mut(&mut self) -> &mut Vec<Self>;

    /// Prototype cloned per element when populating a list node.
    fn item_template(&self) -> Option<&Self>;

    fn read_scalar(&self) -> Result<Value, ScalarError>;

    fn write_scalar(&mut self, value: &Value) -> Result<(), ScalarError>;

    /// Short label for error messages and trace events.
    fn label(&self) -> String {
        match (self.name(), self.role()) {
            (Some(name), _) => name.to_string(),
            (None, Some(role)) => format!("<{}>", role),
            (None, None) => "<anonymous>".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarError {
    /// The node does not carry a scalar value
    NotAnInput { label: String },

    /// The node's embedded data could not be read or written
    Malformed { label: String, detail: String },
}

impl fmt::Display for ScalarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarError::NotAnInput { label } => {
                write!(f, "'{}' is not an input leaf", label)
            }
            ScalarError::Malformed { label, detail } => {
                write!(f, "malformed value on '{}': {}", label, detail)
            }
        }
    }
}

impl std::error::Error for ScalarError {}

/// The crate's own widget tree.
///
/// Trees are plain data and deserialize directly from YAML or JSON schema
/// files, so a form layout can be described in a file and bound without any
/// toolkit in the loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Input leaves carry a scalar `value`; everything else is a container.
    #[serde(default)]
    pub input: bool,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub value: Value,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WidgetNode>,

    /// Item prototype for `list`-role nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<Box<WidgetNode>>,
}

impl WidgetNode {
    /// A non-input container node.
    pub fn group() -> Self {
        WidgetNode {
            role: None,
            name: None,
            input: false,
            value: Value::Null,
            children: Vec::new(),
            template: None,
        }
    }

    /// A named input leaf with no value yet.
    pub fn input(name: impl Into<String>) -> Self {
        let mut node = Self::group();
        node.name = Some(name.into());
        node.input = true;
        node
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = value;
        self
    }

    pub fn with_child(mut self, child: WidgetNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_template(mut self, template: WidgetNode) -> Self {
        self.template = Some(Box::new(template));
        self
    }
}

impl TreeNode for WidgetNode {
    fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn is_input(&self) -> bool {
        self.input
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Self> {
        &mut self.children
    }

    fn item_template(&self) -> Option<&Self> {
        self.template.as_deref()
    }

    fn read_scalar(&self) -> Result<Value, ScalarError> {
        if !self.input {
            return Err(ScalarError::NotAnInput {
                label: self.label(),
            });
        }
        Ok(self.value.clone())
    }

    fn write_scalar(&mut self, value: &Value) -> Result<(), ScalarError> {
        if !self.input {
            return Err(ScalarError::NotAnInput {
                label: self.label(),
            });
        }
        self.value = value.clone();
        Ok(())
    }
}
