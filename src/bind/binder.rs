use serde_json::Value;

use crate::bind::error::BindError;
use crate::bind::{getters, setters};
use crate::node::node_model::TreeNode;
use crate::role::registry::{DispatchError, RoleRegistry};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::{BindDirection, BindEvent};

/// Reads a node's state into a JSON value. Receives the binder so it can
/// dispatch again for children or delegate to a sibling role.
pub type Getter<N> = Box<dyn Fn(&Binder<N>, &N) -> Result<Value, BindError> + Send + Sync>;

/// Writes a JSON value into a node's state.
pub type Setter<N> =
    Box<dyn Fn(&Binder<N>, &mut N, &Value) -> Result<(), BindError> + Send + Sync>;

/// Maps a widget tree to and from a JSON value tree, dispatching per-node
/// behavior over two role registries: one per direction.
///
/// Out of the box three behaviors are registered each way: `object` (named
/// descendants become keys), `list` (children become array elements), and
/// the undefined-role base behavior (input leaves carry their raw scalar,
/// anything else is treated as an object). Custom roles can be added per
/// direction with [`Binder::define_getter`] and [`Binder::define_setter`].
pub struct Binder<N: TreeNode> {
    getters: RoleRegistry<Getter<N>>,
    setters: RoleRegistry<Setter<N>>,
    tracer: Option<TraceLogger>,
}

impl<N: TreeNode + 'static> Binder<N> {
    pub fn new() -> Self {
        let mut getter_registry: RoleRegistry<Getter<N>> =
            RoleRegistry::with_default(Box::new(getters::get_base::<N>));
        getter_registry.define("object", Box::new(getters::get_object::<N>) as Getter<N>);
        getter_registry.define("list", Box::new(getters::get_list::<N>) as Getter<N>);

        let mut setter_registry: RoleRegistry<Setter<N>> =
            RoleRegistry::with_default(Box::new(setters::set_base::<N>));
        setter_registry.define("object", Box::new(setters::set_object::<N>) as Setter<N>);
        setter_registry.define("list", Box::new(setters::set_list::<N>) as Setter<N>);

        Binder {
            getters: getter_registry,
            setters: setter_registry,
            tracer: None,
        }
    }

    /// Log every dispatch as a JSONL event through `tracer`.
    pub fn with_tracer(mut self, tracer: TraceLogger) -> Self {
        self.tracer = Some(tracer);
        self
    }

    /// Register a getter for a role tag, replacing any previous one.
    pub fn define_getter(&mut self, tag: impl Into<String>, getter: Getter<N>) {
        self.getters.define(tag, getter);
    }

    /// Register a setter for a role tag, replacing any previous one.
    pub fn define_setter(&mut self, tag: impl Into<String>, setter: Setter<N>) {
        self.setters.define(tag, setter);
    }

    /// Read the tree rooted at `node` into a JSON value.
    pub fn serialize(&self, node: &N) -> Result<Value, BindError> {
        let handler = self.getters.resolve(node.role())?;
        let value = handler(self, node)?;

        if let Some(tracer) = &self.tracer {
            let tag = resolved_tag(&self.getters, node.role());
            tracer.log(
                &BindEvent::now(BindDirection::Get, node.label(), node.role(), tag)
                    .with_scalar(&value),
            );
        }

        Ok(value)
    }

    /// Write a JSON value into the tree rooted at `node`, in place.
    pub fn deserialize(&self, node: &mut N, value: &Value) -> Result<(), BindError> {
        let handler = self.setters.resolve(node.role())?;

        if let Some(tracer) = &self.tracer {
            let tag = resolved_tag(&self.setters, node.role());
            tracer.log(
                &BindEvent::now(BindDirection::Set, node.label(), node.role(), tag)
                    .with_scalar(value),
            );
        }

        handler(self, node, value)
    }

    /// Invoke the getter registered under an exact tag, bypassing role
    /// resolution. This is the "dispatch again" capability handlers use to
    /// delegate to a sibling role, e.g. the base behavior deferring to
    /// whatever `object` getter is currently registered.
    pub fn invoke_getter(&self, tag: &str, node: &N) -> Result<Value, BindError> {
        let handler = self
            .getters
            .get(tag)
            .ok_or_else(|| DispatchError::UnknownTag {
                tag: tag.to_string(),
            })?;
        handler(self, node)
    }

    /// Invoke the setter registered under an exact tag, bypassing role
    /// resolution.
    pub fn invoke_setter(&self, tag: &str, node: &mut N, value: &Value) -> Result<(), BindError> {
        let handler = self
            .setters
            .get(tag)
            .ok_or_else(|| DispatchError::UnknownTag {
                tag: tag.to_string(),
            })?;
        handler(self, node, value)
    }
}

impl<N: TreeNode + 'static> Default for Binder<N> {
    fn default() -> Self {
        Self::new()
    }
}

fn resolved_tag<H>(registry: &RoleRegistry<H>, role: Option<&str>) -> String {
    match role {
        None => "default".to_string(),
        Some(role) => registry
            .cached_resolution(role)
            .flatten()
            .unwrap_or_else(|| "default".to_string()),
    }
}
