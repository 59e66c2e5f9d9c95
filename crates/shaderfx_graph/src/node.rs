// SPDX-License-Identifier: MIT OR Apache-2.0
//! Property proxy for a single host node.
//!
//! A [`Node`] caches the node's property schema (name to type tag) and both
//! plug indices when it is constructed, then turns `get`/`set` into single
//! host round-trips. Group nodes carry their end node and expose its outputs
//! in place of their own.

use crate::channel::{Command, Session};
use crate::error::{GraphError, Result};
use crate::plug::{Direction, PlugIndex};
use crate::value::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Properties whose type query fails on the host, with the tag to use instead
pub const TYPE_FALLBACKS: &[(&str, &str)] = &[("defaultvectwo", "float2"), ("defaultvectthree", "float3")];

/// Property name to type tag
pub type PropertySchema = IndexMap<String, String>;

/// Host-assigned node identity, unique within one network
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Decode the identity returned by `command`
    pub(crate) fn from_reply(command: &Command, reply: Value) -> Result<Self> {
        match reply.as_int().and_then(|id| u32::try_from(id).ok()) {
            Some(id) if id > 0 => Ok(Self(id)),
            _ => Err(GraphError::UnexpectedReply {
                command: command.flag(),
                reply,
            }),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&Node> for NodeId {
    fn from(node: &Node) -> Self {
        node.id
    }
}

/// A wrapped host node
pub struct Node {
    id: NodeId,
    session: Session,
    properties: PropertySchema,
    inputs: Arc<PlugIndex>,
    outputs: Arc<PlugIndex>,
    end_node: Option<Box<Node>>,
}

impl Node {
    /// Wrap the node `id`, querying its schema and plugs
    pub fn new(session: &Session, id: NodeId) -> Result<Self> {
        let properties = query_schema(session, id)?;
        let inputs = PlugIndex::query(session, id, Direction::Input)?;
        let outputs = PlugIndex::query(session, id, Direction::Output)?;

        tracing::debug!(
            "Wrapped node {id}: {} properties, {} inputs, {} outputs",
            properties.len(),
            inputs.len(),
            outputs.len()
        );

        Ok(Self {
            id,
            session: session.clone(),
            properties,
            inputs: Arc::new(inputs),
            outputs: Arc::new(outputs),
            end_node: None,
        })
    }

    /// Wrap the group start node `id` together with its end node.
    ///
    /// Group nodes misreport their own output sockets; the real ones live on
    /// the end node, whose output index replaces this node's.
    pub fn new_group(session: &Session, id: NodeId) -> Result<Self> {
        let mut node = Self::new(session, id)?;

        let command = Command::GroupEnd(id);
        let reply = session.call(&command)?;
        let end_node = Self::new(session, NodeId::from_reply(&command, reply)?)?;

        tracing::debug!("Group {id} delegates outputs to end node {}", end_node.id);
        node.outputs = Arc::clone(&end_node.outputs);
        node.end_node = Some(Box::new(end_node));
        Ok(node)
    }

    /// Host identity
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Session this node talks through
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current display class name, queried live
    pub fn type_name(&self) -> Result<String> {
        let command = Command::NodeClassName(self.id);
        match self.session.call(&command)? {
            Value::Text(name) => Ok(name),
            reply => Err(GraphError::UnexpectedReply {
                command: command.flag(),
                reply,
            }),
        }
    }

    /// Value of the `name` property as text
    pub fn name(&self) -> Result<String> {
        match self.get("name")? {
            Value::Text(name) => Ok(name),
            reply => Err(GraphError::UnexpectedReply {
                command: "gpv",
                reply,
            }),
        }
    }

    /// Cached property schema
    pub fn properties(&self) -> &PropertySchema {
        &self.properties
    }

    /// Whether the schema has a property called `name`
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Read a property.
    ///
    /// Names outside the cached schema fail with
    /// [`GraphError::PropertyNotFound`] without contacting the host.
    pub fn get(&self, name: &str) -> Result<Value> {
        let type_tag = self
            .properties
            .get(name)
            .ok_or_else(|| GraphError::PropertyNotFound {
                node: self.id,
                name: name.to_string(),
            })?;

        Ok(self.session.call(&Command::PropertyValue {
            node: self.id,
            name: name.to_string(),
            type_tag: type_tag.clone(),
        })?)
    }

    /// Write a property with the edit command for its cached type tag.
    ///
    /// A list value is spread into positional arguments. Names outside the
    /// cached schema are ignored, unlike [`Node::get`].
    pub fn set(&self, name: &str, value: impl Into<Value>) -> Result<()> {
        let Some(type_tag) = self.properties.get(name) else {
            tracing::trace!("Node {} has no property {name}; set ignored", self.id);
            return Ok(());
        };

        self.session.call(&Command::EditProperty {
            node: self.id,
            name: name.to_string(),
            type_tag: type_tag.clone(),
            args: value.into().spread(),
        })?;
        Ok(())
    }

    /// Input plugs
    pub fn inputs(&self) -> &Arc<PlugIndex> {
        &self.inputs
    }

    /// Output plugs; for a group these are the end node's
    pub fn outputs(&self) -> &Arc<PlugIndex> {
        &self.outputs
    }

    /// Whether this node is a group start node
    pub fn is_group(&self) -> bool {
        self.end_node.is_some()
    }

    /// The end node of a group
    pub fn end_node(&self) -> Option<&Node> {
        self.end_node.as_deref()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("graph", &self.session.graph())
            .field("group", &self.is_group())
            .finish()
    }
}

fn query_schema(session: &Session, node: NodeId) -> Result<PropertySchema> {
    let command = Command::ListProperties(node);
    let reply = session.call(&command)?;
    let names = reply
        .clone()
        .into_names()
        .ok_or(GraphError::UnexpectedReply {
            command: command.flag(),
            reply,
        })?;

    let mut schema = PropertySchema::with_capacity(names.len());
    for name in names {
        let command = Command::PropertyType {
            node,
            name: name.clone(),
        };
        let type_tag = match session.call(&command) {
            Ok(Value::Text(tag)) => tag,
            Ok(reply) => {
                return Err(GraphError::UnexpectedReply {
                    command: command.flag(),
                    reply,
                })
            }
            Err(e) => match fallback_type(&name) {
                Some(tag) => {
                    tracing::debug!("Node {node} property {name} has no reported type, using {tag}");
                    tag.to_string()
                }
                None => return Err(e.into()),
            },
        };
        schema.insert(name, type_tag);
    }
    Ok(schema)
}

fn fallback_type(property: &str) -> Option<&'static str> {
    TYPE_FALLBACKS
        .iter()
        .find(|(name, _)| *name == property)
        .map(|(_, tag)| *tag)
}
