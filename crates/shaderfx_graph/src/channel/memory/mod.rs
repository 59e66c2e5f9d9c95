// SPDX-License-Identifier: MIT OR Apache-2.0
//! In-process simulation of the host.
//!
//! [`MemoryHost`] answers [`Command`]s against serializable [`HostGraph`]s
//! with the host's observable quirks: sparse ids, group start nodes that
//! misreport their outputs, two properties whose type query fails, per-socket
//! swizzle state, single-valued inputs and silent rejection of graph files
//! of the other flavor. It records every command it receives.

pub mod template;

use super::{Command, CommandChannel};
use crate::catalog::{parse_group_identifier, Catalog, Flavor};
use crate::error::ChannelError;
use crate::node::NodeId;
use crate::plug::{Direction, Plug};
use crate::value::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

fn reported() -> bool {
    true
}

/// A property as the host stores it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostProperty {
    /// Type tag; also selects the edit flag
    pub type_tag: String,
    /// Whether the type query answers for this property
    #[serde(default = "reported")]
    pub reports_type: bool,
    /// Current value
    pub value: Value,
}

impl HostProperty {
    /// A property with a working type query
    pub fn new(type_tag: &str, value: Value) -> Self {
        Self {
            type_tag: type_tag.to_string(),
            reports_type: true,
            value,
        }
    }

    /// A property whose type query fails
    pub fn unreported(type_tag: &str, value: Value) -> Self {
        Self {
            reports_type: false,
            ..Self::new(type_tag, value)
        }
    }
}

/// A node as the host stores it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostNode {
    /// Display class name
    pub class_name: String,
    /// Whether this is the start node of a group
    #[serde(default)]
    pub group_start: bool,
    /// End node linked to a group start node
    #[serde(default)]
    pub group_end: Option<u32>,
    /// Properties in listing order
    pub properties: IndexMap<String, HostProperty>,
    /// Input socket labels
    pub inputs: Vec<String>,
    /// Output socket labels
    pub outputs: Vec<String>,
    /// Swizzle per input socket index
    #[serde(default)]
    pub swizzles: BTreeMap<i64, String>,
}

impl HostNode {
    fn sockets(&self, direction: Direction) -> &[String] {
        match direction {
            Direction::Input => &self.inputs,
            Direction::Output => &self.outputs,
        }
    }

    fn active_socket(&self) -> i64 {
        self.properties
            .get("activesocket")
            .and_then(|p| p.value.as_int())
            .unwrap_or(0)
    }
}

/// One edge: `(node, output slot)` to `(node, input slot)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConnection {
    /// Output side
    pub from: (u32, usize),
    /// Input side
    pub to: (u32, usize),
}

impl HostConnection {
    fn involves(&self, id: u32) -> bool {
        self.from.0 == id || self.to.0 == id
    }

    fn endpoint(&self, direction: Direction) -> (u32, usize) {
        match direction {
            Direction::Input => self.to,
            Direction::Output => self.from,
        }
    }

    fn far_node(&self, direction: Direction) -> u32 {
        match direction {
            Direction::Input => self.from.0,
            Direction::Output => self.to.0,
        }
    }
}

/// The full state of one shader object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostGraph {
    /// Network flavor
    pub flavor: Flavor,
    /// Rendering root
    pub root: Option<u32>,
    /// Next identity to hand out
    pub next_id: u32,
    /// Nodes by identity
    pub nodes: BTreeMap<u32, HostNode>,
    /// Edges
    pub connections: Vec<HostConnection>,
}

impl HostGraph {
    /// An empty graph
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            root: None,
            next_id: 1,
            nodes: BTreeMap::new(),
            connections: Vec::new(),
        }
    }

    /// Serialize to RON, the format `loadGraph` reads
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Deserialize from RON
    pub fn from_ron(ron_str: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(ron_str)
    }

    /// Write a graph file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let content = self
            .to_ron()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }

    /// Store `node` under a fresh identity
    pub fn insert(&mut self, node: HostNode) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }

    fn node(&self, flag: &str, id: NodeId) -> Result<&HostNode, ChannelError> {
        self.nodes
            .get(&id.0)
            .ok_or_else(|| ChannelError::rejected(flag, format!("No node with id {id}")))
    }

    fn node_mut(&mut self, flag: &str, id: NodeId) -> Result<&mut HostNode, ChannelError> {
        self.nodes
            .get_mut(&id.0)
            .ok_or_else(|| ChannelError::rejected(flag, format!("No node with id {id}")))
    }

    fn check_socket(&self, flag: &str, plug: Plug, direction: Direction) -> Result<(), ChannelError> {
        let node = self.node(flag, plug.node)?;
        if plug.slot < node.sockets(direction).len() {
            Ok(())
        } else {
            Err(ChannelError::rejected(
                flag,
                format!("Node {} has no {direction} socket {}", plug.node, plug.slot),
            ))
        }
    }

    fn connections_at(&self, node: NodeId, direction: Direction, slot: usize) -> Vec<&HostConnection> {
        self.connections
            .iter()
            .filter(|c| c.endpoint(direction) == (node.0, slot))
            .collect()
    }

    /// Execute one command
    pub fn execute(&mut self, command: &Command) -> Result<Value, ChannelError> {
        let flag = command.flag();
        match command {
            Command::NodeCount => Ok(Value::from(self.nodes.len())),
            Command::IsGroupStart(id) => Ok(Value::Bool(self.node(flag, *id)?.group_start)),
            Command::ListProperties(id) => Ok(Value::List(
                self.node(flag, *id)?
                    .properties
                    .keys()
                    .map(|k| Value::Text(k.clone()))
                    .collect(),
            )),
            Command::PropertyType { node, name } => {
                let property = self
                    .node(flag, *node)?
                    .properties
                    .get(name)
                    .ok_or_else(|| ChannelError::rejected(flag, format!("No property {name}")))?;
                if property.reports_type {
                    Ok(Value::Text(property.type_tag.clone()))
                } else {
                    Err(ChannelError::rejected(
                        flag,
                        format!("Cannot determine type of property {name}"),
                    ))
                }
            }
            Command::PropertyValue { node, name, .. } => {
                let host_node = self.node(flag, *node)?;
                if name == "socketswizzlevalue" {
                    let swizzle = host_node
                        .swizzles
                        .get(&host_node.active_socket())
                        .cloned()
                        .unwrap_or_default();
                    return Ok(Value::Text(swizzle));
                }
                host_node
                    .properties
                    .get(name)
                    .map(|p| p.value.clone())
                    .ok_or_else(|| ChannelError::rejected(flag, format!("No property {name}")))
            }
            Command::EditProperty {
                node,
                name,
                type_tag,
                args,
            } => {
                let edit_flag = format!("edit_{type_tag}");
                let host_node = self.node_mut(flag, *node)?;
                let property = host_node
                    .properties
                    .get(name)
                    .ok_or_else(|| ChannelError::rejected(&edit_flag, format!("No property {name}")))?;
                if property.type_tag != *type_tag {
                    return Err(ChannelError::rejected(
                        &edit_flag,
                        format!("Property {name} is {}", property.type_tag),
                    ));
                }
                let value = coerce_edit(type_tag, args)
                    .map_err(|message| ChannelError::rejected(&edit_flag, message))?;

                if name == "socketswizzlevalue" {
                    let socket = host_node.active_socket();
                    let swizzle = value.as_str().unwrap_or_default().to_string();
                    host_node.swizzles.insert(socket, swizzle);
                } else if let Some(property) = host_node.properties.get_mut(name) {
                    property.value = value;
                }
                Ok(Value::none())
            }
            Command::NodeClassName(id) => Ok(Value::Text(self.node(flag, *id)?.class_name.clone())),
            Command::SocketCount { node, direction } => {
                Ok(Value::from(self.node(flag, *node)?.sockets(*direction).len()))
            }
            Command::SocketName {
                node,
                direction,
                slot,
            } => self
                .node(flag, *node)?
                .sockets(*direction)
                .get(*slot)
                .map(|label| Value::Text(label.clone()))
                .ok_or_else(|| ChannelError::rejected(flag, format!("No {direction} socket {slot}"))),
            Command::ConnectedNodeId {
                node,
                direction,
                slot,
                index,
            } => {
                self.check_socket(flag, Plug::new(*node, *slot), *direction)?;
                let id = self
                    .connections_at(*node, *direction, *slot)
                    .get(*index)
                    .map_or(0, |c| c.far_node(*direction));
                Ok(Value::Int(i64::from(id)))
            }
            Command::ConnectedSocketCount {
                node,
                direction,
                slot,
            } => {
                self.check_socket(flag, Plug::new(*node, *slot), *direction)?;
                Ok(Value::from(self.connections_at(*node, *direction, *slot).len()))
            }
            Command::AddNode(type_id) => {
                let catalog = Catalog::builtin(self.flavor);
                let descriptor = catalog
                    .by_id(*type_id)
                    .filter(|t| !t.is_group())
                    .ok_or_else(|| ChannelError::rejected(flag, format!("Unknown node type {type_id}")))?;
                let id = self.insert(template::node_for_class(&descriptor.name));
                Ok(Value::Int(i64::from(id)))
            }
            Command::AddGroup(identifier) => {
                let unknown = || ChannelError::rejected(flag, format!("Unknown group {identifier}"));
                let (type_name, category) = parse_group_identifier(identifier).ok_or_else(unknown)?;
                let catalog = Catalog::builtin(self.flavor);
                catalog
                    .by_name(type_name)
                    .filter(|t| t.group.as_deref() == Some(category))
                    .ok_or_else(unknown)?;

                let (start, end) = template::group_for_type(type_name);
                let start_id = self.insert(start);
                let end_id = self.insert(end);
                if let Some(start) = self.nodes.get_mut(&start_id) {
                    start.group_end = Some(end_id);
                }
                Ok(Value::Int(i64::from(start_id)))
            }
            Command::DeleteNode(id) => {
                let removed = self
                    .nodes
                    .remove(&id.0)
                    .ok_or_else(|| ChannelError::rejected(flag, format!("No node with id {id}")))?;
                let mut gone = vec![id.0];
                if let Some(end) = removed.group_end {
                    self.nodes.remove(&end);
                    gone.push(end);
                }
                self.connections
                    .retain(|c| !gone.iter().any(|&g| c.involves(g)));
                if self.root.is_some_and(|root| gone.contains(&root)) {
                    self.root = None;
                }
                Ok(Value::none())
            }
            Command::MakeConnection { from, to } => {
                self.check_socket(flag, *from, Direction::Output)?;
                self.check_socket(flag, *to, Direction::Input)?;
                let to_key = (to.node.0, to.slot);
                self.connections.retain(|c| c.to != to_key);
                self.connections.push(HostConnection {
                    from: (from.node.0, from.slot),
                    to: to_key,
                });
                Ok(Value::none())
            }
            Command::BreakConnection { from, to } => {
                let edge = HostConnection {
                    from: (from.node.0, from.slot),
                    to: (to.node.0, to.slot),
                };
                let before = self.connections.len();
                self.connections.retain(|c| *c != edge);
                if self.connections.len() == before {
                    return Err(ChannelError::rejected(flag, "No such connection"));
                }
                Ok(Value::none())
            }
            Command::RootNode => self
                .root
                .map(|id| Value::Int(i64::from(id)))
                .ok_or_else(|| ChannelError::rejected(flag, "Graph has no root node")),
            Command::GroupEnd(id) => self
                .node(flag, *id)?
                .group_end
                .map(|end| Value::Int(i64::from(end)))
                .ok_or_else(|| ChannelError::rejected(flag, format!("Node {id} is not a group"))),
            Command::InitShaderAttributes => {
                *self = template::default_graph(self.flavor);
                Ok(Value::none())
            }
            Command::LoadGraph(path) => {
                let content = std::fs::read_to_string(path)?;
                let loaded = Self::from_ron(&content)
                    .map_err(|e| ChannelError::rejected(flag, e.to_string()))?;
                if loaded.flavor == self.flavor {
                    *self = loaded;
                } else {
                    tracing::debug!(
                        "Ignoring {} graph file {:?} in a {} network",
                        loaded.flavor,
                        path,
                        self.flavor
                    );
                }
                Ok(Value::none())
            }
            Command::NodeTypeByClassName(name) => Catalog::builtin(self.flavor)
                .by_name(name)
                .map(|t| Value::from(t.id))
                .ok_or_else(|| ChannelError::rejected(flag, format!("Unknown class {name}"))),
        }
    }
}

/// Convert edit arguments to the stored value for a type tag
fn coerce_edit(type_tag: &str, args: &[Value]) -> Result<Value, String> {
    let width = match type_tag {
        "float2" => Some(2),
        "float3" => Some(3),
        "float4" => Some(4),
        _ => None,
    };
    if let Some(width) = width {
        if args.len() != width {
            return Err(format!("{type_tag} takes {width} values, got {}", args.len()));
        }
        return args
            .iter()
            .map(|arg| {
                arg.as_float()
                    .map(Value::Float)
                    .ok_or_else(|| format!("{arg:?} is not a number"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List);
    }

    let [arg] = args else {
        return Err(format!("{type_tag} takes a single value, got {}", args.len()));
    };
    let converted = match type_tag {
        "float" => arg.as_float().map(Value::Float),
        "int" => arg.as_int().map(Value::Int),
        "bool" => arg.as_bool().map(Value::Bool),
        "string" => arg.as_str().map(|s| Value::Text(s.to_string())),
        "stringlist" => match arg {
            Value::Int(_) | Value::Text(_) => Some(arg.clone()),
            _ => None,
        },
        "action" => return Err("Actions cannot be edited".to_string()),
        _ => Some(arg.clone()),
    };
    converted.ok_or_else(|| format!("{arg:?} is not a valid {type_tag}"))
}

/// Simulated host holding any number of shader objects
#[derive(Debug, Default)]
pub struct MemoryHost {
    shaders: IndexMap<String, HostGraph>,
    history: Vec<Command>,
}

impl MemoryHost {
    /// A host with no shader objects
    pub fn new() -> Self {
        Self::default()
    }

    /// State of a shader object
    pub fn graph(&self, shader: &str) -> Option<&HostGraph> {
        self.shaders.get(shader)
    }

    /// Mutable state of a shader object
    pub fn graph_mut(&mut self, shader: &str) -> Option<&mut HostGraph> {
        self.shaders.get_mut(shader)
    }

    /// Add or replace a shader object
    pub fn insert_graph(&mut self, shader: impl Into<String>, graph: HostGraph) {
        self.shaders.insert(shader.into(), graph);
    }

    /// Names of all shader objects
    pub fn shaders(&self) -> impl Iterator<Item = &str> {
        self.shaders.keys().map(String::as_str)
    }

    /// Every command received so far
    pub fn history(&self) -> &[Command] {
        &self.history
    }

    /// Number of commands received so far
    pub fn call_count(&self) -> usize {
        self.history.len()
    }

    /// Forget the recorded commands
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl CommandChannel for MemoryHost {
    fn call(&mut self, graph: &str, command: &Command) -> Result<Value, ChannelError> {
        self.history.push(command.clone());
        self.shaders
            .get_mut(graph)
            .ok_or_else(|| ChannelError::UnknownShader(graph.to_string()))?
            .execute(command)
    }

    fn create_shader(&mut self, name: &str, flavor: Flavor) -> Result<String, ChannelError> {
        let mut unique = name.to_string();
        let mut suffix = 1;
        while self.shaders.contains_key(&unique) {
            unique = format!("{name}{suffix}");
            suffix += 1;
        }
        self.shaders.insert(unique.clone(), HostGraph::new(flavor));
        Ok(unique)
    }
}
