// SPDX-License-Identifier: MIT OR Apache-2.0
//! Network: the wrapper owning every node of one host shader graph.
//!
//! The host offers no way to list a graph's nodes, so wrapping an existing
//! graph is a bounded probe scan over candidate identities (see
//! [`Network::discover_with`]). After that, nodes added through the network
//! are registered as they are created and every other operation is a short
//! sequence of host commands.

use crate::catalog::{group_identifier, CreateTarget, Flavor, TypeDescriptor};
use crate::channel::{Command, Session, SharedChannel};
use crate::error::{GraphError, Result};
use crate::node::{Node, NodeId};
use crate::plug::{Direction, Plug};
use crate::settings::NetworkSettings;
use crate::value::Value;
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Node type to search for with [`Network::find_by_type`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeQuery<'a>(pub &'a str);

impl<'a> From<&'a str> for TypeQuery<'a> {
    fn from(name: &'a str) -> Self {
        Self(name)
    }
}

impl<'a> From<&'a String> for TypeQuery<'a> {
    fn from(name: &'a String) -> Self {
        Self(name)
    }
}

impl<'a> From<&'a TypeDescriptor> for TypeQuery<'a> {
    fn from(descriptor: &'a TypeDescriptor) -> Self {
        Self(&descriptor.name)
    }
}

/// A wrapped host shader graph
#[derive(Debug)]
pub struct Network {
    session: Session,
    settings: NetworkSettings,
    root: Node,
    nodes: IndexMap<NodeId, Node>,
}

impl Network {
    /// Wrap an existing graph with default settings
    pub fn discover(session: Session) -> Result<Self> {
        Self::discover_with(session, NetworkSettings::default())
    }

    /// Wrap an existing graph.
    ///
    /// Probes identities from `first_id` up to `id_ceiling` until as many
    /// named nodes as the host reports have been found. Probes that fail to
    /// construct a node are skipped. The root is resolved separately.
    pub fn discover_with(session: Session, settings: NetworkSettings) -> Result<Self> {
        let command = Command::NodeCount;
        let reply = session.call(&command)?;
        let expected = reply
            .as_int()
            .and_then(|count| usize::try_from(count).ok())
            .ok_or(GraphError::UnexpectedReply {
                command: command.flag(),
                reply,
            })?;

        let mut nodes = IndexMap::with_capacity(expected);
        let bounds = settings.discovery;
        for candidate in bounds.first_id..bounds.id_ceiling {
            if nodes.len() >= expected {
                break;
            }
            let id = NodeId(candidate);
            match probe(&session, id) {
                Ok(Some(node)) => {
                    nodes.insert(id, node);
                }
                Ok(None) => tracing::trace!("Probe {id}: unnamed node skipped"),
                Err(e) => tracing::trace!("Probe {id}: {e}"),
            }
        }

        if nodes.len() < expected {
            tracing::warn!(
                "Discovery of {} found {} of {expected} nodes below id {}",
                session.graph(),
                nodes.len(),
                bounds.id_ceiling
            );
        }

        let command = Command::RootNode;
        let reply = session.call(&command)?;
        let root = Node::new(&session, NodeId::from_reply(&command, reply)?)?;

        tracing::info!(
            "Discovered {} nodes in {} (root {})",
            nodes.len(),
            session.graph(),
            root.id()
        );

        Ok(Self {
            session,
            settings,
            root,
            nodes,
        })
    }

    /// Create a shader object of `flavor` and wrap its default graph
    pub fn create(channel: SharedChannel, name: &str, flavor: Flavor) -> Result<Self> {
        Self::create_with(channel, name, flavor, NetworkSettings::default())
    }

    /// [`Network::create`] with explicit settings
    pub fn create_with(
        channel: SharedChannel,
        name: &str,
        flavor: Flavor,
        settings: NetworkSettings,
    ) -> Result<Self> {
        let shader = channel.lock().create_shader(name, flavor)?;
        tracing::info!("Created {flavor} {shader}");

        let session = Session::bind(channel, shader);
        session.call(&Command::InitShaderAttributes)?;
        Self::discover_with(session, settings)
    }

    /// Create a shader object and load a graph file into it.
    ///
    /// A file of the other flavor is silently ignored by the host, leaving
    /// the default graph in place.
    pub fn instantiate(channel: SharedChannel, name: &str, flavor: Flavor, path: &Path) -> Result<Self> {
        Self::instantiate_with(channel, name, flavor, path, NetworkSettings::default())
    }

    /// [`Network::instantiate`] with explicit settings
    pub fn instantiate_with(
        channel: SharedChannel,
        name: &str,
        flavor: Flavor,
        path: &Path,
        settings: NetworkSettings,
    ) -> Result<Self> {
        let created = Self::create_with(channel, name, flavor, settings)?;
        created.session.call(&Command::LoadGraph(path.to_path_buf()))?;
        tracing::info!("Loaded {} into {}", path.display(), created.shader());
        Self::discover_with(created.session, created.settings)
    }

    /// Name of the wrapped shader object
    pub fn shader(&self) -> &str {
        self.session.graph()
    }

    /// Session every node of this network talks through
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Settings in effect
    pub fn settings(&self) -> &NetworkSettings {
        &self.settings
    }

    /// The rendering root
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Registered node by identity
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// All registered nodes, in discovery and creation order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Number of registered nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether `id` is registered
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Any node this network knows by identity: registered nodes, the root,
    /// and the end nodes of registered groups
    pub fn resolve(&self, id: NodeId) -> Result<&Node> {
        if let Some(node) = self.nodes.get(&id) {
            return Ok(node);
        }
        if self.root.id() == id {
            return Ok(&self.root);
        }
        self.nodes
            .values()
            .filter_map(Node::end_node)
            .find(|end| end.id() == id)
            .ok_or(GraphError::NodeNotFound(id))
    }

    /// Create a node of the given type, optionally naming it.
    ///
    /// The node stays registered when naming it fails.
    pub fn add(&mut self, descriptor: &TypeDescriptor, name: Option<&str>) -> Result<&Node> {
        let (command, is_group) = match descriptor.create_target() {
            CreateTarget::Plain(type_id) => (Command::AddNode(type_id), false),
            CreateTarget::Group {
                type_name,
                category,
            } => (Command::AddGroup(group_identifier(&type_name, &category)), true),
        };

        let reply = self.session.call(&command)?;
        let id = NodeId::from_reply(&command, reply)?;
        let node = if is_group {
            Node::new_group(&self.session, id)?
        } else {
            Node::new(&self.session, id)?
        };

        tracing::debug!("Added {descriptor} as node {id} in {}", self.shader());
        self.nodes.insert(id, node);
        let node = &self.nodes[&id];
        // Registered before naming so a failed rename can still be deleted.
        if let Some(name) = name {
            node.set("name", name)?;
        }
        Ok(node)
    }

    /// Delete a registered node.
    ///
    /// Connections are left to the host to clean up.
    pub fn delete(&mut self, node: impl Into<NodeId>) -> Result<()> {
        let id = node.into();
        if self.nodes.shift_remove(&id).is_none() {
            return Err(GraphError::NodeNotFound(id));
        }
        self.session.call(&Command::DeleteNode(id))?;
        tracing::debug!("Deleted node {id} from {}", self.shader());
        Ok(())
    }

    /// Connect an output plug to an input plug.
    ///
    /// With a swizzle, the receiving node's active socket is switched to the
    /// input slot and the swizzle is stored on it.
    pub fn connect(&self, output: impl Into<Plug>, input: impl Into<Plug>, swizzle: Option<&str>) -> Result<()> {
        let (from, to) = (output.into(), input.into());
        self.session.call(&Command::MakeConnection { from, to })?;
        tracing::debug!(
            "Connected {}.{} -> {}.{} in {}",
            from.node,
            from.slot,
            to.node,
            to.slot,
            self.shader()
        );

        if let Some(swizzle) = swizzle.filter(|s| !s.is_empty()) {
            let target = self.resolve(to.node)?;
            target.set("activesocket", to.slot)?;
            target.set("socketswizzlevalue", swizzle)?;
        }
        Ok(())
    }

    /// Remove the connection between two plugs
    pub fn disconnect(&self, output: impl Into<Plug>, input: impl Into<Plug>) -> Result<()> {
        let (from, to) = (output.into(), input.into());
        self.session.call(&Command::BreakConnection { from, to })?;
        tracing::debug!(
            "Disconnected {}.{} -> {}.{} in {}",
            from.node,
            from.slot,
            to.node,
            to.slot,
            self.shader()
        );
        Ok(())
    }

    /// Registered nodes whose `name` property equals `name`
    pub fn find_by_name(&self, name: &str) -> Result<Vec<&Node>> {
        let mut found = Vec::new();
        for node in self.nodes.values() {
            if node.name()? == name {
                found.push(node);
            }
        }
        Ok(found)
    }

    /// Registered nodes whose live class name matches
    pub fn find_by_type<'a>(&self, query: impl Into<TypeQuery<'a>>) -> Result<Vec<&Node>> {
        let TypeQuery(type_name) = query.into();
        let mut found = Vec::new();
        for node in self.nodes.values() {
            if node.type_name()? == type_name {
                found.push(node);
            }
        }
        Ok(found)
    }

    /// Upstream node per populated input slot
    pub fn get_inputs(&self, node: impl Into<NodeId>) -> Result<BTreeMap<usize, &Node>> {
        let connections = self.connections(node.into(), Direction::Input)?;
        Ok(connections
            .into_iter()
            .filter_map(|(slot, mut upstream)| {
                if upstream.is_empty() {
                    None
                } else {
                    Some((slot, upstream.swap_remove(0)))
                }
            })
            .collect())
    }

    /// Downstream nodes per populated output slot
    pub fn get_outputs(&self, node: impl Into<NodeId>) -> Result<BTreeMap<usize, Vec<&Node>>> {
        self.connections(node.into(), Direction::Output)
    }

    fn connections(&self, id: NodeId, direction: Direction) -> Result<BTreeMap<usize, Vec<&Node>>> {
        let node = self.resolve(id)?;
        // A group's outputs live on its end node.
        let plugs = match direction {
            Direction::Input => node.inputs(),
            Direction::Output => node.outputs(),
        };
        let owner = plugs.node();

        let mut results = BTreeMap::new();
        for slot in 0..plugs.slot_count() {
            let first = Command::ConnectedNodeId {
                node: owner,
                direction,
                slot,
                index: 0,
            };
            let reply = self.session.call(&first)?;
            if !connected(&first, reply)? {
                continue;
            }

            let command = Command::ConnectedSocketCount {
                node: owner,
                direction,
                slot,
            };
            let reply = self.session.call(&command)?;
            let count = reply
                .as_int()
                .and_then(|count| usize::try_from(count).ok())
                .ok_or(GraphError::UnexpectedReply {
                    command: command.flag(),
                    reply,
                })?;

            let mut linked = Vec::with_capacity(count);
            for index in 0..count {
                let command = Command::ConnectedNodeId {
                    node: owner,
                    direction,
                    slot,
                    index,
                };
                let reply = self.session.call(&command)?;
                linked.push(self.resolve(NodeId::from_reply(&command, reply)?)?);
            }
            results.insert(slot, linked);
        }
        Ok(results)
    }
}

/// Construct the node at a candidate identity; `None` when it has no name
fn probe(session: &Session, id: NodeId) -> Result<Option<Node>> {
    let node = if session.call(&Command::IsGroupStart(id))?.is_truthy() {
        Node::new_group(session, id)?
    } else {
        Node::new(session, id)?
    };
    Ok((!node.name()?.is_empty()).then_some(node))
}

/// Whether a connected-node reply names a node
fn connected(command: &Command, reply: Value) -> Result<bool> {
    match reply.as_int() {
        Some(id) => Ok(id > 0),
        None => Err(GraphError::UnexpectedReply {
            command: command.flag(),
            reply,
        }),
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Network '{}' ({} nodes)", self.shader(), self.nodes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{pbs, sfx};
    use crate::channel::memory::{template, HostGraph};
    use crate::channel::{shared, CommandChannel, MemoryHost};
    use crate::error::ChannelError;
    use crate::plug::PlugIndex;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn host() -> Arc<Mutex<MemoryHost>> {
        Arc::new(Mutex::new(MemoryHost::new()))
    }

    fn example(flavor: Flavor) -> (Arc<Mutex<MemoryHost>>, Network) {
        let host = host();
        let network = Network::create(host.clone(), "example", flavor).unwrap();
        (host, network)
    }

    fn ids(nodes: &[&Node]) -> Vec<NodeId> {
        nodes.iter().map(|n| n.id()).collect()
    }

    #[test]
    fn test_create_wraps_default_graph() {
        let (_host, network) = example(Flavor::ShaderFx);
        assert_eq!(network.shader(), "example");
        assert_eq!(network.node_count(), 8);
        assert_eq!(network.root().type_name().unwrap(), "Hardware Shader");
        assert_eq!(network.to_string(), "Network 'example' (8 nodes)");
    }

    #[test]
    fn test_create_takes_host_name_on_collision() {
        let host = host();
        Network::create(host.clone(), "example", Flavor::ShaderFx).unwrap();
        let second = Network::create(host, "example", Flavor::StingrayPbs).unwrap();
        assert_eq!(second.shader(), "example1");
        assert_eq!(second.root().type_name().unwrap(), "Standard Base");
    }

    #[test]
    fn test_discovery_finds_host_count_over_sparse_ids() {
        let mut graph = HostGraph::new(Flavor::ShaderFx);
        for (id, class) in [(2, "Hardware Shader"), (517, "Color"), (7998, "Float")] {
            graph.nodes.insert(id, template::node_for_class(class));
        }
        graph.root = Some(2);
        let mut memory = MemoryHost::new();
        memory.insert_graph("sparse", graph);

        let network = Network::discover(Session::bind(shared(memory), "sparse")).unwrap();
        assert_eq!(network.node_count(), 3);
        assert!(network.contains(NodeId(517)));
        assert!(network.contains(NodeId(7998)));
        assert_eq!(network.root().id(), NodeId(2));
    }

    #[test]
    fn test_discovery_stops_at_ceiling() {
        let mut graph = HostGraph::new(Flavor::ShaderFx);
        graph.nodes.insert(1, template::node_for_class("Hardware Shader"));
        graph.nodes.insert(300, template::node_for_class("Color"));
        graph.root = Some(1);
        let mut memory = MemoryHost::new();
        memory.insert_graph("short", graph);

        let mut settings = NetworkSettings::default();
        settings.discovery.id_ceiling = 100;
        let network = Network::discover_with(Session::bind(shared(memory), "short"), settings).unwrap();
        assert_eq!(network.node_count(), 1);
        assert!(!network.contains(NodeId(300)));
    }

    #[test]
    fn test_discovery_wraps_groups() {
        let (_host, network) = example(Flavor::ShaderFx);
        let group = network.node(NodeId(14)).unwrap();
        assert!(group.is_group());
        assert_eq!(group.end_node().map(Node::id), Some(NodeId(15)));
    }

    #[test]
    fn test_add_named_node() {
        let (_host, mut network) = example(Flavor::ShaderFx);
        let added = network.add(&sfx::COLOR, Some("added")).unwrap().id();
        assert_eq!(network.resolve(added).unwrap().type_name().unwrap(), "Color");
        assert_eq!(ids(&network.find_by_name("added").unwrap()), vec![added]);
        assert_eq!(network.node_count(), 9);
    }

    #[test]
    fn test_find_by_name_includes_every_node() {
        let (_host, network) = example(Flavor::ShaderFx);
        for node in network.nodes() {
            let found = network.find_by_name(&node.name().unwrap()).unwrap();
            assert!(ids(&found).contains(&node.id()));
        }
        assert_eq!(network.find_by_name("Color").unwrap().len(), 2);
        assert_eq!(network.find_by_name("SurfaceMaskCutoff").unwrap().len(), 1);
        assert!(network.find_by_name("nonexistent").unwrap().is_empty());
    }

    #[test]
    fn test_find_by_type() {
        let (_host, network) = example(Flavor::ShaderFx);
        assert_eq!(network.find_by_type(&sfx::COLOR).unwrap().len(), 2);
        assert_eq!(network.find_by_type("Multiply").unwrap().len(), 1);
        assert!(network.find_by_type(&sfx::DESATURATE_COLOR).unwrap().is_empty());
    }

    #[test]
    fn test_connect_and_disconnect() {
        let (_host, mut network) = example(Flavor::ShaderFx);
        let added = network.add(&sfx::COLOR, Some("added")).unwrap();
        let (added_id, rgb) = (added.id(), added.outputs().lookup("rgb").unwrap());
        let target = network.find_by_name("TotalAmbientAndOpacity").unwrap()[0];
        let xyz = target.inputs().lookup("xyz").unwrap();

        network.connect(rgb, xyz, None).unwrap();
        let inputs = network.get_inputs(target).unwrap();
        assert_eq!(inputs.get(&xyz.slot).map(|n| n.id()), Some(added_id));

        network.disconnect(rgb, xyz).unwrap();
        let inputs = network.get_inputs(target).unwrap();
        assert!(inputs.values().all(|n| n.id() != added_id));
    }

    #[test]
    fn test_connect_disconnect_restores_connections() {
        let (_host, network) = example(Flavor::ShaderFx);
        let color = network.node(NodeId(9)).unwrap();
        let target = network.node(NodeId(3)).unwrap();
        let before_in = ids(&network.get_inputs(target).unwrap().into_values().collect::<Vec<_>>());
        let before_out = network.get_outputs(color).unwrap().len();

        let from = color.outputs().lookup("a").unwrap();
        let to = target.inputs().lookup("w").unwrap();
        network.connect(from, to, None).unwrap();
        assert_eq!(network.get_inputs(target).unwrap().len(), before_in.len() + 1);
        network.disconnect(from, to).unwrap();

        let after_in = ids(&network.get_inputs(target).unwrap().into_values().collect::<Vec<_>>());
        assert_eq!(after_in, before_in);
        assert_eq!(network.get_outputs(color).unwrap().len(), before_out);
    }

    #[test]
    fn test_outputs_fan_out() {
        let (host, network) = example(Flavor::ShaderFx);
        let outputs = network.get_outputs(NodeId(6)).unwrap();
        let fanned = &outputs[&1];
        assert_eq!(ids(fanned), vec![NodeId(11), NodeId(1)]);

        let reported = host
            .lock()
            .call(
                "example",
                &Command::ConnectedSocketCount {
                    node: NodeId(6),
                    direction: Direction::Output,
                    slot: 1,
                },
            )
            .unwrap();
        assert_eq!(reported, Value::from(fanned.len()));
    }

    #[test]
    fn test_inputs_are_single_valued() {
        let (_host, network) = example(Flavor::ShaderFx);
        let multiply = network.node(NodeId(11)).unwrap();
        let a = multiply.inputs().lookup("a").unwrap();
        network.connect(Plug::new(NodeId(4), 0), a, None).unwrap();
        let inputs = network.get_inputs(multiply).unwrap();
        assert_eq!(inputs.get(&0).map(|n| n.id()), Some(NodeId(4)));
        assert_eq!(inputs.get(&1).map(|n| n.id()), Some(NodeId(9)));
    }

    #[test]
    fn test_connect_with_swizzle() {
        let (_host, network) = example(Flavor::ShaderFx);
        let target = network.node(NodeId(11)).unwrap();
        let b = target.inputs().lookup("b").unwrap();
        network.connect(Plug::new(NodeId(4), 0), b, Some("xyz")).unwrap();

        assert_eq!(target.get("activesocket").unwrap(), Value::from(b.slot));
        assert_eq!(target.get("socketswizzlevalue").unwrap(), Value::from("xyz"));
    }

    #[test]
    fn test_add_group() {
        let (_host, mut network) = example(Flavor::ShaderFx);
        let id = network.add(&sfx::TEXTURE_MAP, Some("albedo")).unwrap().id();
        let group = network.node(id).unwrap();
        let end = group.end_node().unwrap();
        assert!(Arc::ptr_eq(group.outputs(), end.outputs()));
        assert_eq!(group.outputs().node(), end.id());

        let raw = PlugIndex::query(network.session(), group.id(), Direction::Output).unwrap();
        assert_ne!(&raw, group.outputs().as_ref());
        assert_eq!(group.name().unwrap(), "albedo");
    }

    #[test]
    fn test_group_outputs_resolve() {
        let (_host, mut network) = example(Flavor::ShaderFx);
        let group = network.add(&sfx::TEXTURE_MAP, None).unwrap();
        let (group_id, end_id) = (group.id(), group.end_node().map(Node::id));
        let rgb = group.outputs().lookup("rgb").unwrap();

        network.connect(rgb, Plug::new(NodeId(3), 1), None).unwrap();
        let inputs = network.get_inputs(NodeId(3)).unwrap();
        assert_eq!(inputs.get(&1).map(|n| n.id()), end_id);
        let outputs = network.get_outputs(group_id).unwrap();
        assert_eq!(outputs.get(&rgb.slot).map(|n| ids(n)), Some(vec![NodeId(3)]));
    }

    #[test]
    fn test_delete() {
        let (host, mut network) = example(Flavor::ShaderFx);
        let id = network.add(&pbs::MULTIPLY, None).map(Node::id);
        assert!(id.is_err());

        network.delete(NodeId(4)).unwrap();
        assert!(!network.contains(NodeId(4)));
        let before = host.lock().call_count();
        assert!(matches!(
            network.delete(NodeId(4)),
            Err(GraphError::NodeNotFound(NodeId(4)))
        ));
        assert_eq!(host.lock().call_count(), before);
    }

    #[test]
    fn test_host_failures_propagate() {
        let (_host, network) = example(Flavor::ShaderFx);
        let err = network
            .connect(Plug::new(NodeId(6), 9), Plug::new(NodeId(11), 0), None)
            .unwrap_err();
        assert!(matches!(err, GraphError::Host(_)));
        assert!(matches!(
            network.get_inputs(NodeId(999)),
            Err(GraphError::NodeNotFound(_))
        ));
    }

    #[test]
    fn test_instantiate_loads_graph_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pbs.sfx");
        template::default_graph(Flavor::StingrayPbs).save(&path).unwrap();

        let pbs = Network::instantiate(host(), "pbs", Flavor::StingrayPbs, &path).unwrap();
        assert_eq!(pbs.node_count(), 4);
        assert_eq!(pbs.find_by_name("color_map").unwrap().len(), 1);

        let sfx = Network::instantiate(host(), "sfx", Flavor::ShaderFx, &path).unwrap();
        assert_eq!(sfx.node_count(), 8);
        assert!(sfx.find_by_name("color_map").unwrap().is_empty());
    }

    #[test]
    fn test_discovery_skips_unnamed_nodes() {
        let mut graph = HostGraph::new(Flavor::ShaderFx);
        graph.nodes.insert(1, template::node_for_class("Hardware Shader"));
        let mut unnamed = template::node_for_class("Color");
        if let Some(name) = unnamed.properties.get_mut("name") {
            name.value = Value::from("");
        }
        graph.nodes.insert(2, unnamed);
        graph.nodes.insert(3, template::node_for_class("Color"));
        graph.nodes.insert(40, template::node_for_class("Float"));
        graph.root = Some(1);
        let mut memory = MemoryHost::new();
        memory.insert_graph("unnamed", graph);

        let network = Network::discover(Session::bind(shared(memory), "unnamed")).unwrap();
        assert_eq!(network.node_count(), 3);
        assert!(!network.contains(NodeId(2)));
        assert!(network.contains(NodeId(3)));
        assert!(network.contains(NodeId(40)));
    }

    #[test]
    fn test_connections_on_shadowed_slots() {
        let mut graph = HostGraph::new(Flavor::ShaderFx);
        graph.nodes.insert(1, template::node_for_class("Hardware Shader"));
        let mut shadowed = template::node_for_class("Multiply");
        shadowed.inputs = vec!["A".to_string(), " A".to_string(), "B".to_string()];
        graph.nodes.insert(2, shadowed);
        graph.nodes.insert(3, template::node_for_class("Color"));
        graph.root = Some(1);
        let mut memory = MemoryHost::new();
        memory.insert_graph("shadowed", graph);

        let network = Network::discover(Session::bind(shared(memory), "shadowed")).unwrap();
        assert_eq!(network.node(NodeId(2)).unwrap().inputs().len(), 2);
        network
            .connect(Plug::new(NodeId(3), 0), Plug::new(NodeId(2), 2), None)
            .unwrap();

        let inputs = network.get_inputs(NodeId(2)).unwrap();
        assert_eq!(inputs.get(&2).map(|n| n.id()), Some(NodeId(3)));
        let outputs = network.get_outputs(NodeId(3)).unwrap();
        assert_eq!(outputs.get(&0).map(|n| ids(n)), Some(vec![NodeId(2)]));
    }

    /// Host that refuses to rename nodes
    struct NoRenames(MemoryHost);

    impl CommandChannel for NoRenames {
        fn call(&mut self, graph: &str, command: &Command) -> std::result::Result<Value, ChannelError> {
            match command {
                Command::EditProperty { name, .. } if name == "name" => {
                    Err(ChannelError::rejected(command.flag(), "Node names are locked"))
                }
                _ => self.0.call(graph, command),
            }
        }

        fn create_shader(&mut self, name: &str, flavor: Flavor) -> std::result::Result<String, ChannelError> {
            self.0.create_shader(name, flavor)
        }
    }

    #[test]
    fn test_failed_naming_keeps_node_deletable() {
        let mut memory = MemoryHost::new();
        memory.insert_graph("locked", template::default_graph(Flavor::ShaderFx));
        let host = Arc::new(Mutex::new(NoRenames(memory)));
        let mut network = Network::discover(Session::bind(host.clone(), "locked")).unwrap();
        let before: Vec<NodeId> = network.nodes().map(Node::id).collect();

        let err = network.add(&sfx::COLOR, Some("tint")).map(Node::id).unwrap_err();
        assert!(matches!(err, GraphError::Host(ChannelError::Rejected { .. })));

        let added = network
            .nodes()
            .map(Node::id)
            .find(|id| !before.contains(id))
            .unwrap();
        network.delete(added).unwrap();
        assert!(!network.contains(added));
        assert!(host.lock().0.graph("locked").is_some_and(|g| !g.nodes.contains_key(&added.0)));
    }
}
