// SPDX-License-Identifier: MIT OR Apache-2.0
//! Network summaries printed by `shaderfx inspect`.

use serde::Serialize;
use shaderfx_graph::{Network, Node, Result};
use std::collections::BTreeMap;
use std::fmt;

/// One node of the summary
#[derive(Debug, Serialize)]
pub struct NodeReport {
    /// Host identity
    pub id: u32,
    /// Value of the `name` property
    pub name: String,
    /// Live class name
    pub type_name: String,
    /// Whether the node is a group
    pub group: bool,
    /// Input plug names in slot order
    pub inputs: Vec<String>,
    /// Output plug names in slot order
    pub outputs: Vec<String>,
    /// Upstream node identity per connected input plug
    pub upstream: BTreeMap<String, u32>,
}

impl NodeReport {
    fn build(network: &Network, node: &Node) -> Result<Self> {
        let by_slot: BTreeMap<usize, &str> = node.inputs().iter().map(|(name, plug)| (plug.slot, name)).collect();
        let mut upstream = BTreeMap::new();
        for (slot, source) in network.get_inputs(node)? {
            let plug = by_slot
                .get(&slot)
                .map_or_else(|| slot.to_string(), |name| (*name).to_string());
            upstream.insert(plug, source.id().0);
        }

        Ok(Self {
            id: node.id().0,
            name: node.name()?,
            type_name: node.type_name()?,
            group: node.is_group(),
            inputs: node.inputs().names().map(str::to_string).collect(),
            outputs: node.outputs().names().map(str::to_string).collect(),
            upstream,
        })
    }
}

impl fmt::Display for NodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>5}  {} ({})", self.id, self.name, self.type_name)?;
        if self.group {
            f.write_str(" [group]")?;
        }
        for (plug, source) in &self.upstream {
            write!(f, "\n         {plug} <- {source}")?;
        }
        Ok(())
    }
}

/// Summary of a whole network
#[derive(Debug, Serialize)]
pub struct NetworkReport {
    /// Shader object name
    pub shader: String,
    /// Identity of the rendering root
    pub root: u32,
    /// Every registered node
    pub nodes: Vec<NodeReport>,
}

impl NetworkReport {
    /// Summarize `network`, querying each node live
    pub fn build(network: &Network) -> Result<Self> {
        let nodes = network
            .nodes()
            .map(|node| NodeReport::build(network, node))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            shader: network.shader().to_string(),
            root: network.root().id().0,
            nodes,
        })
    }
}

impl fmt::Display for NetworkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (root {}, {} nodes)", self.shader, self.root, self.nodes.len())?;
        for node in &self.nodes {
            writeln!(f, "{node}")?;
        }
        Ok(())
    }
}
