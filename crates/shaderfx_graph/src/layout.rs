// SPDX-License-Identifier: MIT OR Apache-2.0
//! Grid layout for visual debugging.
//!
//! Walks backward from the root along input connections. A node reached over
//! several paths takes the depth of the last path walked, so the result is a
//! rough layering rather than a topological one.

use crate::error::{GraphError, Result};
use crate::network::Network;
use crate::node::NodeId;
use indexmap::IndexMap;
use std::collections::BTreeMap;

impl Network {
    /// Arrange the nodes upstream of the root in columns by depth.
    ///
    /// Each visited node is stacked within its column, moved left to its
    /// column unless it already sits further left, and collapsed. Nodes
    /// never move right. Returns the number of nodes placed.
    pub fn layout(&self) -> Result<usize> {
        let mut depths = IndexMap::new();
        let mut path = Vec::new();
        self.walk(self.root().id(), 0, &mut path, &mut depths)?;

        let mut columns: BTreeMap<usize, Vec<NodeId>> = BTreeMap::new();
        for (id, depth) in &depths {
            columns.entry(*depth).or_default().push(*id);
        }

        let pitch = self.settings().layout;
        for (depth, column) in &columns {
            let x = pitch.horizontal_pitch * (*depth + 1) as f64;
            for (row, id) in column.iter().enumerate() {
                let node = self.resolve(*id)?;
                node.set("posy", pitch.vertical_pitch * row as f64)?;

                let reply = node.get("posx")?;
                let current = reply.as_float().ok_or(GraphError::UnexpectedReply {
                    command: "gpv",
                    reply,
                })?;
                if x < current {
                    node.set("posx", x)?;
                }
                node.set("collapsed", true)?;
            }
        }

        tracing::debug!(
            "Laid out {} nodes of {} in {} columns",
            depths.len(),
            self.shader(),
            columns.len()
        );
        Ok(depths.len())
    }

    /// Record `id` at `depth`, then its upstream nodes one level deeper.
    /// `path` holds the nodes on the current walk and stops cycles.
    fn walk(
        &self,
        id: NodeId,
        depth: usize,
        path: &mut Vec<NodeId>,
        depths: &mut IndexMap<NodeId, usize>,
    ) -> Result<()> {
        depths.insert(id, depth);
        path.push(id);
        for upstream in self.get_inputs(id)?.into_values() {
            let upstream = upstream.id();
            if path.contains(&upstream) {
                tracing::trace!("Layout skips cycle back to node {upstream}");
                continue;
            }
            self.walk(upstream, depth + 1, path, depths)?;
        }
        path.pop();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::Flavor;
    use crate::channel::MemoryHost;
    use crate::network::Network;
    use crate::node::NodeId;
    use crate::plug::Plug;
    use crate::value::Value;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn example() -> Network {
        Network::create(Arc::new(Mutex::new(MemoryHost::new())), "example", Flavor::ShaderFx).unwrap()
    }

    fn position(network: &Network, id: u32) -> (f64, f64) {
        let node = network.node(NodeId(id)).unwrap();
        let x = node.get("posx").unwrap().as_float().unwrap();
        let y = node.get("posy").unwrap().as_float().unwrap();
        (x, y)
    }

    #[test]
    fn test_columns_by_depth() {
        let network = example();
        assert_eq!(network.layout().unwrap(), 6);

        assert_eq!(position(&network, 1), (-150.0, 0.0));
        assert_eq!(position(&network, 3), (-300.0, 0.0));
        assert_eq!(position(&network, 11), (-450.0, 0.0));
        assert_eq!(position(&network, 9), (-600.0, 0.0));
        assert_eq!(position(&network, 4), (-300.0, 200.0));
    }

    #[test]
    fn test_last_path_sets_depth() {
        // Node 6 feeds the multiply two levels down and the root directly;
        // the direct path is walked last.
        let network = example();
        network.layout().unwrap();
        assert_eq!(position(&network, 6), (-300.0, 100.0));
    }

    #[test]
    fn test_never_moves_right() {
        let network = example();
        network.node(NodeId(3)).unwrap().set("posx", -1000.0).unwrap();
        network.layout().unwrap();
        let first: Vec<_> = network.nodes().map(|n| n.get("posx").unwrap()).collect();
        network.layout().unwrap();
        let second: Vec<_> = network.nodes().map(|n| n.get("posx").unwrap()).collect();

        assert_eq!(position(&network, 3).0, -1000.0);
        for (before, after) in first.iter().zip(&second) {
            assert!(after.as_float().unwrap() <= before.as_float().unwrap());
        }
    }

    #[test]
    fn test_collapses_visited_nodes_only() {
        let network = example();
        network.layout().unwrap();
        let collapsed = |id| network.node(NodeId(id)).unwrap().get("collapsed").unwrap();
        assert_eq!(collapsed(11), Value::Bool(true));
        assert_eq!(collapsed(14), Value::Bool(false));
    }

    #[test]
    fn test_cycle_terminates() {
        let network = example();
        network
            .connect(Plug::new(NodeId(3), 0), Plug::new(NodeId(11), 1), None)
            .unwrap();
        assert_eq!(network.layout().unwrap(), 5);
    }
}
