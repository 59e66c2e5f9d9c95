// SPDX-License-Identifier: MIT OR Apache-2.0
//! Plug (socket) naming and indexing.
//!
//! The host addresses sockets only as `(node, direction, slot)`. A
//! [`PlugIndex`] gives each slot of one side of one node a stable,
//! identifier-friendly name so callers can write
//!
//! ```ignore
//! network.connect(color.outputs().lookup("rgb")?, target.inputs().lookup("xyz")?, None)?;
//! ```

use crate::channel::{Command, Session};
use crate::error::{GraphError, Result};
use crate::node::NodeId;
use crate::value::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of a node a socket lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Input socket
    Input,
    /// Output socket
    Output,
}

impl Direction {
    /// Numeric code the host uses for this direction
    pub fn code(self) -> i64 {
        match self {
            Self::Input => 0,
            Self::Output => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => f.write_str("input"),
            Self::Output => f.write_str("output"),
        }
    }
}

/// A socket reference: owning node and zero-based slot index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Plug {
    /// Node that owns the socket
    pub node: NodeId,
    /// Slot index on that node
    pub slot: usize,
}

impl Plug {
    /// Create a plug reference
    pub fn new(node: NodeId, slot: usize) -> Self {
        Self { node, slot }
    }
}

impl From<(NodeId, usize)> for Plug {
    fn from((node, slot): (NodeId, usize)) -> Self {
        Self { node, slot }
    }
}

/// Normalize a raw socket label: lower-case, spaces to underscores, and one
/// leading underscore (left by a space-prefixed label) dropped.
pub fn normalize_plug_name(label: &str) -> String {
    let name = label.to_lowercase().replace(' ', "_");
    match name.strip_prefix('_') {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}

/// Ordered name to slot table for one side of one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlugIndex {
    node: NodeId,
    direction: Direction,
    plugs: IndexMap<String, usize>,
    slots: usize,
}

impl PlugIndex {
    /// Build an index from the raw slot labels, in slot order
    pub fn new<I, S>(node: NodeId, direction: Direction, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut plugs = IndexMap::new();
        let mut slots = 0;
        for (slot, label) in labels.into_iter().enumerate() {
            slots = slot + 1;
            let name = normalize_plug_name(label.as_ref());
            if let Some(previous) = plugs.insert(name.clone(), slot) {
                tracing::warn!(
                    "Node {node} {direction} plug '{name}' shadows slot {previous} with slot {slot}"
                );
            }
        }
        Self {
            node,
            direction,
            plugs,
            slots,
        }
    }

    /// Query the live slot labels of `node` and index them
    pub fn query(session: &Session, node: NodeId, direction: Direction) -> Result<Self> {
        let count_command = Command::SocketCount { node, direction };
        let reply = session.call(&count_command)?;
        let count = reply
            .as_int()
            .and_then(|c| usize::try_from(c).ok())
            .ok_or(GraphError::UnexpectedReply {
                command: count_command.flag(),
                reply,
            })?;

        let mut labels = Vec::with_capacity(count);
        for slot in 0..count {
            let label_command = Command::SocketName {
                node,
                direction,
                slot,
            };
            match session.call(&label_command)? {
                Value::Text(label) => labels.push(label),
                reply => {
                    return Err(GraphError::UnexpectedReply {
                        command: label_command.flag(),
                        reply,
                    })
                }
            }
        }

        Ok(Self::new(node, direction, labels))
    }

    /// Plug for a normalized name
    pub fn lookup(&self, name: &str) -> Result<Plug> {
        self.get(name).ok_or_else(|| GraphError::PlugNotFound {
            name: name.to_string(),
            direction: self.direction,
        })
    }

    /// Plug for a normalized name, if present
    pub fn get(&self, name: &str) -> Option<Plug> {
        self.plugs.get(name).map(|&slot| Plug::new(self.node, slot))
    }

    /// Node the slots belong to
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Side of the node this index covers
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Normalized names in slot order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plugs.keys().map(String::as_str)
    }

    /// `(name, plug)` pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Plug)> + '_ {
        self.plugs
            .iter()
            .map(|(name, &slot)| (name.as_str(), Plug::new(self.node, slot)))
    }

    /// Number of slots the host reported, including shadowed ones
    pub fn slot_count(&self) -> usize {
        self.slots
    }

    /// Number of named slots
    pub fn len(&self) -> usize {
        self.plugs.len()
    }

    /// Whether the side has no slots
    pub fn is_empty(&self) -> bool {
        self.plugs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plug_name() {
        assert_eq!(normalize_plug_name("Specular Color"), "specular_color");
        assert_eq!(normalize_plug_name(" XYZ"), "xyz");
        assert_eq!(normalize_plug_name("RGB"), "rgb");
        assert_eq!(normalize_plug_name("Mip Level"), "mip_level");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for label in ["Base Color", " Mask Cutoff", "A", "uv", "Emission Strength"] {
            let once = normalize_plug_name(label);
            assert_eq!(normalize_plug_name(&once), once);
        }
    }

    #[test]
    fn test_lookup_slots_in_order() {
        let index = PlugIndex::new(
            NodeId(7),
            Direction::Output,
            ["RGBA", "RGB", "R", "G", "B", "A"],
        );
        assert_eq!(index.len(), 6);
        assert_eq!(index.lookup("rgb").unwrap(), Plug::new(NodeId(7), 1));
        assert_eq!(index.lookup("a").unwrap().slot, 5);
        assert_eq!(index.names().next(), Some("rgba"));
    }

    #[test]
    fn test_lookup_miss() {
        let index = PlugIndex::new(NodeId(2), Direction::Input, ["A", "B"]);
        let err = index.lookup("c").unwrap_err();
        assert!(matches!(
            err,
            GraphError::PlugNotFound { ref name, direction: Direction::Input } if name == "c"
        ));
    }

    #[test]
    fn test_distinct_labels_stay_distinct() {
        let labels = ["Base Color", "Normal", "Metallic", "Roughness", " Emissive"];
        let index = PlugIndex::new(NodeId(1), Direction::Input, labels);
        assert_eq!(index.len(), labels.len());
    }

    #[test]
    fn test_colliding_labels_keep_slot_count() {
        let index = PlugIndex::new(NodeId(2), Direction::Input, ["A", " A", "B"]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.slot_count(), 3);
        assert_eq!(index.lookup("a").unwrap().slot, 1);
        assert_eq!(index.lookup("b").unwrap().slot, 2);
    }
}
