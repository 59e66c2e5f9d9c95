// SPDX-License-Identifier: MIT OR Apache-2.0
//! The command channel: the only way host state is read or changed.
//!
//! The host answers single questions and executes single commands, addressed
//! by graph handle. There is no batching and no enumeration. Every node and
//! network operation reduces to a sequence of [`Command`]s issued through a
//! [`Session`], which binds a shared [`CommandChannel`] to one graph.

pub mod command_port;
pub mod mel;
pub mod memory;

use crate::catalog::Flavor;
use crate::error::ChannelError;
use crate::node::NodeId;
use crate::plug::{Direction, Plug};
use crate::value::Value;
use parking_lot::Mutex;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

pub use command_port::CommandPortChannel;
pub use memory::MemoryHost;

/// One request to the host
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Total discoverable node count
    NodeCount,
    /// Whether an identity is the start node of a group
    IsGroupStart(NodeId),
    /// Property names of a node
    ListProperties(NodeId),
    /// Type tag of one property
    PropertyType {
        /// Queried node
        node: NodeId,
        /// Property name
        name: String,
    },
    /// Value of one property
    PropertyValue {
        /// Queried node
        node: NodeId,
        /// Property name
        name: String,
        /// Cached type tag, used to decode text replies
        type_tag: String,
    },
    /// Type-specific property edit
    EditProperty {
        /// Edited node
        node: NodeId,
        /// Property name
        name: String,
        /// Type tag selecting the edit flag
        type_tag: String,
        /// Positional value arguments
        args: Vec<Value>,
    },
    /// Current display class name of a node
    NodeClassName(NodeId),
    /// Number of sockets on one side of a node
    SocketCount {
        /// Queried node
        node: NodeId,
        /// Side
        direction: Direction,
    },
    /// Label of one socket
    SocketName {
        /// Queried node
        node: NodeId,
        /// Side
        direction: Direction,
        /// Slot index
        slot: usize,
    },
    /// Identity of the `index`-th node connected to a socket, 0 when none
    ConnectedNodeId {
        /// Queried node
        node: NodeId,
        /// Side
        direction: Direction,
        /// Slot index
        slot: usize,
        /// Connection index on that slot
        index: usize,
    },
    /// Number of connections on a socket
    ConnectedSocketCount {
        /// Queried node
        node: NodeId,
        /// Side
        direction: Direction,
        /// Slot index
        slot: usize,
    },
    /// Create a node from a numeric type id
    AddNode(i32),
    /// Create a group from a composite group identifier
    AddGroup(String),
    /// Delete a node
    DeleteNode(NodeId),
    /// Connect an output socket to an input socket
    MakeConnection {
        /// Output side
        from: Plug,
        /// Input side
        to: Plug,
    },
    /// Remove a connection
    BreakConnection {
        /// Output side
        from: Plug,
        /// Input side
        to: Plug,
    },
    /// Identity of the rendering root
    RootNode,
    /// Identity of the end node linked to a group start node
    GroupEnd(NodeId),
    /// Populate a freshly created shader with its default graph
    InitShaderAttributes,
    /// Replace the graph with the contents of a file
    LoadGraph(PathBuf),
    /// Numeric type id for a class name (catalog generation only)
    NodeTypeByClassName(String),
}

impl Command {
    /// Host flag this command is issued under
    pub fn flag(&self) -> &'static str {
        match self {
            Self::NodeCount => "getNodeCount",
            Self::IsGroupStart(_) => "isGroupStart",
            Self::ListProperties(_) => "lp",
            Self::PropertyType { .. } => "gpt",
            Self::PropertyValue { .. } => "gpv",
            Self::EditProperty { .. } => "edit",
            Self::NodeClassName(_) => "getNodeClassName",
            Self::SocketCount { .. } => "gsc",
            Self::SocketName { .. } => "gsn",
            Self::ConnectedNodeId { .. } => "getConnectedNodeID",
            Self::ConnectedSocketCount { .. } => "getConnectedSocketCount",
            Self::AddNode(_) => "addNode",
            Self::AddGroup(_) => "addGroup",
            Self::DeleteNode(_) => "deleteNode",
            Self::MakeConnection { .. } => "makeConnection",
            Self::BreakConnection { .. } => "breakConnection",
            Self::RootNode => "rhw",
            Self::GroupEnd(_) => "getGroupEndUID",
            Self::InitShaderAttributes => "initShaderAttributes",
            Self::LoadGraph(_) => "loadGraph",
            Self::NodeTypeByClassName(_) => "getNodeTypeByClassName",
        }
    }
}

/// Synchronous request/response interface to the host
pub trait CommandChannel {
    /// Issue one command against the graph named `graph`
    fn call(&mut self, graph: &str, command: &Command) -> Result<Value, ChannelError>;

    /// Create a shader object of the flavor's shading node type.
    ///
    /// Returns the name the host actually gave it, which differs from
    /// `name` when that name is taken.
    fn create_shader(&mut self, name: &str, flavor: Flavor) -> Result<String, ChannelError>;
}

/// A channel shared by every session that talks to the same host
pub type SharedChannel = Arc<Mutex<dyn CommandChannel + Send>>;

/// Wrap a channel for sharing
pub fn shared<C: CommandChannel + Send + 'static>(channel: C) -> SharedChannel {
    Arc::new(Mutex::new(channel))
}

/// A command channel bound to one graph
#[derive(Clone)]
pub struct Session {
    channel: SharedChannel,
    graph: Arc<str>,
}

impl Session {
    /// Bind `channel` to the graph named `graph`
    pub fn bind(channel: SharedChannel, graph: impl Into<Arc<str>>) -> Self {
        Self {
            channel,
            graph: graph.into(),
        }
    }

    /// Name of the bound graph
    pub fn graph(&self) -> &str {
        &self.graph
    }

    /// The underlying shared channel
    pub fn channel(&self) -> &SharedChannel {
        &self.channel
    }

    /// Issue one command and wait for its reply
    pub fn call(&self, command: &Command) -> Result<Value, ChannelError> {
        let reply = self.channel.lock().call(&self.graph, command);
        match &reply {
            Ok(value) => tracing::trace!(graph = %self.graph, "{} -> {:?}", command.flag(), value),
            Err(e) => tracing::trace!(graph = %self.graph, "{} failed: {}", command.flag(), e),
        }
        reply
    }

    /// Whether two sessions address the same graph over the same channel
    pub fn same_graph(&self, other: &Session) -> bool {
        Arc::ptr_eq(&self.channel, &other.channel) && self.graph == other.graph
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("graph", &self.graph).finish()
    }
}
