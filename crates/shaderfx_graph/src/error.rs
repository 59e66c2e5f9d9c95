// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types shared by the channel and graph layers.

use crate::node::NodeId;
use crate::plug::Direction;
use crate::value::Value;

/// Failure reported by (or while talking to) the host command channel
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// The host refused or failed to execute a command
    #[error("Host rejected {command}: {message}")]
    Rejected {
        /// Flag of the rejected command
        command: String,
        /// Host supplied message
        message: String,
    },

    /// Transport failure
    #[error("Channel I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Reply could not be framed or decoded
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The channel holds no shader object with this name
    #[error("Unknown shader: {0}")]
    UnknownShader(String),
}

impl ChannelError {
    /// Shorthand for a host rejection
    pub fn rejected(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            command: command.into(),
            message: message.into(),
        }
    }
}

/// Error raised by node, plug and network operations
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// `get` on a name absent from the cached property schema
    #[error("Node {node} has no property named {name}")]
    PropertyNotFound {
        /// Queried node
        node: NodeId,
        /// Missing property name
        name: String,
    },

    /// Plug lookup miss
    #[error("No {direction} plug named {name}")]
    PlugNotFound {
        /// Normalized name that was looked up
        name: String,
        /// Side of the node that was searched
        direction: Direction,
    },

    /// Identity absent from the network
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Command channel failure, propagated unchanged
    #[error(transparent)]
    Host(#[from] ChannelError),

    /// The host answered with a value of the wrong shape
    #[error("Unexpected reply to {command}: {reply:?}")]
    UnexpectedReply {
        /// Flag of the command
        command: &'static str,
        /// What came back
        reply: Value,
    },
}

/// Result type for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
