// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scripting wrapper for ShaderFX shader graphs.
//!
//! This crate wraps a node-based shader graph that lives inside a host
//! application and is reachable only through a synchronous command channel:
//! - [`Network`] discovers, creates, connects and lays out nodes
//! - [`Node`] gives typed property access over a cached schema
//! - [`PlugIndex`] names each socket of a node
//! - [`catalog`] maps node type names to host ids for both network flavors
//!
//! ## Architecture
//!
//! Every operation reduces to [`channel::Command`]s sent through a
//! [`Session`], which binds a shared [`channel::CommandChannel`] to one
//! graph. Channels exist for a live host's command port
//! ([`channel::CommandPortChannel`]) and for an in-process simulation
//! ([`channel::MemoryHost`]).
//!
//! ```ignore
//! let host = shaderfx_graph::channel::shared(MemoryHost::new());
//! let mut network = Network::create(host, "example", Flavor::ShaderFx)?;
//! let color = network.add(&catalog::sfx::COLOR, Some("tint"))?.id();
//! ```

pub mod catalog;
pub mod channel;
pub mod error;
pub mod layout;
pub mod network;
pub mod node;
pub mod plug;
pub mod settings;
pub mod value;

pub use catalog::{Catalog, CreateTarget, Flavor, TypeDescriptor};
pub use channel::{Command, CommandChannel, Session, SharedChannel};
pub use error::{ChannelError, GraphError, Result};
pub use network::{Network, TypeQuery};
pub use node::{Node, NodeId};
pub use plug::{Direction, Plug, PlugIndex};
pub use settings::NetworkSettings;
pub use value::Value;
