// SPDX-License-Identifier: MIT OR Apache-2.0
//! Offline catalog generation.
//!
//! Asks a live host for the numeric id of each known class name and collects
//! the answers into a [`Catalog`]. Ids are stable within one host version but
//! may change between versions, so the result replaces the built-in table.

use shaderfx_graph::{Catalog, ChannelError, Command, Flavor, Session, TypeDescriptor};
use std::borrow::Cow;

/// A regenerated catalog and the class names the host did not recognise
#[derive(Debug)]
pub struct Generated {
    /// Catalog of every recognised class name
    pub catalog: Catalog,
    /// Class names the host rejected
    pub rejected: Vec<String>,
}

/// Class names to query: the built-in ones, or one per non-empty line of `list`
pub fn class_names(flavor: Flavor, list: Option<&str>) -> Vec<String> {
    match list {
        Some(list) => list
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        None => Catalog::builtin(flavor)
            .iter()
            .map(|t| t.name.to_string())
            .collect(),
    }
}

/// Query the host through `session` for every name in `names`.
///
/// Group categories are taken from the built-in table, since the host only
/// reports ids.
pub fn generate(session: &Session, flavor: Flavor, names: &[String]) -> Result<Generated, ChannelError> {
    let builtin = Catalog::builtin(flavor);
    let mut catalog = Catalog::new(flavor);
    let mut rejected = Vec::new();

    for name in names {
        let command = Command::NodeTypeByClassName(name.clone());
        let id = match session.call(&command) {
            Ok(reply) => reply.as_int().and_then(|id| i32::try_from(id).ok()),
            Err(ChannelError::Rejected { message, .. }) => {
                tracing::debug!("Host rejected class {name}: {message}");
                None
            }
            Err(e) => return Err(e),
        };

        match id {
            Some(id) => catalog.register(TypeDescriptor {
                name: Cow::Owned(name.clone()),
                id,
                group: builtin.by_name(name).and_then(|t| t.group.clone()),
                flavor,
            }),
            None => rejected.push(name.clone()),
        }
    }

    tracing::info!(
        "Generated {flavor} catalog: {} types, {} rejected",
        catalog.len(),
        rejected.len()
    );
    Ok(Generated { catalog, rejected })
}
