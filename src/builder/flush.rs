//! Flush engine: turns a builder tree into one flat route table.
//!
//! Each builder first flushes its children in insertion order (recursing into
//! mounted builders), then applies its own prefix and attributes to every
//! entry it produced. Doing this on the way back up means a route receives
//! every ancestor's prefix and unset-only attribute overlay no matter in
//! which order mounting and mutation happened.
//!
//! The tree is only read. Every entry is cloned out of its builder before
//! anything is applied to it.

use tracing::info;

use crate::build_config::BuildConfig;
use crate::error::RoutingError;
use crate::route::Route;
use crate::table::RouteTable;

use super::core::{Item, Node};
use super::naming::assign_names;

/// A resolved entry that may still need a derived name.
#[derive(Debug, Clone)]
pub(crate) struct FlushedRoute {
    pub(crate) name: Option<String>,
    pub(crate) route: Route,
}

impl FlushedRoute {
    fn apply_prefix(&mut self, prefix: &str) {
        if prefix.is_empty() {
            return;
        }
        let path = join_prefix(prefix, self.route.path());
        self.route.set_path(path);
    }
}

/// Prepend `prefix` to `path`
///
/// One trailing `/` is stripped from the prefix; a prefix that is empty
/// afterwards leaves the path as-is. A leading `/` is added to the prefix
/// when missing. Nothing else in either string is touched, so `"0"` gives
/// `/0/foo` and `"/ /"` gives `/ /foo`.
#[must_use]
pub fn join_prefix(prefix: &str, path: &str) -> String {
    let prefix = prefix.strip_suffix('/').unwrap_or(prefix);
    if prefix.is_empty() {
        path.to_owned()
    } else if prefix.starts_with('/') {
        format!("{prefix}{path}")
    } else {
        format!("/{prefix}{path}")
    }
}

pub(crate) fn build_table(root: &Node, config: &BuildConfig) -> Result<RouteTable, RoutingError> {
    let mut resources = Vec::new();
    let entries = flush(root, 0, config, &mut resources)?;
    let mut table = assign_names(entries)?;
    table.extend_resources(resources);

    info!(
        routes_count = table.len(),
        resources_count = table.resources().len(),
        "Route table built"
    );
    Ok(table)
}

fn flush(
    node: &Node,
    depth: usize,
    config: &BuildConfig,
    resources: &mut Vec<String>,
) -> Result<Vec<FlushedRoute>, RoutingError> {
    if let Some(max_depth) = config.max_depth {
        if depth > max_depth {
            return Err(RoutingError::DepthExceeded { max_depth });
        }
    }

    let mut entries = Vec::new();
    for item in &node.items {
        match item {
            Item::Route { name, route } => entries.push(FlushedRoute {
                name: name.clone(),
                route: route.borrow().clone(),
            }),
            Item::Builder {
                prefix,
                node: child,
            } => {
                let mut nested = flush(&child.borrow(), depth + 1, config, resources)?;
                for entry in &mut nested {
                    entry.apply_prefix(prefix);
                }
                entries.append(&mut nested);
            }
            Item::Table { prefix, table } => {
                for (name, route) in table.iter() {
                    let mut entry = FlushedRoute {
                        name: Some(name.to_owned()),
                        route: route.clone(),
                    };
                    entry.apply_prefix(prefix);
                    entries.push(entry);
                }
                resources.extend(table.resources().iter().cloned());
            }
        }
    }
    resources.extend(node.resources.iter().cloned());

    for entry in &mut entries {
        entry.apply_prefix(&node.prefix);
        entry.route.attributes_mut().inherit(&node.attributes);
    }
    Ok(entries)
}
