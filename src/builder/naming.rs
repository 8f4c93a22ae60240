//! Automatic route naming.
//!
//! Explicit names are kept and must be unique. Unnamed routes get a name
//! derived from their resolved path and methods (`GET_blogs` for
//! `GET /blogs`); a derived name that is already taken gets a `_1`, `_2`, ...
//! suffix.

use std::collections::HashSet;

use http::Method;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::RoutingError;
use crate::route::Route;
use crate::table::RouteTable;

use super::flush::FlushedRoute;

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("route name regex should be valid"));

/// Key used for paths without any alphanumeric character, such as `/`.
const ROOT_KEY: &str = "root";

/// Name for an unnamed route, before collision handling.
#[must_use]
pub fn derive_name(route: &Route) -> String {
    let key = NON_ALPHANUMERIC.replace_all(route.path(), "_");
    let key = key.trim_matches('_');
    let key = if key.is_empty() { ROOT_KEY } else { key };

    let methods = route.methods();
    if methods.is_empty() {
        return key.to_owned();
    }
    let mut name = methods
        .iter()
        .map(Method::as_str)
        .collect::<Vec<_>>()
        .join("_");
    name.push('_');
    name.push_str(key);
    name
}

pub(crate) fn assign_names(entries: Vec<FlushedRoute>) -> Result<RouteTable, RoutingError> {
    let mut taken: HashSet<String> = HashSet::with_capacity(entries.len());
    for name in entries.iter().filter_map(|entry| entry.name.as_ref()) {
        if !taken.insert(name.clone()) {
            return Err(RoutingError::NameConflict { name: name.clone() });
        }
    }

    let mut table = RouteTable::new();
    for FlushedRoute { name, route } in entries {
        let name = match name {
            Some(name) => name,
            None => unique_name(derive_name(&route), &mut taken),
        };
        table.push_unique(name, route);
    }
    Ok(table)
}

fn unique_name(base: String, taken: &mut HashSet<String>) -> String {
    if taken.insert(base.clone()) {
        return base;
    }
    let mut suffix = 1usize;
    loop {
        let candidate = format!("{base}_{suffix}");
        if taken.insert(candidate.clone()) {
            debug!(route_name = %candidate, derived = %base, "Disambiguated derived route name");
            return candidate;
        }
        suffix += 1;
    }
}
