//! # Route Table Module
//!
//! [`RouteTable`] is the flat, ordered, name-keyed route table. Loaders return
//! one for each imported resource, and
//! [`RouteCollectionBuilder::build`](crate::RouteCollectionBuilder::build)
//! returns one for the whole tree.
//!
//! Iteration order is insertion order. Alongside the routes the table carries
//! the identifiers of the external resources it was loaded from, so callers
//! can invalidate their own caches when one of them changes; the table never
//! interprets them.

use std::collections::HashMap;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::route::Route;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteTable {
    routes: Vec<(String, Route)>,
    index: HashMap<String, usize>,
    resources: Vec<String>,
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route under `name`
    ///
    /// A route already registered under the same name is removed first, so
    /// the new route ends up last.
    pub fn add(&mut self, name: impl Into<String>, route: Route) {
        let name = name.into();
        if let Some(position) = self.index.remove(&name) {
            self.routes.remove(position);
            self.reindex_from(position);
        }
        self.index.insert(name.clone(), self.routes.len());
        self.routes.push((name, route));
    }

    /// Append a route whose name is known to be unused.
    pub(crate) fn push_unique(&mut self, name: String, route: Route) {
        self.index.insert(name.clone(), self.routes.len());
        self.routes.push((name, route));
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Route> {
        self.index.get(name).map(|&i| &self.routes[i].1)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Remove and return the route registered under `name`.
    pub fn remove(&mut self, name: &str) -> Option<Route> {
        let position = self.index.remove(name)?;
        let (_, route) = self.routes.remove(position);
        self.reindex_from(position);
        Some(route)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes with their names, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Route)> {
        self.routes.iter().map(|(name, route)| (name.as_str(), route))
    }

    /// Route names, in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(name, _)| name.as_str())
    }

    /// Record an external resource identifier (file path, URL, ...).
    pub fn add_resource(&mut self, resource: impl Into<String>) {
        self.resources.push(resource.into());
    }

    pub(crate) fn extend_resources<I>(&mut self, resources: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.resources.extend(resources);
    }

    #[must_use]
    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    fn reindex_from(&mut self, start: usize) {
        for (i, (name, _)) in self.routes.iter().enumerate().skip(start) {
            self.index.insert(name.clone(), i);
        }
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = (&'a str, &'a Route);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a Route)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

struct OrderedRoutes<'a>(&'a [(String, Route)]);

impl Serialize for OrderedRoutes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, route)| (name, route)))
    }
}

impl Serialize for RouteTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RouteTable", 2)?;
        state.serialize_field("routes", &OrderedRoutes(&self.routes))?;
        state.serialize_field("resources", &self.resources)?;
        state.end()
    }
}
