//! # Loader Module
//!
//! Route loaders turn an external resource (a routing file, an annotated
//! directory, a remote document, ...) into a [`RouteTable`]. Parsing those
//! formats is the loader's business; the builder only needs to find a loader
//! for a resource and ask it for the table.
//!
//! Resolution is two-step, see [`resolve_loader`]:
//!
//! 1. The loader configured on the builder is used directly if it
//!    [`supports`](Loader::supports) the resource/type pair.
//! 2. Otherwise its [`resolver`](Loader::resolver), if any, is asked for a
//!    loader that does.

use std::fmt;
use std::rc::Rc;

use crate::error::RoutingError;
use crate::table::RouteTable;

/// A source of prebuilt route tables
pub trait Loader {
    /// Whether this loader can load `resource`, given an optional type hint
    /// such as `"yaml"`.
    fn supports(&self, resource: &str, type_hint: Option<&str>) -> bool;

    /// Load `resource` into a flat route table
    ///
    /// Errors are the loader's own and reach the caller of `import` unchanged
    /// inside [`RoutingError::Load`].
    fn load(&self, resource: &str, type_hint: Option<&str>) -> anyhow::Result<RouteTable>;

    /// Resolver consulted when this loader does not support a resource.
    fn resolver(&self) -> Option<&LoaderResolver> {
        None
    }
}

/// Ordered set of loaders; the first one that supports a resource wins
#[derive(Default)]
pub struct LoaderResolver {
    loaders: Vec<Rc<dyn Loader>>,
}

impl LoaderResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_loader(&mut self, loader: Rc<dyn Loader>) -> &mut Self {
        self.loaders.push(loader);
        self
    }

    /// First registered loader supporting `resource`, if any.
    #[must_use]
    pub fn resolve(&self, resource: &str, type_hint: Option<&str>) -> Option<Rc<dyn Loader>> {
        self.loaders
            .iter()
            .find(|loader| loader.supports(resource, type_hint))
            .map(Rc::clone)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}

impl fmt::Debug for LoaderResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoaderResolver")
            .field("loaders", &self.loaders.len())
            .finish()
    }
}

/// Pick the loader that will load `resource` on behalf of `loader`.
pub fn resolve_loader(
    loader: &Rc<dyn Loader>,
    resource: &str,
    type_hint: Option<&str>,
) -> Result<Rc<dyn Loader>, RoutingError> {
    if loader.supports(resource, type_hint) {
        return Ok(Rc::clone(loader));
    }
    loader
        .resolver()
        .and_then(|resolver| resolver.resolve(resource, type_hint))
        .ok_or_else(|| RoutingError::UnresolvableResource {
            resource: resource.to_owned(),
            type_hint: type_hint.map(str::to_owned),
        })
}
