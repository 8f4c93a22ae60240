use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use http::Method;
use serde_json::Value;
use tracing::debug;

use crate::build_config::BuildConfig;
use crate::error::RoutingError;
use crate::loader::{resolve_loader, Loader};
use crate::route::{Route, RouteAttributes, RouteHandle};
use crate::table::RouteTable;

use super::flush;

/// One child of a builder, in insertion order.
pub(crate) enum Item {
    Route {
        name: Option<String>,
        route: Rc<RefCell<Route>>,
    },
    Builder {
        prefix: String,
        node: Rc<RefCell<Node>>,
    },
    Table {
        prefix: String,
        table: Rc<RouteTable>,
    },
}

/// State behind a [`RouteCollectionBuilder`] handle.
#[derive(Default)]
pub(crate) struct Node {
    pub(crate) items: Vec<Item>,
    pub(crate) prefix: String,
    pub(crate) attributes: RouteAttributes,
    pub(crate) resources: Vec<String>,
    pub(crate) loader: Option<Rc<dyn Loader>>,
}

impl Node {
    /// Whether `target` is this node or one of its mounted descendants.
    fn reaches(node: &Rc<RefCell<Node>>, target: &Rc<RefCell<Node>>) -> bool {
        let mut pending = vec![Rc::clone(node)];
        while let Some(current) = pending.pop() {
            if Rc::ptr_eq(&current, target) {
                return true;
            }
            for item in &current.borrow().items {
                if let Item::Builder { node: child, .. } = item {
                    pending.push(Rc::clone(child));
                }
            }
        }
        false
    }
}

/// Anything that can be mounted into a builder
///
/// A builder is mounted by reference: later changes to it are still picked
/// up at build time. A table is mounted as-is.
pub enum Mountable {
    Builder(RouteCollectionBuilder),
    Table(RouteTable),
}

impl From<RouteCollectionBuilder> for Mountable {
    fn from(builder: RouteCollectionBuilder) -> Self {
        Mountable::Builder(builder)
    }
}

impl From<&RouteCollectionBuilder> for Mountable {
    fn from(builder: &RouteCollectionBuilder) -> Self {
        Mountable::Builder(builder.clone())
    }
}

impl From<RouteTable> for Mountable {
    fn from(table: RouteTable) -> Self {
        Mountable::Table(table)
    }
}

/// Incrementally assembled tree of routes, sub-builders and imported tables
///
/// Nothing is resolved while the tree is being assembled. Prefixes, attribute
/// inheritance, and route names are all worked out by [`build`](Self::build),
/// so a builder can keep changing after it has been mounted somewhere.
///
/// `RouteCollectionBuilder` is a handle: cloning it yields another handle to
/// the same builder, not a copy.
///
/// # Example
///
/// ```rust
/// use routebuilder::RouteCollectionBuilder;
///
/// let routes = RouteCollectionBuilder::new();
/// routes.add("/", "MainController::homepage", Some("homepage"));
///
/// let admin = routes.create_builder();
/// routes.mount("/admin", &admin).unwrap();
/// // added after mounting, still prefixed
/// admin.add("/users", "AdminController::users", Some("admin_users"));
///
/// routes.set_default("_locale", "fr");
///
/// let table = routes.build().unwrap();
/// let users = table.get("admin_users").unwrap();
/// assert_eq!(users.path(), "/admin/users");
/// assert_eq!(users.default("_locale").unwrap(), "fr");
/// ```
#[derive(Clone, Default)]
pub struct RouteCollectionBuilder {
    node: Rc<RefCell<Node>>,
}

impl RouteCollectionBuilder {
    /// Create a builder with no loader; [`import`](Self::import) will fail.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder that imports resources through `loader`.
    #[must_use]
    pub fn with_loader(loader: Rc<dyn Loader>) -> Self {
        Self::from_node(Node {
            loader: Some(loader),
            ..Node::default()
        })
    }

    fn from_node(node: Node) -> Self {
        Self {
            node: Rc::new(RefCell::new(node)),
        }
    }

    /// Create an unattached builder sharing this builder's loader
    ///
    /// The new builder is not part of this tree until it is
    /// [`mount`](Self::mount)ed.
    #[must_use]
    pub fn create_builder(&self) -> RouteCollectionBuilder {
        let loader = self.node.borrow().loader.clone();
        Self::from_node(Node {
            loader,
            ..Node::default()
        })
    }

    /// Add a route and return a handle to keep configuring it
    ///
    /// Routes without a name get one derived from their path and methods at
    /// build time.
    pub fn add(
        &self,
        path: impl Into<String>,
        handler: impl Into<String>,
        name: Option<&str>,
    ) -> RouteHandle {
        self.add_route(Route::new(path, handler), name)
    }

    /// Add an already constructed route.
    pub fn add_route(&self, route: Route, name: Option<&str>) -> RouteHandle {
        let handle = RouteHandle::new(route);
        self.node.borrow_mut().items.push(Item::Route {
            name: name.map(str::to_owned),
            route: handle.shared(),
        });
        handle
    }

    /// Mount a builder or a table under `prefix`
    ///
    /// A prefix of `""` (or `"/"`) leaves paths unchanged. Any other prefix
    /// loses one trailing `/` and gains a leading one if it lacks it, so
    /// `"0"` mounts at `/0`.
    ///
    /// # Errors
    ///
    /// [`RoutingError::MountCycle`] if `child` is this builder or already
    /// contains it.
    pub fn mount(
        &self,
        prefix: impl Into<String>,
        child: impl Into<Mountable>,
    ) -> Result<&Self, RoutingError> {
        let item = match child.into() {
            Mountable::Builder(builder) => {
                if Node::reaches(&builder.node, &self.node) {
                    return Err(RoutingError::MountCycle);
                }
                Item::Builder {
                    prefix: prefix.into(),
                    node: builder.node,
                }
            }
            Mountable::Table(table) => Item::Table {
                prefix: prefix.into(),
                table: Rc::new(table),
            },
        };
        self.node.borrow_mut().items.push(item);
        Ok(self)
    }

    /// Load `resource` through the configured loader and mount it
    ///
    /// The loaded table is wrapped in a new builder, mounted here under
    /// `prefix`, and returned so that attributes can be set on the import.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::MissingLoader`] if this builder has no loader
    /// - [`RoutingError::UnresolvableResource`] if no loader supports it
    /// - [`RoutingError::Load`] if the loader fails
    pub fn import(
        &self,
        resource: &str,
        prefix: &str,
        type_hint: Option<&str>,
    ) -> Result<RouteCollectionBuilder, RoutingError> {
        let loader = self
            .node
            .borrow()
            .loader
            .clone()
            .ok_or_else(|| RoutingError::MissingLoader {
                resource: resource.to_owned(),
            })?;

        let resolved = resolve_loader(&loader, resource, type_hint)?;
        let table = resolved
            .load(resource, type_hint)
            .map_err(RoutingError::Load)?;
        debug!(
            resource,
            type_hint,
            prefix,
            routes_count = table.len(),
            "Imported route resource"
        );

        let imported = self.create_builder();
        imported.node.borrow_mut().items.push(Item::Table {
            prefix: String::new(),
            table: Rc::new(table),
        });
        self.mount(prefix, &imported)?;
        Ok(imported)
    }

    /// Set this builder's own prefix, applied before any enclosing mount prefix.
    pub fn set_prefix(&self, prefix: impl Into<String>) -> &Self {
        self.node.borrow_mut().prefix = prefix.into();
        self
    }

    /// Record an external resource identifier for the built table.
    pub fn add_resource(&self, resource: impl Into<String>) -> &Self {
        self.node.borrow_mut().resources.push(resource.into());
        self
    }

    /// Default value for every route below this builder that does not set `key`.
    pub fn set_default(&self, key: impl Into<String>, value: impl Into<Value>) -> &Self {
        self.node.borrow_mut().attributes.set_default(key, value);
        self
    }

    /// Requirement pattern for `key` on every route below this builder that does not set one.
    pub fn set_requirement(&self, key: impl Into<String>, pattern: impl Into<String>) -> &Self {
        self.node.borrow_mut().attributes.set_requirement(key, pattern);
        self
    }

    /// Option value inherited by routes below this builder that leave `key` unset.
    pub fn set_option(&self, key: impl Into<String>, value: impl Into<Value>) -> &Self {
        self.node.borrow_mut().attributes.set_option(key, value);
        self
    }

    /// Host pattern for every route below this builder that leaves host unset.
    pub fn set_host(&self, pattern: impl Into<String>) -> &Self {
        self.node.borrow_mut().attributes.set_host(pattern);
        self
    }

    /// Condition expression for routes below this builder without their own.
    pub fn set_condition(&self, expr: impl Into<String>) -> &Self {
        self.node.borrow_mut().attributes.set_condition(expr);
        self
    }

    /// Allowed schemes for routes below this builder that leave schemes unset.
    ///
    /// An empty list is an explicit "any scheme" and is inherited as such.
    pub fn set_schemes<I, S>(&self, schemes: I) -> &Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.node.borrow_mut().attributes.set_schemes(schemes);
        self
    }

    /// Allowed methods for routes below this builder that leave methods unset.
    pub fn set_methods<I>(&self, methods: I) -> &Self
    where
        I: IntoIterator<Item = Method>,
    {
        self.node.borrow_mut().attributes.set_methods(methods);
        self
    }

    /// Resolve the tree into one flat, named route table
    ///
    /// Uses [`BuildConfig::default`], which follows nesting to any depth. The
    /// tree itself is left untouched, so building again yields an equal table.
    ///
    /// # Errors
    ///
    /// [`RoutingError::NameConflict`] when two routes share an explicit name.
    pub fn build(&self) -> Result<RouteTable, RoutingError> {
        self.build_with(&BuildConfig::default())
    }

    /// [`build`](Self::build) with explicit configuration.
    ///
    /// # Errors
    ///
    /// As [`build`](Self::build), plus [`RoutingError::DepthExceeded`] when
    /// builders nest deeper than `config.max_depth`.
    pub fn build_with(&self, config: &BuildConfig) -> Result<RouteTable, RoutingError> {
        flush::build_table(&self.node.borrow(), config)
    }
}

impl fmt::Debug for RouteCollectionBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node.borrow();
        f.debug_struct("RouteCollectionBuilder")
            .field("prefix", &node.prefix)
            .field("items", &node.items.len())
            .field("attributes", &node.attributes)
            .field("has_loader", &node.loader.is_some())
            .finish()
    }
}
