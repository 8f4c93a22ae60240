use std::cell::RefCell;
use std::rc::Rc;

use http::Method;
use serde_json::Value;

use super::types::Route;

/// Shared reference to a route that was added to a builder
///
/// Returned by [`RouteCollectionBuilder::add`](crate::RouteCollectionBuilder::add)
/// so the caller can keep configuring the route after it has been added.
/// Changes made through the handle are seen by the next `build`.
///
/// ```rust
/// use routebuilder::RouteCollectionBuilder;
/// use http::Method;
///
/// let routes = RouteCollectionBuilder::new();
/// routes
///     .add("/blogs", "BlogController::list", None)
///     .set_methods([Method::GET])
///     .set_default("page", 1);
/// ```
#[derive(Debug, Clone)]
pub struct RouteHandle {
    route: Rc<RefCell<Route>>,
}

impl RouteHandle {
    pub(crate) fn new(route: Route) -> Self {
        Self {
            route: Rc::new(RefCell::new(route)),
        }
    }

    pub(crate) fn shared(&self) -> Rc<RefCell<Route>> {
        Rc::clone(&self.route)
    }

    /// Copy of the route as currently configured.
    #[must_use]
    pub fn snapshot(&self) -> Route {
        self.route.borrow().clone()
    }

    #[must_use]
    pub fn path(&self) -> String {
        self.route.borrow().path().to_owned()
    }

    #[must_use]
    pub fn handler(&self) -> String {
        self.route.borrow().handler().to_owned()
    }

    /// See [`Route::set_default`].
    pub fn set_default(&self, key: impl Into<String>, value: impl Into<Value>) -> &Self {
        self.route.borrow_mut().set_default(key, value);
        self
    }

    /// See [`Route::set_requirement`].
    pub fn set_requirement(&self, key: impl Into<String>, pattern: impl Into<String>) -> &Self {
        self.route.borrow_mut().set_requirement(key, pattern);
        self
    }

    /// See [`Route::set_option`].
    pub fn set_option(&self, key: impl Into<String>, value: impl Into<Value>) -> &Self {
        self.route.borrow_mut().set_option(key, value);
        self
    }

    /// Host pattern; overrides whatever an enclosing builder sets.
    pub fn set_host(&self, pattern: impl Into<String>) -> &Self {
        self.route.borrow_mut().set_host(pattern);
        self
    }

    /// See [`Route::set_condition`].
    pub fn set_condition(&self, expr: impl Into<String>) -> &Self {
        self.route.borrow_mut().set_condition(expr);
        self
    }

    /// Allowed schemes; an explicit empty list keeps enclosing schemes out.
    pub fn set_schemes<I, S>(&self, schemes: I) -> &Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.route.borrow_mut().set_schemes(schemes);
        self
    }

    /// Allowed methods, also used when deriving the route name.
    pub fn set_methods<I>(&self, methods: I) -> &Self
    where
        I: IntoIterator<Item = Method>,
    {
        self.route.borrow_mut().set_methods(methods);
        self
    }
}
