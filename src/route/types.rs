use http::Method;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::attributes::RouteAttributes;

/// A single route: path pattern, handler reference and attributes
///
/// The handler is an opaque reference (typically a controller identifier) and
/// is never interpreted by the builder. The path always starts with `/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    path: String,
    handler: String,
    #[serde(flatten)]
    attributes: RouteAttributes,
}

impl Route {
    /// Create a route, adding the leading `/` to `path` when it is missing.
    pub fn new(path: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            path: normalize_path(path.into()),
            handler: handler.into(),
            attributes: RouteAttributes::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Replace the path, normalized the same way as in [`new`](Self::new).
    pub fn set_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.path = normalize_path(path.into());
        self
    }

    #[must_use]
    pub fn handler(&self) -> &str {
        &self.handler
    }

    /// Replace the opaque handler reference.
    pub fn set_handler(&mut self, handler: impl Into<String>) -> &mut Self {
        self.handler = handler.into();
        self
    }

    #[must_use]
    pub fn attributes(&self) -> &RouteAttributes {
        &self.attributes
    }

    /// Mutable access to every attribute slot at once.
    pub fn attributes_mut(&mut self) -> &mut RouteAttributes {
        &mut self.attributes
    }

    /// Default value for the `key` placeholder.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.attributes.set_default(key, value);
        self
    }

    /// Pattern the `key` placeholder must match.
    pub fn set_requirement(&mut self, key: impl Into<String>, pattern: impl Into<String>) -> &mut Self {
        self.attributes.set_requirement(key, pattern);
        self
    }

    /// Free-form option passed through to the consumer of the table.
    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.attributes.set_option(key, value);
        self
    }

    /// Host pattern; `""` explicitly matches any host and is never inherited over.
    pub fn set_host(&mut self, pattern: impl Into<String>) -> &mut Self {
        self.attributes.set_host(pattern);
        self
    }

    /// Matching condition expression.
    pub fn set_condition(&mut self, expr: impl Into<String>) -> &mut Self {
        self.attributes.set_condition(expr);
        self
    }

    /// Allowed schemes, lower-cased. An empty list is an explicit "any".
    pub fn set_schemes<I, S>(&mut self, schemes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.attributes.set_schemes(schemes);
        self
    }

    /// Allowed methods, upper-cased. Set methods also prefix a derived name.
    pub fn set_methods<I>(&mut self, methods: I) -> &mut Self
    where
        I: IntoIterator<Item = Method>,
    {
        self.attributes.set_methods(methods);
        self
    }

    #[must_use]
    pub fn default(&self, key: &str) -> Option<&Value> {
        self.attributes.default(key)
    }

    #[must_use]
    pub fn defaults(&self) -> &Map<String, Value> {
        self.attributes.defaults()
    }

    #[must_use]
    pub fn requirement(&self, key: &str) -> Option<&str> {
        self.attributes.requirement(key)
    }

    #[must_use]
    pub fn requirements(&self) -> &BTreeMap<String, String> {
        self.attributes.requirements()
    }

    #[must_use]
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.attributes.option(key)
    }

    #[must_use]
    pub fn host(&self) -> &str {
        self.attributes.host()
    }

    #[must_use]
    pub fn condition(&self) -> &str {
        self.attributes.condition()
    }

    #[must_use]
    pub fn schemes(&self) -> &[String] {
        self.attributes.schemes()
    }

    #[must_use]
    pub fn methods(&self) -> &[Method] {
        self.attributes.methods()
    }
}

fn normalize_path(path: String) -> String {
    if path.starts_with('/') {
        path
    } else {
        format!("/{path}")
    }
}
