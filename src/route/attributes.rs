use std::collections::BTreeMap;

use http::Method;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Matching attributes and auxiliary data attached to a route or a builder
///
/// Every slot keeps track of whether it was explicitly set. `None` means
/// "unset" and is the only state that inheritance fills in; `Some("")` or an
/// empty set is a real, explicitly chosen value. The map-valued slots
/// (defaults, requirements, options) track this per key: a key is set when it
/// is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteAttributes {
    #[serde(skip_serializing_if = "Map::is_empty")]
    defaults: Map<String, Value>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    requirements: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    options: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    schemes: Option<Vec<String>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_methods"
    )]
    methods: Option<Vec<Method>>,
}

impl RouteAttributes {
    #[must_use]
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Mark `key` as set with `value`.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.defaults.insert(key.into(), value.into());
    }

    /// Mark the requirement for `key` as set.
    pub fn set_requirement(&mut self, key: impl Into<String>, pattern: impl Into<String>) {
        self.requirements.insert(key.into(), pattern.into());
    }

    /// Mark option `key` as set with `value`.
    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.options.insert(key.into(), value.into());
    }

    /// Set the host pattern, even to `""`.
    pub fn set_host(&mut self, pattern: impl Into<String>) {
        self.host = Some(pattern.into());
    }

    /// Set the condition expression, even to `""`.
    pub fn set_condition(&mut self, expr: impl Into<String>) {
        self.condition = Some(expr.into());
    }

    /// Schemes are stored lower-cased, first occurrence wins on duplicates.
    pub fn set_schemes<I, S>(&mut self, schemes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for scheme in schemes {
            let scheme = scheme.as_ref().to_ascii_lowercase();
            if !normalized.contains(&scheme) {
                normalized.push(scheme);
            }
        }
        self.schemes = Some(normalized);
    }

    /// Methods are stored upper-cased, first occurrence wins on duplicates.
    pub fn set_methods<I>(&mut self, methods: I)
    where
        I: IntoIterator<Item = Method>,
    {
        let mut normalized: Vec<Method> = Vec::new();
        for method in methods {
            let method = uppercase_method(method);
            if !normalized.contains(&method) {
                normalized.push(method);
            }
        }
        self.methods = Some(normalized);
    }

    #[must_use]
    pub fn default(&self, key: &str) -> Option<&Value> {
        self.defaults.get(key)
    }

    #[must_use]
    pub fn has_default(&self, key: &str) -> bool {
        self.defaults.contains_key(key)
    }

    #[must_use]
    pub fn defaults(&self) -> &Map<String, Value> {
        &self.defaults
    }

    #[must_use]
    pub fn requirement(&self, key: &str) -> Option<&str> {
        self.requirements.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn requirements(&self) -> &BTreeMap<String, String> {
        &self.requirements
    }

    #[must_use]
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    #[must_use]
    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    /// Host pattern; an unset host reads as `""` (any host).
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or_default()
    }

    /// Condition expression; an unset condition reads as `""` (none).
    #[must_use]
    pub fn condition(&self) -> &str {
        self.condition.as_deref().unwrap_or_default()
    }

    /// Allowed schemes; empty means any scheme.
    #[must_use]
    pub fn schemes(&self) -> &[String] {
        self.schemes.as_deref().unwrap_or_default()
    }

    /// Allowed methods; empty means any method.
    #[must_use]
    pub fn methods(&self) -> &[Method] {
        self.methods.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn is_host_set(&self) -> bool {
        self.host.is_some()
    }

    #[must_use]
    pub fn is_condition_set(&self) -> bool {
        self.condition.is_some()
    }

    #[must_use]
    pub fn are_schemes_set(&self) -> bool {
        self.schemes.is_some()
    }

    #[must_use]
    pub fn are_methods_set(&self) -> bool {
        self.methods.is_some()
    }

    /// Fill every unset slot from `parent`, leaving explicitly set ones alone.
    ///
    /// Map-valued slots are merged per key. The merged defaults and options
    /// list `parent`'s keys first, in its order, followed by keys only this
    /// side sets; a key both sides set keeps this side's value at the parent's
    /// position. Slots `parent` itself leaves unset stay unset, so a further
    /// ancestor can still provide them.
    pub fn inherit(&mut self, parent: &RouteAttributes) {
        merge_parent_first(&mut self.defaults, &parent.defaults);
        for (key, pattern) in &parent.requirements {
            self.requirements
                .entry(key.clone())
                .or_insert_with(|| pattern.clone());
        }
        merge_parent_first(&mut self.options, &parent.options);
        if self.host.is_none() {
            self.host.clone_from(&parent.host);
        }
        if self.condition.is_none() {
            self.condition.clone_from(&parent.condition);
        }
        if self.schemes.is_none() {
            self.schemes.clone_from(&parent.schemes);
        }
        if self.methods.is_none() {
            self.methods.clone_from(&parent.methods);
        }
    }
}

fn merge_parent_first(own: &mut Map<String, Value>, parent: &Map<String, Value>) {
    if parent.is_empty() {
        return;
    }
    let own_entries = std::mem::take(own);
    for (key, value) in parent {
        let value = own_entries.get(key).unwrap_or(value);
        own.insert(key.clone(), value.clone());
    }
    own.extend(
        own_entries
            .into_iter()
            .filter(|(key, _)| !parent.contains_key(key)),
    );
}

fn uppercase_method(method: Method) -> Method {
    let upper = method.as_str().to_ascii_uppercase();
    if upper == method.as_str() {
        return method;
    }
    Method::from_bytes(upper.as_bytes()).unwrap_or(method)
}

fn serialize_methods<S>(methods: &Option<Vec<Method>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match methods {
        Some(methods) => serializer.collect_seq(methods.iter().map(Method::as_str)),
        None => serializer.serialize_none(),
    }
}
