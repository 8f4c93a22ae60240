//! Errors raised while assembling or building a route collection.

use thiserror::Error;

/// Route collection error
///
/// Returned by [`RouteCollectionBuilder::import`](crate::RouteCollectionBuilder::import),
/// [`RouteCollectionBuilder::mount`](crate::RouteCollectionBuilder::mount) and
/// [`RouteCollectionBuilder::build`](crate::RouteCollectionBuilder::build).
/// All of them are configuration mistakes; nothing here is retried.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// `import` was called on a builder that has no loader configured
    ///
    /// Raised at the call site, before any resolution is attempted.
    #[error("cannot import `{resource}`: this builder was created without a route loader")]
    MissingLoader {
        /// The resource that was being imported
        resource: String,
    },
    /// Neither the configured loader nor its resolver supports the resource
    #[error("no route loader supports resource `{resource}` (type: {})", .type_hint.as_deref().unwrap_or("none"))]
    UnresolvableResource {
        /// The resource that was being imported
        resource: String,
        /// The type hint passed to `import`, if any
        type_hint: Option<String>,
    },
    /// The loader failed while loading the resource
    ///
    /// The loader's own error is carried unchanged and can be downcast.
    #[error(transparent)]
    Load(anyhow::Error),
    /// Two routes were given the same explicit name
    #[error("route name `{name}` is defined more than once")]
    NameConflict {
        /// The duplicated name
        name: String,
    },
    /// Mounting the builder would make it one of its own descendants
    #[error("cannot mount a route builder inside itself")]
    MountCycle,
    /// Builder nesting is deeper than [`BuildConfig::max_depth`](crate::BuildConfig)
    #[error("route builders are nested deeper than the maximum of {max_depth} levels")]
    DepthExceeded {
        /// The configured limit
        max_depth: usize,
    },
}
