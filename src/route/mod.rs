//! # Route Module
//!
//! Route entries and the attribute model shared by routes and builders.
//!
//! - [`Route`] - path pattern, opaque handler reference and [`RouteAttributes`]
//! - [`RouteAttributes`] - defaults, requirements, options, host, condition,
//!   schemes and methods, each slot independently set or unset
//! - [`RouteHandle`] - shared, chainable reference to a route held by a builder
//!
//! The set/unset distinction drives inheritance: a builder's attribute only
//! reaches a route whose corresponding slot (or map key) is still unset. Empty
//! strings, `"0"` and `false` are ordinary values, never "absent".

mod attributes;
mod handle;
mod types;

pub use attributes::RouteAttributes;
pub use handle::RouteHandle;
pub use types::Route;
