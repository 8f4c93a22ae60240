//! # routebuilder
//!
//! **routebuilder** assembles a flat, ordered, named route table from a tree of
//! route definitions, nested sub-builders and imported route resources.
//!
//! ## Overview
//!
//! Routes are declared incrementally and compositionally, then resolved in a
//! single pass at build time:
//!
//! - path prefixes accumulate through every mount point
//! - builder-level attributes (defaults, requirements, options, host,
//!   condition, schemes, methods) reach only the routes that left them unset
//! - imported resources are loaded through a pluggable [`Loader`]
//! - unnamed routes get a derived name, with collisions disambiguated
//!
//! Because nothing is resolved before [`RouteCollectionBuilder::build`], a
//! builder may keep changing after it has been mounted.
//!
//! ## Architecture
//!
//! - **[`route`]** - [`Route`], [`RouteAttributes`] and [`RouteHandle`]
//! - **[`table`]** - [`RouteTable`], the flat ordered output (and loader input)
//! - **[`loader`]** - [`Loader`] trait and [`LoaderResolver`]
//! - **[`builder`]** - [`RouteCollectionBuilder`] and the flush engine
//! - **[`build_config`]** - [`BuildConfig`] from environment variables
//! - **[`error`]** - [`RoutingError`]
//!
//! ```mermaid
//! sequenceDiagram
//!     participant App
//!     participant Builder as RouteCollectionBuilder
//!     participant Loader
//!     participant Flush as flush engine
//!
//!     App->>Builder: add / mount / set_default ...
//!     App->>Builder: import("admin.yml", "/admin", Some("yaml"))
//!     Builder->>Loader: supports / resolver().resolve
//!     Builder->>Loader: load("admin.yml", Some("yaml"))
//!     Loader-->>Builder: RouteTable
//!     App->>Builder: build()
//!     Builder->>Flush: flush tree depth-first
//!     Flush->>Flush: prefixes + unset-only attribute overlay
//!     Flush->>Flush: check explicit names, derive missing ones
//!     Flush-->>App: RouteTable
//! ```
//!
//! ## Example
//!
//! ```rust
//! use routebuilder::RouteCollectionBuilder;
//! use http::Method;
//!
//! let routes = RouteCollectionBuilder::new();
//! routes.add("/checkout", "OrderController::checkout", Some("checkout"));
//! routes
//!     .add("/blogs", "BlogController::list", None)
//!     .set_methods([Method::GET]);
//!
//! let admin = routes.create_builder();
//! admin.add("/dashboard", "AdminController::dashboard", Some("admin_dashboard"));
//! routes.mount("/admin", &admin).unwrap();
//!
//! routes.set_default("_locale", "fr");
//!
//! let table = routes.build().unwrap();
//! assert_eq!(
//!     table.names().collect::<Vec<_>>(),
//!     ["checkout", "GET_blogs", "admin_dashboard"]
//! );
//! assert_eq!(table.get("admin_dashboard").unwrap().path(), "/admin/dashboard");
//! ```
//!
//! The builder tree is single-threaded (`Rc`-shared) and meant to be
//! assembled by one owner, then built.

pub mod build_config;
pub mod builder;
pub mod error;
pub mod loader;
pub mod route;
pub mod table;

pub use build_config::BuildConfig;
pub use builder::{Mountable, RouteCollectionBuilder};
pub use error::RoutingError;
pub use loader::{Loader, LoaderResolver};
pub use route::{Route, RouteAttributes, RouteHandle};
pub use table::RouteTable;
