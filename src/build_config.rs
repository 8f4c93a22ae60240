//! # Build Configuration Module
//!
//! Environment variable-based configuration for
//! [`RouteCollectionBuilder::build_with`](crate::RouteCollectionBuilder::build_with).
//!
//! ## Environment Variables
//!
//! ### `ROUTEBUILDER_MAX_DEPTH`
//!
//! Maximum nesting depth of mounted builders that a build will follow.
//! Accepts values in:
//! - Decimal: `64`
//! - Hexadecimal: `0x40`
//!
//! Default: unset (no limit). Unparseable values fall back to the default.
//! [`RouteCollectionBuilder::build`](crate::RouteCollectionBuilder::build)
//! never reads the environment; only an explicit config limits the depth.
//!
//! ## Usage
//!
//! ```rust
//! use routebuilder::{BuildConfig, RouteCollectionBuilder};
//!
//! let routes = RouteCollectionBuilder::new();
//! routes.add("/", "MainController::index", Some("homepage"));
//!
//! let config = BuildConfig::from_env();
//! let table = routes.build_with(&config).unwrap();
//! assert_eq!(table.len(), 1);
//! ```

use std::env;

/// Environment variable holding the maximum builder nesting depth.
pub const MAX_DEPTH_ENV: &str = "ROUTEBUILDER_MAX_DEPTH";

/// Settings applied while flushing a builder tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildConfig {
    /// Deepest builder nesting a build follows before failing (default: no limit)
    pub max_depth: Option<usize>,
}

impl BuildConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let max_depth = env::var(MAX_DEPTH_ENV)
            .ok()
            .and_then(|val| parse_depth(&val));
        BuildConfig { max_depth }
    }
}

fn parse_depth(val: &str) -> Option<usize> {
    let val = val.trim();
    if let Some(hex) = val.strip_prefix("0x") {
        usize::from_str_radix(hex, 16).ok()
    } else {
        val.parse().ok()
    }
}
