//! # Builder Module
//!
//! [`RouteCollectionBuilder`] lets routes be declared incrementally: inline,
//! in nested sub-builders, or imported from external resources through a
//! [`Loader`](crate::Loader). Everything is recorded as-is and only resolved
//! when [`build`](RouteCollectionBuilder::build) is called.
//!
//! ## Build
//!
//! ```text
//! root builder
//!   ├─ route            → cloned
//!   ├─ mounted builder  → flushed recursively, then mount prefix applied
//!   └─ mounted table    → routes cloned, mount prefix applied
//!         │
//!         ▼
//!   own prefix + unset-only attribute overlay applied to every entry
//!         │
//!         ▼
//!   explicit names checked, missing names derived  →  RouteTable
//! ```
//!
//! Order in the resulting table is the depth-first insertion order of the
//! tree.

mod core;
mod flush;
mod naming;

pub use core::{Mountable, RouteCollectionBuilder};
pub use flush::join_prefix;
pub use naming::derive_name;
