//! kindset - heterogeneous collections over a known set of kinds
//!
//! Pick a closed set when every kind is known when your crate is built, and
//! an open collection when downstream code must be able to add kinds.
//!
//! # Example
//!
//! ```rust
//! use kindset::prelude::*;
//!
//! struct Sphere;
//! struct Cube;
//!
//! impl Query for Sphere {
//!     fn query(&self) -> bool { true }
//! }
//!
//! impl Query for Cube {
//!     fn query(&self) -> bool { false }
//! }
//!
//! #[derive(ClosedSet)]
//! enum Shape {
//!     Sphere(Sphere),
//!     Cube(Cube),
//! }
//!
//! let mut shapes = ClosedCollection::<Shape>::new();
//! shapes.add(Sphere).add(Cube);
//! assert_eq!(shapes.for_each_query(), [true, false]);
//! assert!(shapes.for_each_query().any());
//! ```
//!
//! A closed set must declare at least one kind:
//!
//! ```compile_fail
//! use kindset::ClosedSet;
//!
//! #[derive(ClosedSet)]
//! enum Nothing {}
//! ```
//!
//! and no payload type may appear twice:
//!
//! ```compile_fail
//! use kindset::prelude::*;
//!
//! struct Sphere;
//! impl Query for Sphere {
//!     fn query(&self) -> bool { true }
//! }
//!
//! #[derive(ClosedSet)]
//! enum Twice {
//!     First(Sphere),
//!     Second(Sphere),
//! }
//! ```

// User-facing derive
pub use kindset_macros::ClosedSet;

pub use kindset_core::{
    Aggregation, ClosedCollection, ClosedSet, CollectionState, ConfigurationError,
    DispatchTable, DispatchTableBuilder, KindDescriptor, KindHandler, KindId, KindSet,
    KindsetError, LocalOpenCollection, Named, NamedOpenCollection, NamedQuery, OpenCollection,
    Query, QueryCollection, QueryOutcome, QueryResults, SyncOpenCollection, TypeMismatchError,
    Variant, Visit,
};

/// Result type alias for kindset operations.
pub use kindset_core::error::Result;

pub use kindset_config::{CollectionConfig, ConfigError, ConsoleConfig};

#[cfg(feature = "console")]
pub use kindset_console as console;

mod configured;
pub use configured::{closed_collection, init_console, open_collection, query_configured};

/// Internal paths for macro-generated code. Do not use directly.
#[doc(hidden)]
pub mod __internal {
    pub use kindset_core::{ClosedSet, KindDescriptor, KindId, Named, Query, Variant, Visit};
}

pub mod prelude {
    pub use super::ClosedSet;
    pub use super::{
        Aggregation, ClosedCollection, DispatchTable, KindHandler, LocalOpenCollection, Named,
        OpenCollection, Query, QueryCollection, QueryResults, Variant, Visit,
    };
}
