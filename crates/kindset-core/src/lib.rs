//! kindset Core - heterogeneous collections over a known set of kinds
//!
//! This crate provides two interchangeable ways to hold elements of
//! different kinds and run a shared operation across them:
//! - Closed sets: an `enum` per set, exhaustive dispatch by discriminant
//! - Open collections: shared handles to a capability trait, dynamic dispatch
//! - Dispatch tables built from single-kind handlers, checked at setup
//! - Aggregation of per-element query results

pub mod capability;
pub mod collection;
pub mod dispatch;
pub mod error;
pub mod kind;
pub mod tagged;

#[cfg(test)]
mod test_utils;

pub use capability::{Named, NamedQuery, Query};
pub use collection::{
    Aggregation, ClosedCollection, CollectionState, LocalOpenCollection, NamedOpenCollection,
    OpenCollection, QueryCollection, QueryOutcome, QueryResults, SyncOpenCollection,
};
pub use dispatch::{DispatchTable, DispatchTableBuilder, KindHandler};
pub use error::{ConfigurationError, KindsetError, TypeMismatchError};
pub use kind::{KindDescriptor, KindId, KindSet};
pub use tagged::{ClosedSet, Variant, Visit};
