//! Heterogeneous collections behind one logical contract.
//!
//! - [`ClosedCollection`]: owns values of a closed set; kinds fixed at
//!   compile time, dispatch by discriminant
//! - [`OpenCollection`]: shared handles to any [`Query`](crate::Query)
//!   implementor, dispatch through the handle
//!
//! Both implement [`QueryCollection`], so callers can switch strategy
//! without touching call sites.

mod closed;
mod open;
mod results;


pub use closed::ClosedCollection;
pub use open::{LocalOpenCollection, NamedOpenCollection, OpenCollection, SyncOpenCollection};
pub use results::{Aggregation, QueryOutcome, QueryResults};

/// Lifecycle of a collection. `Empty` until the first successful `add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionState {
    Empty,
    NonEmpty,
}

impl CollectionState {
    pub(crate) fn of_len(len: usize) -> Self {
        if len == 0 {
            CollectionState::Empty
        } else {
            CollectionState::NonEmpty
        }
    }
}

/// Append and bulk-query, independent of how elements are stored.
pub trait QueryCollection {
    /// What `add` accepts: a tagged value or a shared handle.
    type Element;

    /// Appends an element, preserving insertion order.
    fn add(&mut self, element: Self::Element) -> &mut Self;

    /// Queries every element exactly once, in insertion order.
    fn for_each_query(&self) -> QueryResults;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn state(&self) -> CollectionState {
        CollectionState::of_len(self.len())
    }

    /// Queries every element and folds the results with `policy`.
    fn query_aggregated(&self, policy: Aggregation) -> QueryOutcome {
        self.for_each_query().aggregate(policy)
    }
}
