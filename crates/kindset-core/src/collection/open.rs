//! Open collection: shared handles to any type implementing [`Query`].
//!
//! Kinds are not declared up front; anything satisfying the capability
//! contract can be added, including types defined by downstream crates.
//! Each query is an indirect call through the handle, and each `add` or
//! drop touches a reference count.
//!
//! Back-references from elements to their holders must be [`Weak`](std::rc::Weak);
//! a strong cycle keeps every member alive forever.

use std::ops::Deref;
use std::rc::{self, Rc};
use std::sync::{self, Arc};

use tracing::trace;

use super::{CollectionState, QueryCollection, QueryResults};
use crate::capability::{Named, NamedQuery, Query};

/// Open collection with non-atomic reference counting.
pub type LocalOpenCollection = OpenCollection<Rc<dyn Query>>;

/// Open collection whose elements also report their kind name.
pub type NamedOpenCollection = OpenCollection<Rc<dyn NamedQuery>>;

/// Open collection whose handles may be shared across threads.
pub type SyncOpenCollection = OpenCollection<Arc<dyn Query + Send + Sync>>;

/// An ordered, append-only sequence of shared capability handles.
///
/// `H` is the handle type, usually `Rc<dyn Query>`. Cloning the collection
/// clones handles, not elements.
#[derive(Debug, Clone)]
pub struct OpenCollection<H = Rc<dyn Query>> {
    handles: Vec<H>,
}

impl<H> OpenCollection<H>
where
    H: Deref + Clone,
    H::Target: Query,
{
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            handles: Vec::with_capacity(capacity),
        }
    }

    /// Appends a handle. Amortized O(1).
    pub fn add(&mut self, handle: H) -> &mut Self {
        self.handles.push(handle);
        self
    }

    /// Runs `query()` on every element in insertion order, resolving each
    /// call through the handle's concrete type.
    pub fn for_each_query(&self) -> QueryResults {
        trace!(
            event = "query_pass",
            set = "open",
            elements = self.handles.len() as u64
        );
        self.handles.iter().map(|handle| handle.query()).collect()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn state(&self) -> CollectionState {
        CollectionState::of_len(self.handles.len())
    }

    pub fn get(&self, index: usize) -> Option<&H> {
        self.handles.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, H> {
        self.handles.iter()
    }

    /// Shared clones of every handle, in insertion order.
    pub fn handles(&self) -> Vec<H> {
        self.handles.clone()
    }
}

impl<H> OpenCollection<H>
where
    H: Deref + Clone,
    H::Target: Query + Named,
{
    /// Pairs each element's kind name with its query result.
    pub fn for_each_named(&self) -> Vec<(&'static str, bool)> {
        self.handles
            .iter()
            .map(|handle| (handle.kind_name(), handle.query()))
            .collect()
    }
}

impl<T: Query + ?Sized> OpenCollection<Rc<T>> {
    /// Weak references to every element, for back-pointers that must not
    /// keep elements alive.
    pub fn downgrade_all(&self) -> Vec<rc::Weak<T>> {
        self.handles.iter().map(Rc::downgrade).collect()
    }

    /// Number of strong holders of the element at `index`, this collection
    /// included.
    pub fn holders(&self, index: usize) -> Option<usize> {
        self.handles.get(index).map(Rc::strong_count)
    }
}

impl<T: Query + ?Sized> OpenCollection<Arc<T>> {
    /// Weak references to every element, for back-pointers that must not
    /// keep elements alive.
    pub fn downgrade_all(&self) -> Vec<sync::Weak<T>> {
        self.handles.iter().map(Arc::downgrade).collect()
    }

    /// Number of strong holders of the element at `index`, this collection
    /// included.
    pub fn holders(&self, index: usize) -> Option<usize> {
        self.handles.get(index).map(Arc::strong_count)
    }
}

impl<H> Default for OpenCollection<H>
where
    H: Deref + Clone,
    H::Target: Query,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<H> QueryCollection for OpenCollection<H>
where
    H: Deref + Clone,
    H::Target: Query,
{
    type Element = H;

    fn add(&mut self, element: H) -> &mut Self {
        OpenCollection::add(self, element)
    }

    fn for_each_query(&self) -> QueryResults {
        OpenCollection::for_each_query(self)
    }

    fn len(&self) -> usize {
        self.handles.len()
    }
}

impl<H> Extend<H> for OpenCollection<H> {
    fn extend<I: IntoIterator<Item = H>>(&mut self, iter: I) {
        self.handles.extend(iter);
    }
}

impl<H> FromIterator<H> for OpenCollection<H> {
    fn from_iter<I: IntoIterator<Item = H>>(iter: I) -> Self {
        Self {
            handles: iter.into_iter().collect(),
        }
    }
}

impl<'a, H> IntoIterator for &'a OpenCollection<H> {
    type Item = &'a H;
    type IntoIter = std::slice::Iter<'a, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.handles.iter()
    }
}
