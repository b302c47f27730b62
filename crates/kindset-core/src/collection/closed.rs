//! Closed collection: owned tagged values of one closed set.

use std::any::{type_name, Any};

use tracing::{debug, trace};

use super::{CollectionState, QueryCollection, QueryResults};
use crate::capability::Query;
use crate::dispatch::DispatchTable;
use crate::error::{ConfigurationError, TypeMismatchError};
use crate::kind::KindDescriptor;
use crate::tagged::ClosedSet;

/// An ordered, append-only sequence of values of the closed set `E`.
///
/// The collection owns its elements and drops them with itself. Membership
/// is closed: only values of `E`'s declared kinds can enter, so every
/// bulk operation covers every element with a statically known handler.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedCollection<E> {
    elements: Vec<E>,
}

impl<E: ClosedSet> ClosedCollection<E> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Creates an empty collection after validating `E`'s declared kinds.
    ///
    /// Derived sets are checked at compile time; use this for hand-written
    /// `ClosedSet` impls.
    ///
    /// # Errors
    ///
    /// Fails for an empty or duplicated declaration; see
    /// [`KindSet::new`](crate::KindSet::new).
    pub fn try_new() -> Result<Self, ConfigurationError> {
        Self::try_with_capacity(0)
    }

    /// Like [`try_new`](Self::try_new), reserving room for `capacity`
    /// elements.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ConfigurationError> {
        E::kind_set()?;
        Ok(Self::with_capacity(capacity))
    }

    /// Appends an element. Amortized O(1).
    pub fn add(&mut self, element: impl Into<E>) -> &mut Self {
        self.elements.push(element.into());
        self
    }

    /// Appends `value` if its type is one of `E`'s kinds.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatchError`] for any other type. The collection is
    /// left unchanged.
    pub fn try_add<T: Any>(&mut self, value: T) -> Result<&mut Self, TypeMismatchError> {
        match E::try_wrap(value) {
            Some(element) => {
                self.elements.push(element);
                Ok(self)
            }
            None => {
                debug!(
                    event = "element_rejected",
                    set = E::NAME,
                    type_name = type_name::<T>()
                );
                Err(TypeMismatchError::new(E::NAME, type_name::<T>()))
            }
        }
    }

    /// Runs `query()` on every element in insertion order.
    pub fn for_each_query(&self) -> QueryResults
    where
        E: Query,
    {
        trace!(
            event = "query_pass",
            set = E::NAME,
            elements = self.elements.len() as u64
        );
        self.elements.iter().map(Query::query).collect()
    }

    /// Runs the table's query handlers on every element in insertion order.
    pub fn query_with(&self, table: &DispatchTable<E, bool>) -> QueryResults {
        trace!(
            event = "query_pass",
            set = E::NAME,
            elements = self.elements.len() as u64
        );
        QueryResults::new(table.visit_all(&self.elements))
    }

    /// Runs the table's handlers on every element in insertion order.
    pub fn for_each_with<R: 'static>(&self, table: &DispatchTable<E, R>) -> Vec<R> {
        table.visit_all(&self.elements)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn state(&self) -> CollectionState {
        CollectionState::of_len(self.elements.len())
    }

    pub fn get(&self, index: usize) -> Option<&E> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.elements
    }

    /// Element count per declared kind, in declaration order.
    pub fn count_by_kind(&self) -> Vec<(&'static KindDescriptor, usize)> {
        let mut counts = vec![0usize; E::KINDS.len()];
        for element in &self.elements {
            if let Some(count) = counts.get_mut(element.kind().index()) {
                *count += 1;
            }
        }
        E::KINDS.iter().zip(counts).collect()
    }
}

impl<E: ClosedSet> Default for ClosedCollection<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ClosedSet + Query> QueryCollection for ClosedCollection<E> {
    type Element = E;

    fn add(&mut self, element: E) -> &mut Self {
        ClosedCollection::add(self, element)
    }

    fn for_each_query(&self) -> QueryResults {
        ClosedCollection::for_each_query(self)
    }

    fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<E: ClosedSet, T: Into<E>> Extend<T> for ClosedCollection<E> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter.into_iter().map(Into::into));
    }
}

impl<E: ClosedSet, T: Into<E>> FromIterator<T> for ClosedCollection<E> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<E> IntoIterator for ClosedCollection<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a ClosedCollection<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
