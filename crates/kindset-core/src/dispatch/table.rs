//! Exhaustive, unambiguous kind-to-handler tables.

use std::fmt::{self, Debug};
use std::marker::PhantomData;

use smallvec::SmallVec;
use tracing::debug;

use super::handler::KindHandler;
use crate::error::ConfigurationError;
use crate::kind::KindSet;
use crate::tagged::{ClosedSet, Variant};

/// Slots are collected inline for sets of up to this many kinds.
const INLINE_KINDS: usize = 8;

/// A mapping from every kind of `E` to exactly one handler.
///
/// A table can only be obtained through [`DispatchTableBuilder::build`] or
/// [`DispatchTable::from_handlers`], both of which reject missing and
/// duplicated registrations. Dispatch is a single index into the handler
/// slice by the value's discriminant.
///
/// # Examples
///
/// ```ignore
/// let table = DispatchTable::<Shape, f64>::builder()
///     .on(|s: &Sphere| s.radius)
///     .on(|c: &Cube| c.edge)
///     .build()?;
/// assert_eq!(table.visit(&Shape::from(Cube::new(2.0))), 2.0);
/// ```
pub struct DispatchTable<E, R> {
    kinds: KindSet,
    handlers: Box<[KindHandler<E, R>]>,
}

impl<E, R> DispatchTable<E, R>
where
    E: ClosedSet,
    R: 'static,
{
    pub fn builder() -> DispatchTableBuilder<E, R> {
        DispatchTableBuilder::new()
    }

    /// Builds a table from independently authored handlers.
    ///
    /// Registration order is irrelevant.
    ///
    /// # Errors
    ///
    /// See [`DispatchTableBuilder::build`].
    pub fn from_handlers<I>(handlers: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = KindHandler<E, R>>,
    {
        handlers
            .into_iter()
            .fold(Self::builder(), DispatchTableBuilder::handler)
            .build()
    }

    /// Invokes the handler registered for `value`'s kind and returns its
    /// result.
    ///
    /// # Panics
    ///
    /// Panics if `E`'s `ClosedSet` and `Variant` impls disagree about a
    /// discriminant. Derived impls never do.
    pub fn visit(&self, value: &E) -> R {
        let kind = value.kind();
        self.handlers
            .get(kind.index())
            .and_then(|handler| handler.call(value))
            .unwrap_or_else(|| {
                panic!(
                    "closed set `{}` reported discriminant {} for a value its handler cannot project",
                    E::NAME,
                    kind
                )
            })
    }

    /// Visits every value in order, collecting the results.
    pub fn visit_all<'a, I>(&self, values: I) -> Vec<R>
    where
        I: IntoIterator<Item = &'a E>,
    {
        values.into_iter().map(|value| self.visit(value)).collect()
    }

    /// The validated kinds this table covers.
    pub fn kind_set(&self) -> KindSet {
        self.kinds
    }

    /// Number of handlers, equal to the number of kinds.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<E, R> Debug for DispatchTable<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchTable")
            .field("set", &self.kinds.name())
            .field("handlers", &self.handlers)
            .finish()
    }
}

/// Collects handlers for a [`DispatchTable`].
///
/// Nothing is validated until [`build`](Self::build), so registrations may
/// arrive in any order.
pub struct DispatchTableBuilder<E, R> {
    handlers: Vec<KindHandler<E, R>>,
    _phantom: PhantomData<fn() -> E>,
}

impl<E, R> DispatchTableBuilder<E, R>
where
    E: ClosedSet,
    R: 'static,
{
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            _phantom: PhantomData,
        }
    }

    /// Registers a handler for the payload type `P`.
    pub fn on<P, F>(self, handler: F) -> Self
    where
        P: Variant<E>,
        F: Fn(&P) -> R + 'static,
    {
        self.handler(KindHandler::new(handler))
    }

    /// Registers an already constructed single-kind handler.
    pub fn handler(mut self, handler: KindHandler<E, R>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Number of handlers registered so far.
    pub fn registered(&self) -> usize {
        self.handlers.len()
    }

    /// Validates the registration and produces the table.
    ///
    /// # Errors
    ///
    /// - the kind set itself is invalid (empty or duplicated kinds)
    /// - [`ConfigurationError::AmbiguousHandler`] if two handlers claim the
    ///   same kind
    /// - [`ConfigurationError::NonExhaustive`] listing every kind left
    ///   without a handler
    pub fn build(self) -> Result<DispatchTable<E, R>, ConfigurationError> {
        let kinds = E::kind_set()?;

        let mut slots: SmallVec<[Option<KindHandler<E, R>>; INLINE_KINDS]> = SmallVec::new();
        slots.resize_with(kinds.len(), || None);

        for handler in self.handlers {
            let index = handler.kind().index();
            let Some(kind) = kinds.get(handler.kind()) else {
                debug!(
                    event = "dispatch_table_rejected",
                    set = kinds.name(),
                    type_name = handler.payload_type(),
                    reason = "unknown_kind"
                );
                return Err(ConfigurationError::UnknownKind {
                    set: kinds.name(),
                    index,
                });
            };
            let slot = &mut slots[index];
            if slot.is_some() {
                debug!(
                    event = "dispatch_table_rejected",
                    set = kinds.name(),
                    kind = kind.name,
                    reason = "ambiguous"
                );
                return Err(ConfigurationError::AmbiguousHandler {
                    set: kinds.name(),
                    kind: kind.name,
                });
            }
            *slot = Some(handler);
        }

        let missing: Vec<&'static str> = kinds
            .iter()
            .zip(&slots)
            .filter(|(_, slot)| slot.is_none())
            .map(|(kind, _)| kind.name)
            .collect();
        if !missing.is_empty() {
            debug!(
                event = "dispatch_table_rejected",
                set = kinds.name(),
                missing = missing.len() as u64,
                reason = "non_exhaustive"
            );
            return Err(ConfigurationError::NonExhaustive {
                set: kinds.name(),
                missing,
            });
        }

        let handlers: Box<[KindHandler<E, R>]> = slots.into_iter().flatten().collect();
        debug!(
            event = "dispatch_table_built",
            set = kinds.name(),
            kinds = handlers.len() as u64
        );

        Ok(DispatchTable { kinds, handlers })
    }
}

impl<E, R> Default for DispatchTableBuilder<E, R>
where
    E: ClosedSet,
    R: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E, R> Debug for DispatchTableBuilder<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchTableBuilder")
            .field("handlers", &self.handlers)
            .finish()
    }
}
