//! Tagged values: closed sets of kinds represented as a single `enum`.
//!
//! A closed set is an `enum` with one tuple variant per kind, each holding
//! the kind's payload. Exactly one payload is live at a time and the
//! discriminant reported by [`ClosedSet::kind`] always names it.
//!
//! Implementations are normally generated by `#[derive(ClosedSet)]`, which
//! also emits one [`Variant`] impl per payload type, `From<Payload>`, and an
//! exhaustive `accept` method over [`Visit`].

use std::any::Any;

use crate::error::ConfigurationError;
use crate::kind::{KindDescriptor, KindId, KindSet};

/// A sum type over a fixed, declared set of kinds.
pub trait ClosedSet: Sized + 'static {
    /// Name of the set, used in diagnostics.
    const NAME: &'static str;

    /// Declared kinds in declaration order.
    const KINDS: &'static [KindDescriptor];

    /// Returns the discriminant of the live payload.
    fn kind(&self) -> KindId;

    /// Wraps `value` if its type is one of the declared payload types (or
    /// the set itself).
    ///
    /// Returns `None` for any other type; the value is dropped.
    fn try_wrap<T: Any>(value: T) -> Option<Self>;

    /// Validates the declared kinds.
    ///
    /// # Errors
    ///
    /// Fails for an empty or duplicated declaration; see [`KindSet::new`].
    fn kind_set() -> Result<KindSet, ConfigurationError> {
        KindSet::new(Self::NAME, Self::KINDS)
    }

    /// Descriptor of the live payload's kind.
    fn descriptor(&self) -> Option<&'static KindDescriptor> {
        Self::KINDS.get(self.kind().index())
    }
}

/// A payload type that is one kind of the closed set `E`.
pub trait Variant<E: ClosedSet>: Sized + 'static {
    /// Discriminant of this kind within `E`.
    const KIND: KindId;

    /// Moves the payload into the set.
    fn wrap(self) -> E;

    /// Borrows the payload if `value` currently holds this kind.
    fn project(value: &E) -> Option<&Self>;
}

/// A handler for one payload type.
///
/// A visitor implementing `Visit<P>` for every payload of a closed set can be
/// passed to the derived `accept` method; leaving a payload out is a compile
/// error.
pub trait Visit<P: ?Sized> {
    type Output;

    fn visit(&mut self, payload: &P) -> Self::Output;
}
