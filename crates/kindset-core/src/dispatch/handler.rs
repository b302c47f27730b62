//! Single-kind handlers.

use std::any::type_name;
use std::fmt::{self, Debug};

use crate::kind::KindId;
use crate::tagged::{ClosedSet, Variant};

/// A handler for exactly one kind of the closed set `E`.
///
/// Handlers are authored independently and combined into a
/// [`DispatchTable`](super::DispatchTable), which checks at build time that
/// every kind is covered once.
///
/// # Type Parameters
/// * `E` - The closed set
/// * `R` - The handler result
pub struct KindHandler<E, R> {
    kind: KindId,
    payload: &'static str,
    call: Box<dyn Fn(&E) -> Option<R>>,
}

impl<E, R> KindHandler<E, R>
where
    E: ClosedSet,
    R: 'static,
{
    /// Creates a handler for the payload type `P`.
    pub fn new<P, F>(handler: F) -> Self
    where
        P: Variant<E>,
        F: Fn(&P) -> R + 'static,
    {
        Self {
            kind: P::KIND,
            payload: type_name::<P>(),
            call: Box::new(move |value: &E| P::project(value).map(&handler)),
        }
    }

    /// Discriminant of the kind this handler serves.
    pub fn kind(&self) -> KindId {
        self.kind
    }

    /// Type name of the payload this handler accepts.
    pub fn payload_type(&self) -> &'static str {
        self.payload
    }

    /// Runs the handler if `value` holds this handler's kind.
    pub fn call(&self, value: &E) -> Option<R> {
        (self.call)(value)
    }
}

impl<E, R> Debug for KindHandler<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindHandler")
            .field("kind", &self.kind)
            .field("payload", &self.payload)
            .finish()
    }
}
