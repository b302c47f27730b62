//! Capability contracts shared by kinds.
//!
//! Capabilities are small, independent traits. A kind opts into each one
//! separately, and code that needs several asks for their intersection with
//! ordinary bounds (`T: Query + Named`).

use std::rc::Rc;
use std::sync::Arc;

/// The shared operation every kind answers.
///
/// This is the capability interface of the open model: any type, including
/// types defined long after this crate was compiled, can implement it and be
/// stored in an [`OpenCollection`](crate::OpenCollection).
pub trait Query {
    fn query(&self) -> bool;
}

/// Exposes a stable, human-readable name for the concrete kind.
pub trait Named {
    fn kind_name(&self) -> &'static str;
}

/// Both capabilities at once, usable as a single trait object
/// (`Rc<dyn NamedQuery>`).
pub trait NamedQuery: Query + Named {}

impl<T: Query + Named + ?Sized> NamedQuery for T {}

impl<T: Query + ?Sized> Query for Box<T> {
    fn query(&self) -> bool {
        (**self).query()
    }
}

impl<T: Query + ?Sized> Query for Rc<T> {
    fn query(&self) -> bool {
        (**self).query()
    }
}

impl<T: Query + ?Sized> Query for Arc<T> {
    fn query(&self) -> bool {
        (**self).query()
    }
}

impl<T: Named + ?Sized> Named for Box<T> {
    fn kind_name(&self) -> &'static str {
        (**self).kind_name()
    }
}

impl<T: Named + ?Sized> Named for Rc<T> {
    fn kind_name(&self) -> &'static str {
        (**self).kind_name()
    }
}

impl<T: Named + ?Sized> Named for Arc<T> {
    fn kind_name(&self) -> &'static str {
        (**self).kind_name()
    }
}
