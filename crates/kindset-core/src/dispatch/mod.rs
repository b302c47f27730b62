//! Runtime dispatch from a tagged value's discriminant to its handler.
//!
//! - [`KindHandler`]: one handler for one kind, authored on its own
//! - [`DispatchTable`]: every kind mapped to exactly one handler, checked
//!   when the table is built
//!
//! The compile-time counterpart is the derived `accept` method over
//! [`Visit`](crate::Visit), where the compiler enforces exhaustiveness.

mod handler;
mod table;


pub use handler::KindHandler;
pub use table::{DispatchTable, DispatchTableBuilder};
