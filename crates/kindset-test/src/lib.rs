//! Shared test fixtures for kindset crates.
//!
//! This crate provides geometric kinds and closed sets over them.
//!
//! - [`shapes`] - Sphere, Cube, Cone and Torus payload types
//! - [`sets`] - `Shape` and `Solid` closed sets derived over the payloads
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! kindset-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use kindset_test::sets::{Shape, Solid};
//! use kindset_test::shapes::{Cone, Cube, Sphere};
//! ```

pub mod sets;
pub mod shapes;

// Re-export commonly used types at crate root for convenience
pub use sets::{Shape, Solid};
pub use shapes::{Cone, Cube, Sphere, Torus};
