//! Geometric payload types.
//!
//! Every shape answers [`Query`] with "has a curved surface": spheres,
//! cones and tori do, cubes don't.
//!
//! # Example
//!
//! ```ignore
//! use kindset_test::shapes::{Cube, Sphere};
//!
//! assert!(Sphere::new(1.0).query());
//! assert!(!Cube::new(1.0).query());
//! ```

use std::f64::consts::PI;

use kindset::{Named, Query};

/// A sphere with the given radius.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f64,
}

impl Sphere {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.radius.powi(3)
    }
}

/// A cube with the given edge length.
#[derive(Clone, Debug, PartialEq)]
pub struct Cube {
    pub edge: f64,
}

impl Cube {
    pub fn new(edge: f64) -> Self {
        Self { edge }
    }

    pub fn volume(&self) -> f64 {
        self.edge.powi(3)
    }
}

/// A right circular cone.
#[derive(Clone, Debug, PartialEq)]
pub struct Cone {
    pub radius: f64,
    pub height: f64,
}

impl Cone {
    pub fn new(radius: f64, height: f64) -> Self {
        Self { radius, height }
    }

    pub fn volume(&self) -> f64 {
        PI * self.radius.powi(2) * self.height / 3.0
    }
}

/// A torus. Not part of any closed set; used to exercise the open model.
#[derive(Clone, Debug, PartialEq)]
pub struct Torus {
    pub major: f64,
    pub minor: f64,
}

impl Torus {
    pub fn new(major: f64, minor: f64) -> Self {
        Self { major, minor }
    }
}

impl Query for Sphere {
    fn query(&self) -> bool {
        true
    }
}

impl Query for Cube {
    fn query(&self) -> bool {
        false
    }
}

impl Query for Cone {
    fn query(&self) -> bool {
        true
    }
}

impl Query for Torus {
    fn query(&self) -> bool {
        true
    }
}

impl Named for Sphere {
    fn kind_name(&self) -> &'static str {
        "Sphere"
    }
}

impl Named for Cube {
    fn kind_name(&self) -> &'static str {
        "Cube"
    }
}

impl Named for Cone {
    fn kind_name(&self) -> &'static str {
        "Cone"
    }
}

impl Named for Torus {
    fn kind_name(&self) -> &'static str {
        "Torus"
    }
}
