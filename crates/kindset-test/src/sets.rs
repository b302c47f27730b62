//! Closed sets over the geometric payloads.

use kindset::ClosedSet;

use crate::shapes::{Cone, Cube, Sphere};

/// K = {Sphere, Cube}.
#[derive(Clone, Debug, PartialEq, ClosedSet)]
pub enum Shape {
    Sphere(Sphere),
    Cube(Cube),
}

/// K = {Sphere, Cube, Cone}.
#[derive(Clone, Debug, PartialEq, ClosedSet)]
pub enum Solid {
    Sphere(Sphere),
    Cube(Cube),
    Cone(Cone),
}
